use yaml_lite::{parse, yaml, Mapping, Value};

#[test]
fn test_yaml_macro_null() {
    assert_eq!(yaml!(null), Value::Null);
}

#[test]
fn test_yaml_macro_booleans() {
    assert_eq!(yaml!(true), Value::Bool(true));
    assert_eq!(yaml!(false), Value::Bool(false));
}

#[test]
fn test_yaml_macro_numbers() {
    assert_eq!(yaml!(42), Value::Int(42));
    assert_eq!(yaml!(3.5), Value::Float(3.5));
    assert_eq!(yaml!(-123), Value::Int(-123));
    assert_eq!(yaml!(7u64), Value::Int(7));
}

#[test]
fn test_yaml_macro_strings() {
    assert_eq!(yaml!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(yaml!(""), Value::String(String::new()));
}

#[test]
fn test_yaml_macro_sequences() {
    assert_eq!(yaml!([]), Value::Sequence(vec![]));
    assert_eq!(
        yaml!([1, "two", 3.0, null, true]),
        Value::Sequence(vec![
            Value::Int(1),
            Value::String("two".into()),
            Value::Float(3.0),
            Value::Null,
            Value::Bool(true),
        ])
    );
}

#[test]
fn test_yaml_macro_mappings() {
    assert_eq!(yaml!({}), Value::Mapping(Mapping::new()));

    let tree = yaml!({
        "name": "kros",
        "rate": 50,
    });
    let map = tree.as_mapping().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&Value::String("kros".into())));
    assert_eq!(map.get("rate"), Some(&Value::Int(50)));
}

#[test]
fn test_yaml_macro_expressions() {
    let gain = 7.0;
    let ports = vec![1u8, 2];
    let tree = yaml!({"kp": gain, "ports": ports, "offset": (-3)});
    assert_eq!(tree["kp"], Value::Float(7.0));
    assert_eq!(tree["ports"], yaml!([1, 2]));
    assert_eq!(tree["offset"], Value::Int(-3));
}

#[test]
fn test_yaml_macro_matches_parser() {
    let parsed = parse(
        "\
kros:
  motor:
    kp: 7.0
    calibrate: true
  ports:
    - 1
    - 2
",
    )
    .unwrap();
    let built = yaml!({
        "kros": {
            "motor": {"kp": 7.0, "calibrate": true},
            "ports": [1, 2]
        }
    });
    assert_eq!(parsed, built);
}
