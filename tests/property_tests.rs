//! Property-based tests for the round-trip law and scalar inference.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use yaml_lite::{coerce, from_str, parse, render, to_string, Mapping, RenderOptions, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._:'\"/-]{0,16}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        prop::num::f64::NORMAL.prop_map(Value::Float),
        text().prop_map(Value::String),
    ]
}

/// Trees of the shape the parser produces: mappings all the way down,
/// with non-empty sequences of scalars as leaves.
fn tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        3 => scalar(),
        1 => prop::collection::vec(scalar(), 1..5).prop_map(Value::Sequence),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            3 => scalar(),
            1 => prop::collection::vec(scalar(), 1..5).prop_map(Value::Sequence),
            2 => prop::collection::vec((key(), inner), 0..6)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect::<Mapping>())),
        ]
    })
}

fn root() -> impl Strategy<Value = Value> {
    prop::collection::vec((key(), tree()), 0..8)
        .prop_map(|entries| Value::Mapping(entries.into_iter().collect::<Mapping>()))
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    name: String,
    rate: i64,
    gain: f64,
    enabled: bool,
    ports: Vec<i32>,
    limit: Option<i64>,
}

fn settings() -> impl Strategy<Value = Settings> {
    (
        text(),
        any::<i64>(),
        prop::num::f64::NORMAL,
        any::<bool>(),
        prop::collection::vec(any::<i32>(), 1..10),
        proptest::option::of(any::<i64>()),
    )
        .prop_map(|(name, rate, gain, enabled, ports, limit)| Settings {
            name,
            rate,
            gain,
            enabled,
            ports,
            limit,
        })
}

proptest! {
    #[test]
    fn prop_render_then_parse_is_identity(tree in root(), indent in 1usize..=8) {
        let text = render(&tree, &RenderOptions::new().with_indent(indent));
        let back = parse(&text);
        prop_assert_eq!(back, Ok(tree), "rendered:\n{}", text);
    }

    #[test]
    fn prop_render_is_a_fixed_point(tree in root()) {
        let once = render(&tree, &RenderOptions::default());
        let twice = render(&parse(&once).unwrap(), &RenderOptions::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_typed_round_trip(value in settings()) {
        let text = to_string(&value).unwrap();
        let back: Settings = from_str(&text).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_value_after_key_is_coerced(token in "[^#\n]{1,24}") {
        prop_assume!(!token.trim().is_empty());
        let tree = parse(&format!("k: {}", token)).unwrap();
        prop_assert_eq!(&tree["k"], &coerce(&token));
    }

    #[test]
    fn prop_integers_read_back(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()), Value::Int(n));
    }

    #[test]
    fn prop_parse_never_panics(input in "[ a-z:#\n-]{0,64}") {
        let _ = parse(&input);
    }
}
