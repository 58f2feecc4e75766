/// Builds a [`Value`](crate::Value) tree from JSON-like literal syntax.
///
/// Object keys must be string literals. Values are `null`, `true`, `false`,
/// nested `[...]` / `{...}` literals, or any single-token expression that
/// implements `Serialize`. Wrap negative numbers in parentheses.
///
/// Expressions go through [`to_value`](crate::to_value), and a value that
/// fails to serialize becomes [`Value::Null`](crate::Value::Null) without any
/// error. A map with tuple keys, for example, silently turns into `null`. Call
/// `to_value` directly when the error matters.
///
/// ```rust
/// use yaml_lite::{yaml, Value};
///
/// let tree = yaml!({
///     "motor": {"kp": 7.0, "offset": (-2)},
///     "ids": [1, 2, null]
/// });
/// assert_eq!(tree["motor"]["offset"], Value::Int(-2));
/// assert_eq!(tree["ids"][2], Value::Null);
/// ```
#[macro_export]
macro_rules! yaml {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::yaml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key.to_string(), $crate::yaml!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
