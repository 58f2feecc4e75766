//! The in-memory tree produced by the parser and consumed by the printer.
//!
//! ## Core Types
//!
//! - [`Value`]: null, boolean, integer, float, string, mapping, or sequence
//! - [`Mapping`](crate::Mapping): insertion-ordered string-keyed map
//!
//! ### Creating Values
//!
//! ```rust
//! use yaml_lite::{yaml, Value};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let port = Value::from(8080);
//! let host = Value::from("localhost");
//!
//! let server = yaml!({
//!     "host": "localhost",
//!     "port": 8080
//! });
//! assert_eq!(server["port"], port);
//! ```
//!
//! ### Typed Access
//!
//! The `as_*` accessors are lenient (`as_f64` widens integers). The `TryFrom`
//! conversions are strict and report [`Error::TypeMismatch`](crate::Error):
//!
//! ```rust
//! use yaml_lite::{parse, Error};
//! use std::convert::TryFrom;
//!
//! let config = parse("pid:\n    kp: 7.0\n    ki: 0\n").unwrap();
//!
//! let kp = f64::try_from(&config["pid"]["kp"]).unwrap();
//! assert_eq!(kp, 7.0);
//!
//! let ki = f64::try_from(&config["pid"]["ki"]);
//! assert!(matches!(ki, Err(Error::TypeMismatch { .. })));
//! assert_eq!(config["pid"]["ki"].as_f64(), Some(0.0));
//! ```

use crate::Mapping;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

static NULL: Value = Value::Null;

/// A node of the document tree.
///
/// Sequences produced by the parser only ever hold scalars; the printer still
/// accepts containers inside sequences.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::Value;
///
/// let null = Value::Null;
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_int());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` for integers and floats.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns `true` for mappings and sequences.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::Sequence(_))
    }

    /// Short lowercase name of the variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`, widening integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::Value;
    ///
    /// assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    /// assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Looks up a key if this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Descends through nested mappings one key at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::parse;
    ///
    /// let config = parse("kros:\n    motor:\n        calibrate: true\n").unwrap();
    /// let calibrate = config.get_path(&["kros", "motor", "calibrate"]);
    /// assert_eq!(calibrate.and_then(|v| v.as_bool()), Some(true));
    /// assert!(config.get_path(&["kros", "servo"]).is_none());
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Returns [`Value::Null`] when the key is absent or `self` is not a mapping.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Returns [`Value::Null`] when out of range or `self` is not a sequence.
    fn index(&self, index: usize) -> &Value {
        self.as_sequence()
            .and_then(|seq| seq.get(index))
            .unwrap_or(&NULL)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", crate::render::format_float(*fl)),
            Value::String(s) => write!(f, "{}", s),
            Value::Mapping(_) | Value::Sequence(_) => {
                let text = crate::render::render(self, &crate::RenderOptions::default());
                write!(f, "{}", text.trim_end_matches('\n'))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => {
                use serde::ser::SerializeSeq;
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for element in seq {
                    out.serialize_element(element)?;
                }
                out.end()
            }
            Value::Mapping(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a null, boolean, number, string, mapping, or sequence")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Int(i)),
                    Err(_) => Ok(Value::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Sequence(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Mapping::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Mapping(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// Strict conversions: the caller asserts the scalar type it expects.
impl TryFrom<&Value> for bool {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(crate::Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        match value {
            Value::Int(i) => Ok(*i),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        match value {
            Value::Float(f) => Ok(*f),
            other => Err(crate::Error::type_mismatch("float", other.type_name())),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        bool::try_from(&value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        i64::try_from(&value)
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        f64::try_from(&value)
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> Value {
        let mut motor = Mapping::new();
        motor.insert("kp".to_string(), Value::Float(7.0));
        motor.insert("calibrate".to_string(), Value::Bool(true));
        let mut root = Mapping::new();
        root.insert("motor".to_string(), Value::Mapping(motor));
        root.insert(
            "ids".to_string(),
            Value::Sequence(vec![Value::Int(1), Value::Int(2)]),
        );
        Value::Mapping(root)
    }

    #[test]
    fn test_index_by_key_and_position() {
        let value = sample();
        assert_eq!(value["motor"]["kp"], Value::Float(7.0));
        assert_eq!(value["ids"][1], Value::Int(2));
        assert_eq!(value["ids"][5], Value::Null);
        assert_eq!(value["missing"]["deeper"], Value::Null);
    }

    #[test]
    fn test_tryfrom_strict() {
        let value = sample();
        assert_eq!(f64::try_from(&value["motor"]["kp"]).unwrap(), 7.0);
        assert!(bool::try_from(&value["motor"]["calibrate"]).unwrap());

        let err = f64::try_from(&value["ids"][0]).unwrap_err();
        assert_eq!(err, Error::type_mismatch("float", "integer"));

        let err = String::try_from(Value::Null).unwrap_err();
        assert!(err.to_string().contains("expected string, found null"));
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42u32), Value::Int(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(
            sample().to_string(),
            "motor:\n    kp: 7.0\n    calibrate: true\nids:\n    - 1\n    - 2"
        );
    }

    #[test]
    fn test_type_names() {
        let value = sample();
        assert_eq!(value.type_name(), "mapping");
        assert_eq!(value["ids"].type_name(), "sequence");
        assert!(value["ids"].is_container());
        assert!(value["motor"]["kp"].is_number());
    }
}
