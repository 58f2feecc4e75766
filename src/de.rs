//! Typed extraction: deserialize a parsed tree into Rust types.
//!
//! Most users should go through [`from_str`](crate::from_str) or
//! [`from_value`](crate::from_value):
//!
//! ```rust
//! use serde::Deserialize;
//! use yaml_lite::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Pid { kp: f64, ki: f64, enabled: bool }
//!
//! let pid: Pid = from_str("kp: 7.0\nki: 0   # integer, widened\nenabled: true\n").unwrap();
//! assert_eq!(pid, Pid { kp: 7.0, ki: 0.0, enabled: true });
//! ```
//!
//! A field whose value has the wrong type fails with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch).
//!
//! Enums are read from a bare string for unit variants, or from a mapping with
//! a single key naming the variant:
//!
//! ```rust
//! use serde::Deserialize;
//! use yaml_lite::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! #[serde(rename_all = "lowercase")]
//! enum Mode { Idle, Drive { speed: f64 } }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Robot { first: Mode, then: Mode }
//!
//! let robot: Robot = from_str("first: idle\nthen:\n  drive:\n    speed: 0.5\n").unwrap();
//! assert_eq!(robot.then, Mode::Drive { speed: 0.5 });
//! ```

use crate::{Error, Mapping, Result, Value};
use serde::{de, forward_to_deserialize_any};

/// A [`serde::Deserializer`] that consumes an owned [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Sequence(seq) => visitor.visit_seq(SeqDeserializer::new(seq)),
            Value::Mapping(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer::new(variant, None)),
            Value::Mapping(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, Some(value)))
                    }
                    None => Err(Error::custom("Expected enum variant")),
                }
            }
            other => Err(Error::type_mismatch(
                "a string or a single-key mapping naming an enum variant",
                other.type_name(),
            )),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> de::IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Mapping) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Value>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(Error::type_mismatch("unit variant", other.type_name())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::type_mismatch("newtype variant", "unit variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Sequence(seq)) => visitor.visit_seq(SeqDeserializer::new(seq)),
            Some(other) => Err(Error::type_mismatch("tuple variant", other.type_name())),
            None => Err(Error::type_mismatch("tuple variant", "unit variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Mapping(map)) => visitor.visit_map(MapDeserializer::new(map)),
            Some(other) => Err(Error::type_mismatch("struct variant", other.type_name())),
            None => Err(Error::type_mismatch("struct variant", "unit variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_str, from_value, parse, Error, Value};
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Limits {
        min: i32,
        max: Option<i32>,
        label: Option<String>,
    }

    #[test]
    fn test_options_and_missing_fields() {
        let limits: Limits = from_str("min: -3\nmax: null\n").unwrap();
        assert_eq!(
            limits,
            Limits {
                min: -3,
                max: None,
                label: None
            }
        );

        let limits: Limits = from_str("min: 0\nmax: 10\nlabel: 'x'\n").unwrap();
        assert_eq!(limits.max, Some(10));
        assert_eq!(limits.label.as_deref(), Some("x"));
    }

    #[test]
    fn test_wrong_type_is_a_type_mismatch() {
        let err = from_str::<Limits>("min: fast\n").unwrap_err();
        match err {
            Error::TypeMismatch { expected, found } => {
                assert_eq!(expected, "i32");
                assert!(found.contains("fast"));
            }
            other => panic!("expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_sequences_and_maps() {
        let tree = parse("ports:\n  - 80\n  - 443\nnames:\n  a: 1\n  b: 2\n").unwrap();

        #[derive(Deserialize)]
        struct Server {
            ports: Vec<u16>,
            names: HashMap<String, u8>,
        }

        let server: Server = from_value(tree).unwrap();
        assert_eq!(server.ports, vec![80, 443]);
        assert_eq!(server.names["b"], 2);
    }

    #[test]
    fn test_value_deserializes_into_itself() {
        let tree = parse("a:\n  - 1\n  - x\nb: 2.5\n").unwrap();
        let copy: Value = from_value(tree.clone()).unwrap();
        assert_eq!(copy, tree);
    }

    #[test]
    fn test_unit_variant_with_payload_is_rejected() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        enum Mode {
            Idle,
        }

        let result = from_value::<Mode>(parse("Idle: 3\n").unwrap());
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }
}
