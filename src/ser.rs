//! Serde bridge from Rust types into [`Value`] trees.
//!
//! [`to_value`](crate::to_value) turns anything implementing
//! [`Serialize`] into a tree, and [`to_string`](crate::to_string) renders that
//! tree in the native style:
//!
//! ```rust
//! use serde::Serialize;
//! use yaml_lite::to_string;
//!
//! #[derive(Serialize)]
//! struct Pid { kp: f64, limits: Vec<i32>, note: Option<String> }
//!
//! let pid = Pid { kp: 7.0, limits: vec![-5, 5], note: None };
//! assert_eq!(
//!     to_string(&pid).unwrap(),
//!     "kp: 7.0\nlimits:\n    - -5\n    - 5\nnote: null\n"
//! );
//! ```
//!
//! ## Type mapping
//!
//! - Integers become [`Value::Int`]; a `u64` beyond `i64::MAX` becomes a float
//! - `f32`/`f64` become [`Value::Float`]
//! - `char` and strings become [`Value::String`]; bytes become a sequence of ints
//! - `None`, `()` and unit structs become [`Value::Null`]
//! - Structs and maps become mappings in field order
//! - Unit variants become their name; other variants become a one-key mapping
//!   from the variant name to the payload
//!
//! Map keys must be strings, integers, chars or booleans.

use crate::{Error, Mapping, Result, Value};
use serde::{ser, Serialize};

/// A [`serde::Serializer`] whose output is a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Mapping,
    current_key: Option<String>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: Mapping,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(
            v.iter().map(|&b| Value::Int(i64::from(b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = Mapping::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Mapping(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: Mapping::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn with_capacity(len: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
        }
    }
}

impl SerializeMap {
    fn with_capacity(len: usize) -> Self {
        SerializeMap {
            map: Mapping::with_capacity(len),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = Mapping::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Sequence(self.vec));
        Ok(Value::Mapping(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::unsupported_type(&format!(
                    "map key of type {}",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = Mapping::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Mapping(self.map));
        Ok(Value::Mapping(outer))
    }
}

/// Converts any serializable value into a [`Value`] tree.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for map keys that are not string-like,
/// or whatever error the type's own `Serialize` impl reports.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use yaml_lite::{to_value, Value};
///
/// let mut gains = BTreeMap::new();
/// gains.insert("kp", 7.0);
/// let tree = to_value(&gains).unwrap();
/// assert_eq!(tree["kp"], Value::Float(7.0));
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_value, parse, to_string};
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Command {
        Stop,
        Speed(f64),
        Move { x: i64, y: i64 },
        Pair(i64, i64),
    }

    #[test]
    fn test_scalars() {
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&-4i8).unwrap(), Value::Int(-4));
        assert_eq!(to_value(&2.5f32).unwrap(), Value::Float(2.5));
        assert_eq!(to_value(&'x').unwrap(), Value::String("x".into()));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), Value::Null);
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_enum_shapes_round_trip() {
        for command in [
            Command::Stop,
            Command::Speed(0.5),
            Command::Move { x: 1, y: -2 },
            Command::Pair(3, 4),
        ] {
            let tree = to_value(&command).unwrap();
            let back: Command = from_value(tree).unwrap();
            assert_eq!(back, command);
        }

        assert_eq!(
            to_value(&Command::Stop).unwrap(),
            Value::String("Stop".into())
        );
    }

    #[test]
    fn test_struct_variant_text_round_trip() {
        let mut wrapper = HashMap::new();
        wrapper.insert("cmd".to_string(), Command::Move { x: 1, y: 2 });

        let text = to_string(&wrapper).unwrap();
        assert_eq!(text, "cmd:\n    Move:\n        x: 1\n        y: 2\n");

        let back: HashMap<String, Command> = from_value(parse(&text).unwrap()).unwrap();
        assert_eq!(back, wrapper);
    }

    #[test]
    fn test_map_keys() {
        let mut by_id = HashMap::new();
        by_id.insert(7u32, "seven");
        let tree = to_value(&by_id).unwrap();
        assert_eq!(tree["7"], Value::String("seven".into()));

        let mut by_pair = HashMap::new();
        by_pair.insert((1, 2), "bad");
        assert!(matches!(
            to_value(&by_pair),
            Err(Error::UnsupportedType(_))
        ));
    }
}
