//! Serde bridge for [`Value`], so values can cross text-based transports.
//!
//! The serde data model is narrower than the codec's, so the mapping is
//! lossy in documented ways: `Undefined` serializes like `Null`, a `Date`
//! becomes its epoch-ms float, a `Set` becomes a plain sequence, and a
//! `Function` becomes its parameter/body text sequence.  Deserialization
//! therefore yields only `Null`, booleans, numbers, text, bytes, lists, and
//! maps.

use crate::value::Value;
use alloc::{
  fmt,
  string::{String, ToString},
  vec::Vec,
};
use serde::{
  de::{MapAccess, SeqAccess, Visitor},
  ser::{SerializeMap, SerializeSeq},
  Deserialize, Deserializer, Serialize, Serializer,
};

impl Serialize for Value {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Value::Null | Value::Undefined => serializer.serialize_unit(),
      Value::Boolean(b) => serializer.serialize_bool(*b),
      Value::Number(n) => serializer.serialize_f64(*n),
      Value::Date(ms) => serializer.serialize_f64(*ms),
      Value::Bytes(b) => serializer.serialize_bytes(b),
      Value::Text(s) => serializer.serialize_str(s),
      Value::List(items) | Value::Set(items) => {
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
          seq.serialize_element(item)?;
        }
        seq.end()
      },
      Value::Map(entries) => {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
          map.serialize_entry(key, value)?;
        }
        map.end()
      },
      Value::Function(function) => {
        let mut seq =
          serializer.serialize_seq(Some(function.params().len() + 1))?;
        for param in function.params() {
          seq.serialize_element(param)?;
        }
        seq.serialize_element(function.body())?;
        seq.end()
      },
    }
  }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
  type Value = Value;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("any encodable value")
  }

  fn visit_unit<E>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_none<E>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
  where
    D: Deserializer<'de>,
  {
    Value::deserialize(deserializer)
  }

  fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
    Ok(Value::Boolean(value))
  }

  fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
    Ok(Value::Number(value as f64))
  }

  fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
    Ok(Value::Number(value as f64))
  }

  fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
    Ok(Value::Number(value))
  }

  fn visit_str<E>(self, value: &str) -> Result<Value, E> {
    Ok(Value::Text(value.to_string()))
  }

  fn visit_string<E>(self, value: String) -> Result<Value, E> {
    Ok(Value::Text(value))
  }

  fn visit_bytes<E>(self, value: &[u8]) -> Result<Value, E> {
    Ok(Value::Bytes(Vec::from(value)))
  }

  fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Value, E> {
    Ok(Value::Bytes(value))
  }

  fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
  where
    A: SeqAccess<'de>,
  {
    let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
    while let Some(item) = access.next_element()? {
      items.push(item);
    }
    Ok(Value::List(items))
  }

  fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
    while let Some(entry) = access.next_entry()? {
      entries.push(entry);
    }
    Ok(Value::Map(entries))
  }
}

impl<'de> Deserialize<'de> for Value {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(ValueVisitor)
  }
}
