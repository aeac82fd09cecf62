//! The closed union of values the codec operates over.

use alloc::{string::String, vec::Vec};
use core::fmt::{Debug, Formatter};

/// A value that can be encoded as an order-preserving sort key.
///
/// The union is closed by design: the encoder and decoder are exhaustive
/// matches over it, so there is no unsupported-type case at runtime.  A
/// `Value` is immutable once passed to [`encode`](crate::encode); decoding
/// synthesizes fresh values.
///
/// Two caveats on round-trip equality, both deliberate:
///
/// - [`Value::Set`] members are canonicalized at encode time, so a set
///   decodes with its members in encoded-byte order.
/// - Cyclic graphs cannot be expressed; nesting is always a tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Null,
  Undefined,
  Boolean(bool),
  /// A finite or infinite 64-bit float.  NaN is rejected at encode time.
  Number(f64),
  /// Milliseconds since the Unix epoch.  A NaN or infinite timestamp is an
  /// invalid date and is rejected at encode time.
  Date(f64),
  Bytes(Vec<u8>),
  Text(String),
  /// An ordered sequence of values.
  List(Vec<Value>),
  /// Key/value pairs in insertion order.  Entry order is preserved on the
  /// wire and matters for collation; keys need not be text.
  Map(Vec<(Value, Value)>),
  /// An unordered collection; duplicate members (by encoded bytes) collapse
  /// to one at encode time.
  Set(Vec<Value>),
  /// A function captured as text; see [`FunctionValue`].
  Function(FunctionValue),
}

/// The serialized capture of a function: parameter names plus body text.
///
/// The codec only carries the text representation.  Reconstructing a
/// callable is the job of an external sandboxed evaluator and never happens
/// here.
#[derive(Clone, PartialEq, Eq)]
pub struct FunctionValue {
  params: Vec<String>,
  body:   String,
}

impl FunctionValue {
  pub fn new(params: Vec<String>, body: String) -> Self {
    FunctionValue { params, body }
  }

  /// The captured parameter names, in declaration order.
  pub fn params(&self) -> &[String] {
    &self.params
  }

  /// The captured body text.
  pub fn body(&self) -> &str {
    &self.body
  }
}

impl Debug for FunctionValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "fn({:?}) {{ {} }}", &self.params, &self.body)
  }
}

impl Value {
  /// Returns `true` for [`Value::Null`].
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  /// Returns `true` for [`Value::Undefined`].
  pub fn is_undefined(&self) -> bool {
    matches!(self, Value::Undefined)
  }

  pub fn as_boolean(&self) -> Option<bool> {
    match self {
      Value::Boolean(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Value::Number(n) => Some(*n),
      _ => None,
    }
  }

  /// The epoch-ms timestamp of a [`Value::Date`].
  pub fn as_timestamp(&self) -> Option<f64> {
    match self {
      Value::Date(ms) => Some(*ms),
      _ => None,
    }
  }

  pub fn as_bytes(&self) -> Option<&[u8]> {
    match self {
      Value::Bytes(b) => Some(b),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[Value]> {
    match self {
      Value::List(items) => Some(items),
      _ => None,
    }
  }

  pub fn as_map(&self) -> Option<&[(Value, Value)]> {
    match self {
      Value::Map(entries) => Some(entries),
      _ => None,
    }
  }

  pub fn as_set(&self) -> Option<&[Value]> {
    match self {
      Value::Set(members) => Some(members),
      _ => None,
    }
  }

  pub fn as_function(&self) -> Option<&FunctionValue> {
    match self {
      Value::Function(f) => Some(f),
      _ => None,
    }
  }

  /// The date value as a [`chrono::DateTime`], if it is one and its
  /// timestamp fits.
  #[cfg(feature = "chrono")]
  pub fn as_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
    match self {
      Value::Date(ms) if ms.is_finite() => {
        chrono::DateTime::from_timestamp_millis(*ms as i64)
      },
      _ => None,
    }
  }
}

impl From<bool> for Value {
  fn from(src: bool) -> Self {
    Value::Boolean(src)
  }
}

impl From<f64> for Value {
  fn from(src: f64) -> Self {
    Value::Number(src)
  }
}

impl From<f32> for Value {
  fn from(src: f32) -> Self {
    Value::Number(src as f64)
  }
}

impl From<i32> for Value {
  fn from(src: i32) -> Self {
    Value::Number(src as f64)
  }
}

impl From<u32> for Value {
  fn from(src: u32) -> Self {
    Value::Number(src as f64)
  }
}

impl From<&str> for Value {
  fn from(src: &str) -> Self {
    Value::Text(String::from(src))
  }
}

impl From<String> for Value {
  fn from(src: String) -> Self {
    Value::Text(src)
  }
}

impl From<&[u8]> for Value {
  fn from(src: &[u8]) -> Self {
    Value::Bytes(Vec::from(src))
  }
}

impl From<Vec<u8>> for Value {
  fn from(src: Vec<u8>) -> Self {
    Value::Bytes(src)
  }
}

impl From<Vec<Value>> for Value {
  fn from(src: Vec<Value>) -> Self {
    Value::List(src)
  }
}

impl From<Vec<(Value, Value)>> for Value {
  fn from(src: Vec<(Value, Value)>) -> Self {
    Value::Map(src)
  }
}

impl From<FunctionValue> for Value {
  fn from(src: FunctionValue) -> Self {
    Value::Function(src)
  }
}

impl<T> From<Option<T>> for Value
where
  T: Into<Value>,
{
  fn from(src: Option<T>) -> Self {
    match src {
      None => Value::Null,
      Some(value) => value.into(),
    }
  }
}

#[cfg(feature = "chrono")]
impl<TZ: chrono::TimeZone> From<chrono::DateTime<TZ>> for Value {
  fn from(src: chrono::DateTime<TZ>) -> Self {
    Value::Date(src.timestamp_millis() as f64)
  }
}
