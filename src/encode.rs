//! Encoding values into order-preserving keys.

use crate::{
  escape::escape_into,
  float::encode_float,
  key::{compare, EncodedKey},
  tag::{Tag, TagKind, TERMINATOR},
  value::{FunctionValue, Value},
  KeyErr,
};
use alloc::{string::String, vec::Vec};
use smallvec::SmallVec;

/// Set members kept inline during canonicalization before spilling to the
/// heap.
const INLINE_MEMBERS: usize = 8;

/// Types that can be encoded as an order-preserving sort key.
///
/// The only contract is [`key_encode`](ToKey::key_encode): append the
/// complete tagged encoding of `self` to `target`.  Most callers will use
/// the free function [`encode`] instead of calling this directly.
///
/// Implementations exist for [`Value`] and for the native types it wraps,
/// so simple keys need no intermediate `Value`:
///
/// ```
/// use sortkey::encode;
///
/// let a = encode(&-1.0).unwrap();
/// let b = encode("hello").unwrap();
/// assert!(a < b);
/// ```
pub trait ToKey {
  /// Appends the value's tagged key encoding to `target`.
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr>;
}

/// Encodes a value into a new [`EncodedKey`].
pub fn encode<T>(value: &T) -> Result<EncodedKey, KeyErr>
where
  T: ToKey + ?Sized,
{
  let mut bytes = Vec::new();
  value.key_encode(&mut bytes)?;
  Ok(EncodedKey::new(bytes))
}

impl ToKey for Value {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    match self {
      Value::Null => {
        target.push(Tag::Null.byte());
        Ok(())
      },
      Value::Undefined => {
        target.push(Tag::Undefined.byte());
        Ok(())
      },
      Value::Boolean(value) => {
        value.key_encode(target)
      },
      Value::Number(value) => write_number(*value, target),
      Value::Date(timestamp) => write_date(*timestamp, target),
      Value::Bytes(bytes) => {
        // Top-level flat payloads are written raw; escaping only applies
        // when nested inside a structured encoding.
        target.push(Tag::Bytes.byte());
        target.extend_from_slice(bytes);
        Ok(())
      },
      Value::Text(text) => {
        target.push(Tag::Text.byte());
        target.extend_from_slice(text.as_bytes());
        Ok(())
      },
      Value::List(items) => {
        target.push(Tag::List.byte());
        write_items(items.iter(), target)
      },
      Value::Map(entries) => {
        target.push(Tag::Map.byte());
        write_map(entries, target)
      },
      Value::Set(members) => {
        target.push(Tag::Set.byte());
        write_set(members, target)
      },
      Value::Function(function) => {
        target.push(Tag::Function.byte());
        write_function(function, target)
      },
    }
  }
}

fn write_number(value: f64, target: &mut Vec<u8>) -> Result<(), KeyErr> {
  if value.is_nan() {
    return Err(err!(debug, KeyErr::NotANumber));
  }
  if value == f64::NEG_INFINITY {
    target.push(Tag::NegInfinity.byte());
    return Ok(());
  }
  if value == f64::INFINITY {
    target.push(Tag::PosInfinity.byte());
    return Ok(());
  }
  // Normalize -0 so it encodes identically to 0.
  let value = if value == 0.0 { 0.0 } else { value };
  let tag = if value < 0.0 {
    Tag::NegNumber
  } else {
    Tag::PosNumber
  };
  target.push(tag.byte());
  target.extend_from_slice(&encode_float(value));
  Ok(())
}

fn write_date(timestamp: f64, target: &mut Vec<u8>) -> Result<(), KeyErr> {
  // A NaN timestamp signals an invalid date, a distinct error from a NaN
  // number.  Infinite timestamps denote no instant and are invalid too.
  if !timestamp.is_finite() {
    return Err(err!(debug, KeyErr::InvalidDate));
  }
  let timestamp = if timestamp == 0.0 { 0.0 } else { timestamp };
  let tag = if timestamp < 0.0 {
    Tag::DatePreEpoch
  } else {
    Tag::DatePostEpoch
  };
  target.push(tag.byte());
  target.extend_from_slice(&encode_float(timestamp));
  Ok(())
}

/// Appends one already-encoded item to a structured sequence.
///
/// Flat items are escaped and terminated (the tag byte itself is never
/// escaped); everything else embeds verbatim, since nested structures carry
/// their own terminators and are delimited by recursive length tracking on
/// decode.
fn append_item(item: &[u8], target: &mut Vec<u8>) {
  // Item buffers are produced by this module and always start with a tag.
  let tag = item[0];
  match Tag::from_byte(tag).map(Tag::kind) {
    Ok(TagKind::Flat) => {
      target.push(tag);
      escape_into(&item[1..], target);
    },
    _ => target.extend_from_slice(item),
  }
}

/// Encodes each value and appends it as a nested item, then closes the
/// sequence with a [`TERMINATOR`].
fn write_items<'a, I>(items: I, target: &mut Vec<u8>) -> Result<(), KeyErr>
where
  I: Iterator<Item = &'a Value>,
{
  let mut scratch = Vec::new();
  for value in items {
    scratch.clear();
    value.key_encode(&mut scratch)?;
    append_item(&scratch, target);
  }
  target.push(TERMINATOR);
  Ok(())
}

/// Maps flatten to `[k1, v1, k2, v2, ...]` in entry order.
fn write_map(
  entries: &[(Value, Value)],
  target: &mut Vec<u8>,
) -> Result<(), KeyErr> {
  let mut scratch = Vec::new();
  for (key, value) in entries {
    scratch.clear();
    key.key_encode(&mut scratch)?;
    append_item(&scratch, target);
    scratch.clear();
    value.key_encode(&mut scratch)?;
    append_item(&scratch, target);
  }
  target.push(TERMINATOR);
  Ok(())
}

/// Canonicalizes and encodes set members.
///
/// Members are individually encoded, sorted by the byte comparator, and
/// duplicates (equal encodings) collapsed, so two sets with the same members
/// in any construction order produce byte-identical keys.
fn write_set(members: &[Value], target: &mut Vec<u8>) -> Result<(), KeyErr> {
  let mut encoded: SmallVec<Vec<u8>, INLINE_MEMBERS> = SmallVec::new();
  for member in members {
    let mut bytes = Vec::new();
    member.key_encode(&mut bytes)?;
    encoded.push(bytes);
  }
  encoded.sort_by(|a, b| compare(a, b));
  let mut previous: Option<&[u8]> = None;
  for bytes in &encoded {
    if previous == Some(bytes.as_slice()) {
      continue;
    }
    append_item(bytes, target);
    previous = Some(bytes.as_slice());
  }
  target.push(TERMINATOR);
  Ok(())
}

/// Functions pack exactly like a list of text items: the parameter names in
/// order, then the body.
fn write_function(
  function: &FunctionValue,
  target: &mut Vec<u8>,
) -> Result<(), KeyErr> {
  let mut scratch = Vec::new();
  for param in function.params() {
    scratch.clear();
    scratch.push(Tag::Text.byte());
    scratch.extend_from_slice(param.as_bytes());
    append_item(&scratch, target);
  }
  scratch.clear();
  scratch.push(Tag::Text.byte());
  scratch.extend_from_slice(function.body().as_bytes());
  append_item(&scratch, target);
  target.push(TERMINATOR);
  Ok(())
}

impl ToKey for () {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    target.push(Tag::Null.byte());
    Ok(())
  }
}

impl ToKey for bool {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    let tag = if *self { Tag::True } else { Tag::False };
    target.push(tag.byte());
    Ok(())
  }
}

impl ToKey for f64 {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    write_number(*self, target)
  }
}

impl ToKey for f32 {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    write_number(*self as f64, target)
  }
}

impl ToKey for i32 {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    write_number(*self as f64, target)
  }
}

impl ToKey for u32 {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    write_number(*self as f64, target)
  }
}

impl ToKey for str {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    target.push(Tag::Text.byte());
    target.extend_from_slice(self.as_bytes());
    Ok(())
  }
}

impl ToKey for String {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    self.as_str().key_encode(target)
  }
}

impl ToKey for [u8] {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    target.push(Tag::Bytes.byte());
    target.extend_from_slice(self);
    Ok(())
  }
}

impl ToKey for Vec<u8> {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    self.as_slice().key_encode(target)
  }
}

impl ToKey for [Value] {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    target.push(Tag::List.byte());
    write_items(self.iter(), target)
  }
}

impl ToKey for Vec<Value> {
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    self.as_slice().key_encode(target)
  }
}

impl<T> ToKey for Option<T>
where
  T: ToKey,
{
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    match self {
      None => {
        target.push(Tag::Null.byte());
        Ok(())
      },
      Some(value) => value.key_encode(target),
    }
  }
}

impl<T> ToKey for &T
where
  T: ToKey + ?Sized,
{
  fn key_encode(&self, target: &mut Vec<u8>) -> Result<(), KeyErr> {
    (*self).key_encode(target)
  }
}
