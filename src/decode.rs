//! Decoding keys back into values.

use crate::{
  escape::{find_terminator, unescape},
  float::decode_float,
  tag::{Tag, TagKind, TERMINATOR},
  value::{FunctionValue, Value},
  KeyErr,
};
use alloc::{string::String, vec::Vec};

/// Default bound on nesting depth for [`decode`].
///
/// Nested structure depth equals recursion depth, so an unbounded decoder
/// could be driven to stack exhaustion by adversarial input.  Callers with
/// deeper (trusted) data can raise the bound via [`decode_bounded`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decodes a complete, self-contained key back into a [`Value`].
///
/// Fails if the buffer holds anything other than exactly one encoded value:
/// trailing bytes, truncation, and unknown tags are all errors, never
/// silently wrong values.
pub fn decode(source: &[u8]) -> Result<Value, KeyErr> {
  decode_bounded(source, DEFAULT_MAX_DEPTH)
}

/// [`decode`], with an explicit bound on structure nesting depth.
pub fn decode_bounded(
  source: &[u8],
  max_depth: usize,
) -> Result<Value, KeyErr> {
  let first = *source.first().ok_or(KeyErr::UnexpectedEnd)?;
  let tag = Tag::from_byte(first)?;
  match tag.kind() {
    TagKind::Nullary => {
      if source.len() != 1 {
        return Err(err!(
          debug,
          KeyErr::TrailingBytes {
            consumed: 1,
            length:   source.len(),
          }
        ));
      }
      nullary_value(tag)
    },
    TagKind::Fixed(size) => {
      if source.len() != 1 + size {
        return Err(err!(
          debug,
          KeyErr::MalformedFixedPayload {
            expected: size,
            observed: source.len() - 1,
          }
        ));
      }
      fixed_value(tag, &source[1..])
    },
    // A top-level flat payload is the whole remaining buffer, unescaped.
    TagKind::Flat => flat_value(tag, Vec::from(&source[1..])),
    TagKind::Structured => {
      let cursor = &mut 0;
      let value = read_value(source, cursor, 0, max_depth)?;
      if *cursor != source.len() {
        return Err(err!(
          debug,
          KeyErr::TrailingBytes {
            consumed: *cursor,
            length:   source.len(),
          }
        ));
      }
      Ok(value)
    },
  }
}

/// Reads one value from `source` at `*cursor`, advancing the cursor by
/// exactly the bytes consumed.
///
/// This is the recursive core of the decoder: it is applied to every nested
/// item of a structured encoding, so flat payloads here are in their
/// escaped, terminator-delimited form.
fn read_value(
  source: &[u8],
  cursor: &mut usize,
  depth: usize,
  max_depth: usize,
) -> Result<Value, KeyErr> {
  let first = *source.get(*cursor).ok_or(KeyErr::UnexpectedEnd)?;
  let tag = Tag::from_byte(first)?;
  match tag.kind() {
    TagKind::Nullary => {
      *cursor += 1;
      nullary_value(tag)
    },
    TagKind::Fixed(size) => {
      let start = *cursor + 1;
      let end = start + size;
      let payload = source.get(start..end).ok_or_else(|| {
        err!(
          debug,
          KeyErr::MalformedFixedPayload {
            expected: size,
            observed: source.len().saturating_sub(start),
          }
        )
      })?;
      *cursor = end;
      fixed_value(tag, payload)
    },
    TagKind::Flat => {
      let terminator = find_terminator(source, *cursor + 1)?;
      let payload = unescape(&source[*cursor + 1..terminator])?;
      *cursor = terminator + 1;
      flat_value(tag, payload)
    },
    TagKind::Structured => {
      if depth >= max_depth {
        return Err(err!(debug, KeyErr::DepthLimit(max_depth)));
      }
      *cursor += 1;
      let mut items = Vec::new();
      loop {
        let next =
          *source.get(*cursor).ok_or(KeyErr::MissingTerminator)?;
        if next == TERMINATOR {
          *cursor += 1;
          break;
        }
        items.push(read_value(source, cursor, depth + 1, max_depth)?);
      }
      structure(tag, items)
    },
  }
}

fn nullary_value(tag: Tag) -> Result<Value, KeyErr> {
  // `Tag::kind` routes only nullary tags here.
  match tag {
    Tag::Null => Ok(Value::Null),
    Tag::False => Ok(Value::Boolean(false)),
    Tag::True => Ok(Value::Boolean(true)),
    Tag::NegInfinity => Ok(Value::Number(f64::NEG_INFINITY)),
    Tag::PosInfinity => Ok(Value::Number(f64::INFINITY)),
    Tag::Undefined => Ok(Value::Undefined),
    other => Err(err!(error, KeyErr::UnknownTag(other.byte()))),
  }
}

fn fixed_value(tag: Tag, payload: &[u8]) -> Result<Value, KeyErr> {
  let bytes: [u8; 8] =
    payload
      .try_into()
      .map_err(|_| KeyErr::MalformedFixedPayload {
        expected: 8,
        observed: payload.len(),
      })?;
  let negative = matches!(tag, Tag::NegNumber | Tag::DatePreEpoch);
  let value = decode_float(bytes, negative);
  match tag {
    Tag::DatePreEpoch | Tag::DatePostEpoch => Ok(Value::Date(value)),
    _ => Ok(Value::Number(value)),
  }
}

fn flat_value(tag: Tag, payload: Vec<u8>) -> Result<Value, KeyErr> {
  match tag {
    Tag::Text => Ok(Value::Text(String::from_utf8(payload)?)),
    _ => Ok(Value::Bytes(payload)),
  }
}

/// Assembles a structured value from its decoded items.
fn structure(tag: Tag, items: Vec<Value>) -> Result<Value, KeyErr> {
  match tag {
    Tag::List => Ok(Value::List(items)),
    Tag::Set => Ok(Value::Set(items)),
    Tag::Map => {
      let mut entries = Vec::with_capacity(items.len() / 2);
      let mut iter = items.into_iter();
      while let Some(key) = iter.next() {
        let value =
          iter.next().ok_or_else(|| err!(debug, KeyErr::MissingMapValue))?;
        entries.push((key, value));
      }
      Ok(Value::Map(entries))
    },
    Tag::Function => {
      let mut texts = Vec::with_capacity(items.len());
      for item in items {
        match item {
          Value::Text(text) => texts.push(text),
          _ => return Err(err!(debug, KeyErr::MalformedFunction)),
        }
      }
      let body = texts.pop().ok_or(KeyErr::MalformedFunction)?;
      Ok(Value::Function(FunctionValue::new(texts, body)))
    },
    other => Err(err!(error, KeyErr::UnknownTag(other.byte()))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{encode, util::init_test_logger};
  use alloc::vec;

  #[test]
  fn rejects_garbage() {
    init_test_logger();
    assert_eq!(decode(&[]), Err(KeyErr::UnexpectedEnd));
    assert_eq!(decode(&[0x03]), Err(KeyErr::UnknownTag(0x03)));
    assert_eq!(
      decode(&[0x10, 0x10]),
      Err(KeyErr::TrailingBytes {
        consumed: 1,
        length:   2,
      })
    );
    assert_eq!(
      decode(&[0x42, 0x00, 0x00]),
      Err(KeyErr::MalformedFixedPayload {
        expected: 8,
        observed: 2,
      })
    );
  }

  #[test]
  fn truncated_list_fails() {
    let key = encode(&Value::List(vec!["a".into(), "b".into()])).unwrap();
    let truncated = &key.as_bytes()[..key.len() - 1];
    assert_eq!(decode(truncated), Err(KeyErr::MissingTerminator));
  }

  #[test]
  fn trailing_bytes_after_list_fail() {
    let mut bytes = encode(&Value::List(vec![Value::Null]))
      .unwrap()
      .into_vec();
    let length = bytes.len() + 1;
    bytes.push(0x10);
    assert_eq!(
      decode(&bytes),
      Err(KeyErr::TrailingBytes {
        consumed: length - 1,
        length,
      })
    );
  }

  #[test]
  fn depth_limit_enforced() {
    let mut value = Value::List(vec![]);
    for _ in 0..4 {
      value = Value::List(vec![value]);
    }
    let key = encode(&value).unwrap();
    assert_eq!(decode_bounded(&key, 3), Err(KeyErr::DepthLimit(3)));
    assert_eq!(decode_bounded(&key, 5).unwrap(), value);
  }

  #[test]
  fn odd_map_items_fail() {
    // Map with a key and no value: 0xb0, Null, terminator.
    assert_eq!(decode(&[0xb0, 0x10, 0x00]), Err(KeyErr::MissingMapValue));
  }

  #[test]
  fn malformed_function_items_fail() {
    // A function body must be text, not a number.
    let key = encode(&Value::List(vec![1.0.into()])).unwrap();
    let mut bytes = key.into_vec();
    bytes[0] = 0xe0;
    assert_eq!(decode(&bytes), Err(KeyErr::MalformedFunction));

    // And there must be at least a body.
    assert_eq!(decode(&[0xe0, 0x00]), Err(KeyErr::MalformedFunction));
  }

  #[test]
  fn invalid_utf8_text_fails() {
    assert_eq!(decode(&[0x70, 0xc3, 0x28]), Err(KeyErr::InvalidUtf8));
  }

  #[test]
  fn empty_flat_payloads() {
    assert_eq!(decode(&[0x60]).unwrap(), Value::Bytes(vec![]));
    assert_eq!(decode(&[0x70]).unwrap(), Value::Text(String::new()));
  }
}
