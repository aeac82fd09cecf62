//! Escaping for flat payloads nested inside structured encodings.
//!
//! Nested items are delimited only by a single [`TERMINATOR`] byte, so a
//! variable-length byte or text payload must never contain an unescaped
//! 0x00.  To keep the escaping itself order-preserving, the boundary bytes
//! 0x01 and 0xfe/0xff are escaped as well:
//!
//! - 0x00, 0x01 become the pair (0x01, byte + 1)
//! - 0xfe, 0xff become the pair (0xfe, byte - 1)
//!
//! Both substitutions are monotonic on the byte ranges they touch and never
//! emit a literal 0x00 before the final terminator, so escaped payloads of
//! the same type still compare in the original order.
//!
//! A flat payload at the top level of a key is written raw; no terminator
//! ambiguity exists there.

use crate::{
  tag::{ESCAPE_HIGH, ESCAPE_LOW, TERMINATOR},
  KeyErr,
};
use alloc::vec::Vec;

/// Appends the escaped form of `payload` to `target`, closed by a
/// [`TERMINATOR`].
pub(crate) fn escape_into(payload: &[u8], target: &mut Vec<u8>) {
  for &b in payload {
    match b {
      TERMINATOR | ESCAPE_LOW => {
        target.push(ESCAPE_LOW);
        target.push(b + 1);
      },
      ESCAPE_HIGH | 0xff => {
        target.push(ESCAPE_HIGH);
        target.push(b - 1);
      },
      _ => target.push(b),
    }
  }
  target.push(TERMINATOR);
}

/// Index of the unescaped [`TERMINATOR`] at or after `from`.
///
/// The scan skips over escape pairs, so an escaped literal is never mistaken
/// for the terminator.
pub(crate) fn find_terminator(
  source: &[u8],
  from: usize,
) -> Result<usize, KeyErr> {
  let mut index = from;
  while index < source.len() {
    match source[index] {
      TERMINATOR => return Ok(index),
      ESCAPE_LOW | ESCAPE_HIGH => index += 2,
      _ => index += 1,
    }
  }
  Err(err!(debug, KeyErr::MissingTerminator))
}

/// Inverse of [`escape_into`], applied to the span before the terminator.
pub(crate) fn unescape(span: &[u8]) -> Result<Vec<u8>, KeyErr> {
  let mut bytes = Vec::with_capacity(span.len());
  let mut index = 0;
  while index < span.len() {
    match span[index] {
      ESCAPE_LOW => {
        let next =
          *span.get(index + 1).ok_or(KeyErr::MissingTerminator)?;
        // Only 0x00 and 0x01 are low-escaped, so the pair byte must be
        // 0x01 or 0x02.
        if !(0x01..=0x02).contains(&next) {
          return Err(err!(debug, KeyErr::InvalidEscape(next)));
        }
        bytes.push(next - 1);
        index += 2;
      },
      ESCAPE_HIGH => {
        let next =
          *span.get(index + 1).ok_or(KeyErr::MissingTerminator)?;
        if !(0xfd..=0xfe).contains(&next) {
          return Err(err!(debug, KeyErr::InvalidEscape(next)));
        }
        bytes.push(next + 1);
        index += 2;
      },
      b => {
        bytes.push(b);
        index += 1;
      },
    }
  }
  Ok(bytes)
}
