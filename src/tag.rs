//! The canonical tag table: one byte per type, assigned in sort order.

use crate::KeyErr;

/// Closes every escaped flat payload and every structured sequence.
///
/// 0x00 is reserved for this purpose and never appears unescaped inside a
/// nested payload.
pub const TERMINATOR: u8 = 0x00;

/// Escape lead byte for 0x00 and 0x01 inside nested flat payloads.
pub(crate) const ESCAPE_LOW: u8 = 0x01;

/// Escape lead byte for 0xfe and 0xff inside nested flat payloads.
pub(crate) const ESCAPE_HIGH: u8 = 0xfe;

/// Reserved as a high-key sentinel for range scans; never produced by the
/// encoder.
pub const HIGH_SENTINEL: u8 = 0xff;

/// One-byte type tags.
///
/// A tag identifies both the decoder branch that applies and the type's rank
/// in the total order: tags are assigned in strictly increasing byte order
/// matching the required type precedence.  Gaps are left between groups so
/// future types can be inserted without renumbering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u8)]
pub enum Tag {
  Null = 0x10,
  False = 0x20,
  True = 0x21,
  NegInfinity = 0x40,
  /// Finite numbers below zero.  The payload is bit-inverted so more
  /// negative values sort first.
  NegNumber = 0x41,
  PosNumber = 0x42,
  PosInfinity = 0x43,
  /// Packed identically to [`Tag::NegNumber`], on the epoch-ms timestamp.
  DatePreEpoch = 0x51,
  DatePostEpoch = 0x52,
  Bytes = 0x60,
  Text = 0x70,
  List = 0xa0,
  /// Entry order is preserved and matters for collation.
  Map = 0xb0,
  /// Members are canonicalized at encode time; see the encoder.
  Set = 0xc0,
  /// Packed as a list of parameter names plus the body text.  Revival
  /// happens outside the codec, in an isolated evaluator.
  Function = 0xe0,
  Undefined = 0xf0,
}

/// The payload shape selected by a tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TagKind {
  /// The tag byte alone is the complete encoding.
  Nullary,
  /// Exactly this many payload bytes follow the tag.
  Fixed(usize),
  /// A variable-length byte run with no nested items.
  Flat,
  /// A sequence of nested encoded items, closed by [`TERMINATOR`].
  Structured,
}

impl Tag {
  /// Looks a byte up in the tag table.
  pub fn from_byte(byte: u8) -> Result<Tag, KeyErr> {
    match byte {
      0x10 => Ok(Tag::Null),
      0x20 => Ok(Tag::False),
      0x21 => Ok(Tag::True),
      0x40 => Ok(Tag::NegInfinity),
      0x41 => Ok(Tag::NegNumber),
      0x42 => Ok(Tag::PosNumber),
      0x43 => Ok(Tag::PosInfinity),
      0x51 => Ok(Tag::DatePreEpoch),
      0x52 => Ok(Tag::DatePostEpoch),
      0x60 => Ok(Tag::Bytes),
      0x70 => Ok(Tag::Text),
      0xa0 => Ok(Tag::List),
      0xb0 => Ok(Tag::Map),
      0xc0 => Ok(Tag::Set),
      0xe0 => Ok(Tag::Function),
      0xf0 => Ok(Tag::Undefined),
      other => Err(err!(debug, KeyErr::UnknownTag(other))),
    }
  }

  /// The tag's byte value.
  #[inline(always)]
  pub fn byte(self) -> u8 {
    self as u8
  }

  /// The payload shape for this tag.
  pub(crate) fn kind(self) -> TagKind {
    match self {
      Tag::Null
      | Tag::False
      | Tag::True
      | Tag::NegInfinity
      | Tag::PosInfinity
      | Tag::Undefined => TagKind::Nullary,
      Tag::NegNumber
      | Tag::PosNumber
      | Tag::DatePreEpoch
      | Tag::DatePostEpoch => TagKind::Fixed(8),
      Tag::Bytes | Tag::Text => TagKind::Flat,
      Tag::List | Tag::Map | Tag::Set | Tag::Function => TagKind::Structured,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_round_trip() {
    for byte in 0..=u8::MAX {
      if let Ok(tag) = Tag::from_byte(byte) {
        assert_eq!(tag.byte(), byte);
      }
    }
    assert_eq!(Tag::from_byte(0x00), Err(KeyErr::UnknownTag(0x00)));
    assert_eq!(Tag::from_byte(0xff), Err(KeyErr::UnknownTag(0xff)));
  }

  #[test]
  fn precedence_is_byte_order() {
    let precedence = [
      Tag::Null,
      Tag::False,
      Tag::True,
      Tag::NegInfinity,
      Tag::NegNumber,
      Tag::PosNumber,
      Tag::PosInfinity,
      Tag::DatePreEpoch,
      Tag::DatePostEpoch,
      Tag::Bytes,
      Tag::Text,
      Tag::List,
      Tag::Map,
      Tag::Set,
      Tag::Function,
      Tag::Undefined,
    ];
    for pair in precedence.windows(2) {
      assert!(pair[0].byte() < pair[1].byte());
    }
  }
}
