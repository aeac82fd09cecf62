use alloc::string::FromUtf8Error;
use core::{
  fmt::{Debug, Display, Formatter},
  str::Utf8Error,
};

/// Errors from encoding and decoding sort keys.
//
// Note:  These are returned from the hot codec paths, so variants are kept
// small and the enum `Copy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyErr {
  /// NaN has no position in the total order and cannot be encoded.
  NotANumber,

  /// A date whose underlying timestamp is NaN or infinite is invalid and
  /// cannot be encoded.
  InvalidDate,

  /// A fixed-size payload did not contain the expected number of bytes.
  MalformedFixedPayload {
    expected: usize,
    observed: usize,
  },

  /// A flat or structured payload ended before its 0x00 terminator.
  MissingTerminator,

  /// A top-level decode finished with bytes left over.
  TrailingBytes {
    consumed: usize,
    length:   usize,
  },

  /// The leading byte matched no entry in the tag table.
  UnknownTag(u8),

  /// The buffer ended before a complete value could be read.
  UnexpectedEnd,

  /// A text payload was not valid UTF-8.
  InvalidUtf8,

  /// An escape lead byte was followed by a byte outside the escapable
  /// range.
  InvalidEscape(u8),

  /// A map encoding held a key with no following value.
  MissingMapValue,

  /// A function encoding must be one or more text items, the parameter
  /// names followed by the body.
  MalformedFunction,

  /// Nesting exceeded the depth limit passed to the decoder.
  DepthLimit(usize),

  /// The input to the hex wrapper was not valid hexadecimal.
  #[cfg(feature = "hex")]
  InvalidHex,
}

impl Display for KeyErr {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(self, f)
  }
}

impl From<Utf8Error> for KeyErr {
  fn from(_src: Utf8Error) -> Self {
    KeyErr::InvalidUtf8
  }
}

impl From<FromUtf8Error> for KeyErr {
  fn from(_src: FromUtf8Error) -> Self {
    KeyErr::InvalidUtf8
  }
}
