//! Order-preserving codec for finite 64-bit floats.
//!
//! Big-endian IEEE-754 bit patterns of non-negative magnitudes already
//! compare byte-wise in the same order as their numeric value.  Inverting
//! every byte of a negative magnitude reverses that order, which combined
//! with the tag split between negative and positive numbers yields numeric
//! order across the zero boundary.
//!
//! NaN never reaches this module; the encoder rejects it first.

/// Encodes the magnitude of `value` as 8 order-preserving bytes.
pub(crate) fn encode_float(value: f64) -> [u8; 8] {
  debug_assert!(!value.is_nan());
  let magnitude = if value < 0.0 { -value } else { value };
  let mut bytes = magnitude.to_be_bytes();
  if value < 0.0 {
    for b in bytes.iter_mut() {
      *b = !*b;
    }
  }
  bytes
}

/// Inverse of [`encode_float`].  `negative` is taken from the tag.
pub(crate) fn decode_float(mut bytes: [u8; 8], negative: bool) -> f64 {
  if negative {
    for b in bytes.iter_mut() {
      *b = !*b;
    }
  }
  let value = f64::from_be_bytes(bytes);
  if negative {
    -value
  } else {
    value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip() {
    for value in [0.0, 1.0, 1.5, 123.456, f64::EPSILON, f64::MAX, f64::MIN_POSITIVE] {
      assert_eq!(decode_float(encode_float(value), false), value);
      assert_eq!(decode_float(encode_float(-value), true), -value);
    }
  }

  #[test]
  fn positive_magnitudes_sort_ascending() {
    let ladder = [0.0, f64::EPSILON, 0.001, 0.1, 1.0, 2.0, 10.0, 1000.0, f64::MAX];
    for pair in ladder.windows(2) {
      assert!(encode_float(pair[0]) < encode_float(pair[1]));
    }
  }

  #[test]
  fn negative_magnitudes_sort_inverted() {
    // More negative must produce the smaller byte sequence.
    let ladder = [f64::MIN, -1000.0, -2.0, -1.0, -0.1, -f64::EPSILON];
    for pair in ladder.windows(2) {
      assert!(encode_float(pair[0]) < encode_float(pair[1]));
    }
  }
}
