//! Hexadecimal transport wrapper.
//!
//! For transports that cannot carry raw bytes.  Because the hex alphabet is
//! itself in byte order, plain string comparison of two hex keys agrees with
//! [`compare`](crate::compare) on the underlying buffers.

use crate::{decode, encode, KeyErr, ToKey, Value};
use alloc::string::String;

/// Encodes a value and renders the key as lowercase hex.
pub fn encode_hex<T>(value: &T) -> Result<String, KeyErr>
where
  T: ToKey + ?Sized,
{
  let key = encode(value)?;
  Ok(hex::encode(key.as_bytes()))
}

/// Decodes a hex-rendered key back into a [`Value`].
pub fn decode_hex(source: &str) -> Result<Value, KeyErr> {
  let bytes =
    hex::decode(source).map_err(|_| err!(debug, KeyErr::InvalidHex))?;
  decode(&bytes)
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::vec;

  #[test]
  fn round_trip() {
    let value = Value::List(vec![1.0.into(), "a".into()]);
    let hex_key = encode_hex(&value).unwrap();
    assert_eq!(decode_hex(&hex_key).unwrap(), value);
  }

  #[test]
  fn hex_strings_sort_like_keys() {
    let a = encode_hex(&-1.0).unwrap();
    let b = encode_hex(&1.0).unwrap();
    assert!(a < b);
  }

  #[test]
  fn bad_hex_rejected() {
    assert_eq!(decode_hex("zz"), Err(KeyErr::InvalidHex));
  }
}
