//! Order-preserving binary serialization for structured sort keys.
//!
//! Every supported value encodes to a byte sequence such that byte-wise
//! lexicographic comparison of two encodings agrees exactly with the semantic
//! ordering of the original values.  This makes an encoded key directly
//! usable as a sort key in any byte-ordered storage engine, with no custom
//! comparator.
//!
//! The total order across types is fixed by the one-byte tag table:
//!
//! > null < false < true < -∞ < negative numbers < positive numbers < +∞
//! > < dates < byte strings < text strings < lists < maps < sets
//! > < functions < undefined
//!
//! Within a type, order follows the obvious semantic order: numeric for
//! numbers and dates, bytewise for byte and text strings, item-by-item for
//! the structured types.
//!
//! ```
//! use sortkey::{decode, encode, Value};
//!
//! let a = encode(&Value::from(-1.0)).unwrap();
//! let b = encode(&Value::from(1.0)).unwrap();
//! assert!(a < b);
//! assert_eq!(decode(&a).unwrap(), Value::Number(-1.0));
//!
//! let list = Value::List(vec![Value::from(1.0), Value::from("a")]);
//! assert_eq!(decode(&encode(&list).unwrap()).unwrap(), list);
//! ```
//!
//! The encoding trades compactness for comparison safety: numbers and dates
//! are always 8 payload bytes, and nested strings pay a small escaping
//! overhead so they can sit inside terminator-delimited containers without
//! corrupting order.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Internal Macros
#[macro_use]
mod macros;

mod decode;
mod encode;
mod error;
mod escape;
mod float;
#[cfg(feature = "hex")]
mod hex;
mod key;
#[cfg(feature = "serde")]
mod serde;
mod tag;
mod util;
mod value;

#[cfg(feature = "hex")]
pub use self::hex::{decode_hex, encode_hex};
pub use self::{
  decode::{decode, decode_bounded, DEFAULT_MAX_DEPTH},
  encode::{encode, ToKey},
  error::KeyErr,
  key::{compare, EncodedKey},
  tag::{Tag, HIGH_SENTINEL},
  value::{FunctionValue, Value},
};
