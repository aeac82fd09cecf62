//! Encoded keys and the byte comparator.

use crate::util::debug::ShortHexDump;
use alloc::vec::Vec;
use core::{
  cmp::Ordering,
  fmt::{Debug, Formatter},
  ops::Deref,
};

/// Lexicographic comparison of two encoded keys.
///
/// This is the property the whole encoding exists to guarantee: the result
/// has the same sign as the semantic ordering of the values the buffers
/// encode.  No decoding occurs; on a shared prefix the shorter buffer sorts
/// first.  Drop-in usable as the ordering function for any byte-sorting
/// facility.
#[inline(always)]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
  a.cmp(b)
}

/// An encoded sort key: an immutable byte buffer ordered by [`compare`].
///
/// Obtained from [`encode`](crate::encode).  A key's bytes never change
/// after creation; the only remaining lifecycle is ownership transfer, e.g.
/// into a storage engine via [`EncodedKey::into_vec`].
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct EncodedKey(Vec<u8>);

impl EncodedKey {
  pub(crate) fn new(bytes: Vec<u8>) -> Self {
    EncodedKey(bytes)
  }

  /// The raw encoded bytes.
  #[inline(always)]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Consumes the key, returning the underlying buffer.
  pub fn into_vec(self) -> Vec<u8> {
    self.0
  }
}

impl AsRef<[u8]> for EncodedKey {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for EncodedKey {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl PartialOrd for EncodedKey {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for EncodedKey {
  fn cmp(&self, other: &Self) -> Ordering {
    compare(&self.0, &other.0)
  }
}

impl Debug for EncodedKey {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "EncodedKey({:?})", ShortHexDump(&self.0, 4))
  }
}
