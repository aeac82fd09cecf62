use core::fmt::{Debug, Display, Formatter};

/// Hex dump for short (i.e., single-line) byte strings.
///
/// The output will be a continuous string of hex digits, interleaved by a `:`
/// character every `self.1` bytes.
pub(crate) struct ShortHexDump<'a>(pub &'a [u8], pub usize);

impl<'a> Debug for ShortHexDump<'a> {
  fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
    for (i, byte) in self.0.iter().enumerate() {
      if self.1 != 0 {
        if i != 0 && (i % self.1) == 0 && i != self.0.len() - 1 {
          write!(f, ":")?;
        }
      }
      write!(f, "{:02X}", byte)?;
    }
    Ok(())
  }
}

impl<'a> Display for ShortHexDump<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(self, f)
  }
}
