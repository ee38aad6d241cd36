//! Fixed-size byte rendering of a CRC value.

use core::{fmt, ops::Deref};

use crate::common::bits::mask;

/// Largest digest, for a 64-bit CRC.
const MAX_LEN: usize = 8;

/// A CRC rendered as `ceil(width / 8)` bytes, most significant byte first.
///
/// Stored inline; dereferences to `&[u8]`.
///
/// ```
/// use anycrc::Digest;
///
/// let d = Digest::new(0x29B1, 16);
/// assert_eq!(d.as_bytes(), &[0x29, 0xB1]);
///
/// let d = Digest::new(0x6, 3);
/// assert_eq!(&*d, &[0x06]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
  buf: [u8; MAX_LEN],
  len: u8,
}

impl Digest {
  /// Render the low `width` bits of `value`. `width` is clamped to 1..=64.
  #[must_use]
  // SAFETY: `len <= MAX_LEN`, so both indices stay below `MAX_LEN`.
  #[allow(clippy::indexing_slicing)]
  pub const fn new(value: u64, width: u8) -> Self {
    let width = if width == 0 {
      1
    } else if width as usize > MAX_LEN * 8 {
      (MAX_LEN * 8) as u8
    } else {
      width
    };
    let len = (width as usize).div_ceil(8);
    let be = (value & mask(width)).to_be_bytes();

    let mut buf = [0u8; MAX_LEN];
    let mut i = 0;
    while i < len {
      buf[i] = be[MAX_LEN - len + i];
      i += 1;
    }
    Self { buf, len: len as u8 }
  }

  /// Digest bytes, most significant first.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    let (bytes, _) = self.buf.split_at(usize::from(self.len));
    bytes
  }

  /// Number of bytes.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)] // never empty
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Read the bytes back as a big-endian integer.
  #[must_use]
  pub fn to_u64(&self) -> u64 {
    self.as_bytes().iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
  }
}

impl Deref for Digest {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for Digest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::Debug for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Digest({self:x})")
  }
}

impl fmt::LowerHex for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::UpperHex for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02X}")?;
    }
    Ok(())
  }
}
