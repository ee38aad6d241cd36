//! Non-cryptographic checksum traits.
//!
//! CRC variants in this workspace are described by runtime parameters, so a
//! hasher is always created from a value (a table, a parameter set). The
//! trait has no constructor and only covers what happens afterwards.
//!
//! - **Streaming**: Incremental updates for large data
//! - **Non-consuming finalize**: Observe the running checksum at any point

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use anycrc::{Crc, Table, catalog};
/// use traits::Checksum;
///
/// let table = Table::new(catalog::CRC32);
/// let mut hasher = Crc::new(&table);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to the state it was created in
/// - `update()` over consecutive chunks must equal one `update()` over their
///   concatenation
pub trait Checksum: Clone {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Size in bytes of the big-endian digest rendering of [`Self::Output`].
  #[must_use]
  fn output_size(&self) -> usize;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// This does not consume or alter the hasher; further updates continue
  /// from the same state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Reset, feed `data`, and finalize.
  #[inline]
  #[must_use]
  fn checksum_of(&mut self, data: &[u8]) -> Self::Output {
    self.reset();
    self.update(data);
    self.finalize()
  }

  /// Wrap a reader so that every byte read is fed to this hasher.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// let file = File::open("data.bin")?;
  /// let mut reader = hasher.reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(self, inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, self)
  }

  /// Wrap a writer so that every byte written is fed to this hasher.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, self)
  }
}
