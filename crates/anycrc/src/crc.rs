//! Streaming hasher over a shared lookup table.
//!
//! [`Crc`] pairs a table with a running register. The table can be borrowed,
//! owned or reference-counted: anything that implements `Borrow<Table>`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use anycrc::{Crc, Table, catalog};
//!
//! // Borrowed.
//! let table = Table::new(catalog::CCITT);
//! let mut crc = Crc::new(&table);
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0x29B1);
//!
//! // Shared between threads.
//! let shared = Arc::new(Table::new(catalog::CRC32));
//! let handle = {
//!   let mut crc = Crc::new(Arc::clone(&shared));
//!   std::thread::spawn(move || crc.checksum(b"123456789"))
//! };
//! assert_eq!(handle.join().unwrap(), 0xCBF4_3926);
//! ```

use core::{borrow::Borrow, hash::Hasher};

use crate::{Digest, Error, Params, Table, common::portable};

/// Incremental CRC computation backed by a [`Table`].
///
/// The register is private to each `Crc`; the table is only ever read.
/// [`Crc::finalize`] does not disturb the register, so the CRC so far can
/// be observed and the computation continued.
#[derive(Clone, Debug)]
pub struct Crc<T> {
  table: T,
  params: Params,
  crc: u64,
}

impl<T: Borrow<Table>> Crc<T> {
  /// Start a computation with the table's own parameters.
  #[must_use]
  pub fn new(table: T) -> Self {
    let params = *table.borrow().params();
    let crc = table.borrow().init_value();
    Self { table, params, crc }
  }

  /// Start a computation with `params`, reusing `table`.
  ///
  /// `params` may differ from the table's in `init`, `final_xor` and
  /// `reflect_out`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IncompatibleTable`] when width, polynomial or
  /// `reflect_in` differ from the table's.
  ///
  /// ```
  /// use anycrc::{Crc, Table, catalog};
  ///
  /// let table = Table::new(catalog::XMODEM);
  /// let mut crc = Crc::with_params(&table, catalog::CCITT)?;
  /// assert_eq!(crc.checksum(b"123456789"), 0x29B1);
  ///
  /// assert!(Crc::with_params(&table, catalog::CRC16).is_err());
  /// # Ok::<(), anycrc::Error>(())
  /// ```
  pub fn with_params(table: T, params: Params) -> Result<Self, Error> {
    let crc = match table.borrow().init_value_with(&params) {
      Ok(crc) => crc,
      Err(err) => {
        debug_event!(
          table = %table.borrow().params(),
          requested = %params,
          "lookup table cannot serve requested parameters"
        );
        return Err(err);
      }
    };
    Ok(Self { table, params, crc })
  }

  /// The parameters this computation finalizes with.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &Params {
    &self.params
  }

  /// The backing table.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table {
    self.table.borrow()
  }

  /// Unwrap the backing table.
  #[inline]
  #[must_use]
  pub fn into_table(self) -> T {
    self.table
  }

  /// Fold `data` into the register.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.crc = self.table.borrow().update(self.crc, data);
  }

  /// CRC of everything written since creation or the last reset.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    portable::finalize(&self.params, self.crc)
  }

  /// Same as [`Crc::finalize`].
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.finalize()
  }

  /// Low 8 bits of the CRC.
  #[inline]
  #[must_use]
  pub fn crc8(&self) -> u8 {
    self.finalize() as u8
  }

  /// Low 16 bits of the CRC.
  #[inline]
  #[must_use]
  pub fn crc16(&self) -> u16 {
    self.finalize() as u16
  }

  /// Low 32 bits of the CRC.
  #[inline]
  #[must_use]
  pub fn crc32(&self) -> u32 {
    self.finalize() as u32
  }

  /// Return the register to its initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.crc = portable::initial_register(&self.params);
  }

  /// Reset, feed `data`, and return its CRC.
  #[inline]
  #[must_use]
  pub fn checksum(&mut self, data: &[u8]) -> u64 {
    self.reset();
    self.update(data);
    self.finalize()
  }

  /// Digest length in bytes: `ceil(width / 8)`.
  #[inline]
  #[must_use]
  pub fn output_size(&self) -> usize {
    self.params.output_len()
  }

  /// Input granularity in bytes.
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    1
  }

  /// The CRC as big-endian bytes.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest {
    Digest::new(self.finalize(), self.params.width())
  }

  /// Append the big-endian digest to `out`.
  #[cfg(feature = "alloc")]
  pub fn sum_into(&self, out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(&self.digest());
  }
}

impl Crc<Table> {
  /// Build an owned table for `params` and start a computation on it.
  ///
  /// ```
  /// use anycrc::{Crc, catalog};
  ///
  /// let mut crc = Crc::from_params(catalog::CRC12_UMTS);
  /// assert_eq!(crc.checksum(b"123456789"), 0xDAF);
  /// ```
  #[must_use]
  pub fn from_params(params: Params) -> Self {
    Self::new(Table::new(params))
  }
}

impl<T: Borrow<Table> + Clone> traits::Checksum for Crc<T> {
  type Output = u64;

  #[inline]
  fn output_size(&self) -> usize {
    Self::output_size(self)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Self::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }
}

impl<T: Borrow<Table>> Hasher for Crc<T> {
  #[inline]
  fn finish(&self) -> u64 {
    self.finalize()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }
}

#[cfg(feature = "std")]
impl<T: Borrow<Table>> std::io::Write for Crc<T> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
