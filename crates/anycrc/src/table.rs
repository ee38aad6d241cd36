//! Lookup table and the table-driven engine.
//!
//! A [`Table`] is built once from a [`Params`] and never changes afterwards.
//! It owns no running state: registers are plain `u64` values threaded
//! through [`Table::update`], so any number of independent computations can
//! read the same table concurrently, by reference or through an `Arc`.
//!
//! ```
//! use anycrc::{Table, catalog};
//!
//! let table = Table::new(catalog::CRC32);
//!
//! // One shot.
//! assert_eq!(table.checksum(b"123456789"), 0xCBF4_3926);
//!
//! // Incremental: the register is yours.
//! let mut crc = table.init_value();
//! crc = table.update(crc, b"1234");
//! assert_eq!(table.finalize(crc), table.checksum(b"1234"));
//! crc = table.update(crc, b"56789");
//! assert_eq!(table.finalize(crc), 0xCBF4_3926);
//! ```

use crate::{
  Error, Kernel, Params,
  common::{
    portable,
    tables::{TABLE_LEN, generate_table},
  },
};

/// Immutable 256-entry lookup table derived from a parameter set.
///
/// Entries depend only on width, polynomial and `reflect_in`. The table also
/// carries the parameters it was built from, so it can finalize registers on
/// its own; [`Table::init_value_with`] and [`Table::finalize_with`] apply
/// other compatible parameters to the same entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
  params: Params,
  kernel: Kernel,
  mask: u64,
  reflected_init: u64,
  entries: [u64; TABLE_LEN],
}

impl Table {
  /// Build a table in a const context.
  ///
  /// Costs `256 × 8` reference bit steps. Suitable for `static` tables:
  ///
  /// ```
  /// use anycrc::{Table, catalog};
  ///
  /// static CRC32: Table = Table::build(catalog::CRC32);
  /// assert_eq!(CRC32.checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  #[must_use]
  pub const fn build(params: Params) -> Self {
    Self {
      params,
      kernel: Kernel::for_params(&params),
      mask: params.mask(),
      reflected_init: portable::initial_register(&params),
      entries: generate_table(&params),
    }
  }

  /// Build a table at runtime.
  ///
  /// Identical to [`Table::build`]; additionally reports the construction as
  /// a `debug` event when the `tracing` feature is enabled.
  #[must_use]
  pub fn new(params: Params) -> Self {
    let table = Self::build(params);
    debug_event!(
      width = params.width(),
      polynomial = params.polynomial(),
      reflect_in = params.reflect_in(),
      kernel = table.kernel.as_str(),
      "built crc lookup table"
    );
    table
  }

  /// Parameters the table was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &Params {
    &self.params
  }

  /// Folding rule selected for these parameters.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Kernel {
    self.kernel
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width()
  }

  /// `2^width - 1`.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// The 256 precomputed entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u64; TABLE_LEN] {
    &self.entries
  }

  /// `init`, pre-reflected when `reflect_in` is set.
  #[inline]
  #[must_use]
  pub const fn reflected_init(&self) -> u64 {
    self.reflected_init
  }

  /// Register value for a computation that has seen no input.
  #[inline]
  #[must_use]
  pub const fn init_value(&self) -> u64 {
    self.reflected_init
  }

  /// Fold `data` into `crc` and return the new register.
  ///
  /// Calls over consecutive chunks compose: `update(update(r, a), b)` equals
  /// `update(r, a ‖ b)`. Empty input returns `crc` unchanged.
  #[inline]
  #[must_use]
  pub fn update(&self, crc: u64, data: &[u8]) -> u64 {
    portable::update(&self.entries, self.kernel, &self.params, crc, data)
  }

  /// CRC value for the register `crc`. Does not alter the register, so a
  /// computation can keep going after observing its CRC-so-far.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, crc: u64) -> u64 {
    portable::finalize(&self.params, crc)
  }

  /// One-shot CRC of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update(self.init_value(), data))
  }

  /// Check that `params` can reuse this table's entries.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IncompatibleTable`] when width, polynomial or
  /// `reflect_in` differ from the parameters the table was built from.
  #[inline]
  pub const fn check_compatible(&self, params: &Params) -> Result<(), Error> {
    if self.params.shares_table_with(params) {
      Ok(())
    } else {
      Err(Error::IncompatibleTable)
    }
  }

  /// Initial register for `params`, to be folded with [`Table::update`] and
  /// finished with [`Table::finalize_with`].
  ///
  /// # Errors
  ///
  /// Returns [`Error::IncompatibleTable`] if `params` cannot share this table.
  #[inline]
  pub const fn init_value_with(&self, params: &Params) -> Result<u64, Error> {
    match self.check_compatible(params) {
      Ok(()) => Ok(portable::initial_register(params)),
      Err(err) => Err(err),
    }
  }

  /// [`Table::finalize`] using the output settings of `params`.
  ///
  /// `crc` must come from [`Table::init_value_with`] for the same `params`,
  /// followed by any number of [`Table::update`] calls.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IncompatibleTable`] if `params` cannot share this table.
  #[inline]
  pub const fn finalize_with(&self, params: &Params, crc: u64) -> Result<u64, Error> {
    match self.check_compatible(params) {
      Ok(()) => Ok(portable::finalize(params, crc)),
      Err(err) => Err(err),
    }
  }
}
