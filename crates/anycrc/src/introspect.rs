//! Kernel introspection.
//!
//! Which folding rule a table uses is fixed by its parameters. This module
//! names that choice so callers, benchmarks and logs can report it.
//!
//! ```
//! use anycrc::{Kernel, Table, catalog};
//!
//! let table = Table::new(catalog::CRC32);
//! assert_eq!(table.kernel(), Kernel::Reflected);
//! assert_eq!(table.kernel().as_str(), "table/reflected");
//! ```

use core::fmt;

use crate::Params;

/// Folding rule used by the table-driven engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
  /// `reflect_in = true`: LSB-first register, shifted right.
  Reflected,
  /// `reflect_in = false`, width of 8 bits or more: MSB-first register.
  Normal,
  /// `reflect_in = false`, width below 8 bits: MSB-first register lifted to
  /// the top of a byte before indexing.
  NarrowNormal,
}

impl Kernel {
  /// Select the folding rule for `params`.
  #[inline]
  #[must_use]
  pub const fn for_params(params: &Params) -> Self {
    if params.reflect_in() {
      Self::Reflected
    } else if params.width() >= 8 {
      Self::Normal
    } else {
      Self::NarrowNormal
    }
  }

  /// Stable, human-readable kernel name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Reflected => "table/reflected",
      Self::Normal => "table/normal",
      Self::NarrowNormal => "table/normal-narrow",
    }
  }
}

impl fmt::Display for Kernel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
