//! Error type for parameter validation and table binding.
//!
//! Every fallible operation in this crate happens before any data is
//! processed: building a [`Params`](crate::Params), looking one up by name, or
//! binding a register to a table. Once those succeed, computing a CRC cannot
//! fail.

use core::fmt;

/// Errors reported while setting up a CRC computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// The requested width is 0 or wider than the 64-bit register.
  InvalidWidth(u8),
  /// No catalog preset matches the requested name.
  UnknownPreset,
  /// The table was built for a different width, polynomial or input
  /// reflection than the parameters it was paired with.
  IncompatibleTable,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidWidth(width) => write!(f, "invalid crc width {width}: must be between 1 and 64"),
      Self::UnknownPreset => f.write_str("unknown crc preset"),
      Self::IncompatibleTable => f.write_str("lookup table does not match width, polynomial or input reflection"),
    }
  }
}

impl core::error::Error for Error {}
