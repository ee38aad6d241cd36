//! CRC checksums for any width from 1 to 64 bits.
//!
//! A CRC variant is data: a [`Params`] value in the Rocksoft model (width,
//! polynomial, init, input/output reflection, final XOR). One generic engine
//! computes every variant.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`bitwise`] | Bit-at-a-time reference, `const fn`, the source of truth |
//! | [`Table`] | Immutable 256-entry lookup table, safe to share between threads |
//! | [`Crc`] | Streaming hasher over a borrowed, owned or `Arc`-shared table |
//! | [`catalog`] | Named presets with compile-time verified check values |
//!
//! # Example
//!
//! ```rust
//! use anycrc::{Crc, Params, Table, bitwise, catalog};
//!
//! let data = b"123456789";
//!
//! // Reference: slow, always available.
//! assert_eq!(bitwise(&catalog::CRC32, data), 0xCBF4_3926);
//!
//! // Table-driven, one shot.
//! let table = Table::new(catalog::CRC32);
//! assert_eq!(table.checksum(data), 0xCBF4_3926);
//!
//! // Streaming.
//! let mut crc = Crc::new(&table);
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF4_3926);
//!
//! // Any parameter set, including sub-byte widths.
//! let crc3 = Params::new(3, 0x3, 0x7, true, true, 0)?;
//! assert_eq!(Table::new(crc3).checksum(data), 0x6);
//! # Ok::<(), anycrc::Error>(())
//! ```
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | `std::io::Write` for [`Crc`], reader/writer adapters in [`io`] |
//! | `alloc` | via `std` | [`Crc::sum_into`] |
//! | `tracing` | no | `debug` events for table construction and rejected inputs |
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! anycrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod common;

pub mod catalog;
mod crc;
mod digest;
mod error;
mod introspect;
#[cfg(feature = "std")]
pub mod io;
mod params;
mod table;

pub use common::{bits::reflect, reference::bitwise};
pub use crc::Crc;
pub use digest::Digest;
pub use error::Error;
pub use introspect::Kernel;
pub use params::{MAX_WIDTH, Params};
pub use table::Table;
// Re-export traits for convenience
pub use traits::Checksum;
