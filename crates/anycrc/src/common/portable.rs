//! Byte-at-a-time table-driven folding.
//!
//! The register is kept in the orientation selected by `reflect_in` for the
//! whole computation, so each input byte costs one table lookup, one shift
//! and two XORs. Three folding rules exist:
//!
//! | Kernel | Register orientation | Step |
//! |--------|----------------------|------|
//! | reflected | LSB-first | `T[(r ^ b) as u8] ^ (r >> 8)` |
//! | normal, width ≥ 8 | MSB-first | `T[((r >> (w - 8)) ^ b) as u8] ^ (r << 8)` |
//! | normal, width < 8 | MSB-first | `T[((r << (8 - w)) ^ b) as u8] ^ (r << 8)` |
//!
//! A register narrower than a byte has to be lifted to the top of the byte
//! before it can be XORed with the input and used as an index.
//!
//! Every function here returns a register masked to `width` bits.

// SAFETY: All table indexing uses a `u8` index into a 256-entry array.
#![allow(clippy::indexing_slicing)]

use super::{bits::reflect, tables::TABLE_LEN};
use crate::{Kernel, Params};

/// Fold `data` into `crc` for a reflected (LSB-first) register.
///
/// Bits above `width` would shift down into the live register, so the
/// register is masked on the way in as well as on the way out.
#[inline]
pub(crate) fn fold_reflected(table: &[u64; TABLE_LEN], crc: u64, data: &[u8], mask: u64) -> u64 {
  let mut crc = crc & mask;
  for &byte in data {
    crc = table[((crc as u8) ^ byte) as usize] ^ (crc >> 8);
  }
  crc & mask
}

/// Fold `data` into `crc` for a normal (MSB-first) register of `width >= 8`.
#[inline]
pub(crate) fn fold_normal(table: &[u64; TABLE_LEN], mut crc: u64, data: &[u8], width: u8, mask: u64) -> u64 {
  let shift = u32::from(width) - 8;
  for &byte in data {
    crc = table[(((crc >> shift) as u8) ^ byte) as usize] ^ (crc << 8);
  }
  crc & mask
}

/// Fold `data` into `crc` for a normal (MSB-first) register of `width < 8`.
#[inline]
pub(crate) fn fold_narrow(table: &[u64; TABLE_LEN], mut crc: u64, data: &[u8], width: u8, mask: u64) -> u64 {
  let lift = 8 - u32::from(width);
  for &byte in data {
    crc = table[(((crc << lift) as u8) ^ byte) as usize] ^ (crc << 8);
  }
  crc & mask
}

/// Fold `data` into `crc` using the rule `kernel` selects.
#[inline]
pub(crate) fn update(table: &[u64; TABLE_LEN], kernel: Kernel, params: &Params, crc: u64, data: &[u8]) -> u64 {
  match kernel {
    Kernel::Reflected => fold_reflected(table, crc, data, params.mask()),
    Kernel::Normal => fold_normal(table, crc, data, params.width(), params.mask()),
    Kernel::NarrowNormal => fold_narrow(table, crc, data, params.width(), params.mask()),
  }
}

/// Register value before any input: `init`, reflected when the register is
/// kept LSB-first.
#[inline]
#[must_use]
pub(crate) const fn initial_register(params: &Params) -> u64 {
  if params.reflect_in() {
    reflect(params.init(), params.width())
  } else {
    params.init()
  }
}

/// Turn a running register into the CRC value.
///
/// The register is already in `reflect_in` orientation, so a reflection is
/// needed only when the output orientation differs. Does not modify the
/// register.
#[inline]
#[must_use]
pub(crate) const fn finalize(params: &Params, crc: u64) -> u64 {
  let crc = if params.reflect_out() != params.reflect_in() {
    reflect(crc, params.width())
  } else {
    crc
  };
  (crc ^ params.final_xor()) & params.mask()
}
