//! Const-fn lookup table generation.
//!
//! A table holds, for each byte value `i`, the register produced by feeding
//! the single byte `i` through [`bitwise`] with `init = 0`, `final_xor = 0`
//! and `reflect_out = reflect_in`. Storing entries in the input orientation
//! means the table-driven engine never reflects inside its loop.
//!
//! Generation is a memoized specialization of the reference engine, not a
//! second algorithm: entry `i` is by definition `bitwise(kernel, [i])`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reference::bitwise;
use crate::Params;

/// Number of entries in a byte-indexed table.
pub(crate) const TABLE_LEN: usize = 256;

/// Parameters whose single-byte CRCs are the table entries.
///
/// Only width, polynomial and `reflect_in` survive; everything applied
/// before or after the fold is neutralized.
#[inline]
#[must_use]
pub(crate) const fn kernel_params(params: &Params) -> Params {
  params
    .with_init(0)
    .with_final_xor(0)
    .with_reflect_out(params.reflect_in())
}

/// Generate the 256-entry lookup table for `params`.
///
/// Cost is `256 × 8` reference bit steps, independent of `init`,
/// `final_xor` and `reflect_out`.
#[must_use]
pub(crate) const fn generate_table(params: &Params) -> [u64; TABLE_LEN] {
  let kernel = kernel_params(params);
  let mut table = [0u64; TABLE_LEN];

  let mut i = 0usize;
  while i < TABLE_LEN {
    table[i] = bitwise(&kernel, &[i as u8]);
    i += 1;
  }

  table
}
