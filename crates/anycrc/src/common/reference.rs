//! Bitwise reference implementation for every CRC width.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time, making it:
//!
//! - **Obviously correct**: The algorithm directly mirrors polynomial division over GF(2)
//! - **Width-agnostic**: The same loop handles widths 1 through 64, including sub-byte widths
//! - **Const-evaluable**: Check values are verified at compile time
//!
//! Lookup tables are derived from this function, and the table-driven engine
//! must produce identical results to it for every parameter set and input.
//!
//! # CRC Model
//!
//! The implementation follows the Rocksoft model (CRC RevEng catalog):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (1..=64) |
//! | `poly`    | Generator polynomial, normal form |
//! | `init`    | Initial register value |
//! | `refin`   | Reflect input bytes |
//! | `refout`  | Reflect output before final XOR |
//! | `xorout`  | Final XOR value |
//!
//! # Performance
//!
//! Intentionally slow (~8 operations per bit). Use for correctness checks,
//! test oracles, one-off checksums of tiny inputs, and table generation.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::bits::reflect;
use crate::Params;

/// Compute the CRC of `data` one bit at a time.
///
/// The register starts at `init`. Each input byte is reflected first when
/// `reflect_in` is set, then its bits are shifted through the register from
/// the most significant down: whenever the register's top bit differs from
/// the incoming data bit, the shifted register is XORed with the polynomial.
/// After the last byte the register is reflected if `reflect_out` is set,
/// XORed with `final_xor`, and masked to `width` bits.
///
/// Empty input returns the transformed `init`.
///
/// ```
/// use anycrc::{bitwise, catalog};
///
/// assert_eq!(bitwise(&catalog::CRC32, b"123456789"), 0xCBF4_3926);
/// assert_eq!(bitwise(&catalog::CRC3_ROHC, b"123456789"), 0x6);
/// ```
#[must_use]
pub const fn bitwise(params: &Params, data: &[u8]) -> u64 {
  let mask = params.mask();
  let top = 1u64 << (params.width() - 1);
  let poly = params.polynomial();

  let mut crc = params.init() & mask;
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in() {
      reflect(data[i] as u64, 8)
    } else {
      data[i] as u64
    };

    let mut bit: u32 = 8;
    while bit > 0 {
      bit -= 1;
      let feedback = (crc & top != 0) != ((byte >> bit) & 1 != 0);
      crc = (crc << 1) & mask;
      if feedback {
        crc ^= poly;
      }
    }
    i += 1;
  }

  if params.reflect_out() {
    crc = reflect(crc, params.width());
  }
  (crc ^ params.final_xor()) & mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
pub(crate) const CHECK_INPUT: &[u8] = b"123456789";

// Widths 3 and 4 exercise the sub-byte path in both reflection modes.
const _: () = {
  let crc3 = Params::preset(3, 0x3, 0x7, true, true, 0x0);
  assert!(bitwise(&crc3, CHECK_INPUT) == 0x6);

  let crc4 = Params::preset(4, 0x3, 0xF, false, false, 0xF);
  assert!(bitwise(&crc4, CHECK_INPUT) == 0xB);
};

const _: () = {
  let ccitt = Params::preset(16, 0x1021, 0xFFFF, false, false, 0);
  assert!(bitwise(&ccitt, CHECK_INPUT) == 0x29B1);

  let xmodem = Params::preset(16, 0x1021, 0, false, false, 0);
  assert!(bitwise(&xmodem, CHECK_INPUT) == 0x31C3);
};

const _: () = {
  let crc32 = Params::preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
  assert!(bitwise(&crc32, CHECK_INPUT) == 0xCBF4_3926);

  let crc64 = Params::preset(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);
  assert!(bitwise(&crc64, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn empty_input_returns_transformed_init() {
    // init=0xFFFF, no reflection, no xor
    assert_eq!(bitwise(&catalog::CCITT, &[]), 0xFFFF);
    // init and xorout cancel
    assert_eq!(bitwise(&catalog::CRC32, &[]), 0);
    assert_eq!(bitwise(&catalog::CRC64_ECMA, &[]), 0);
    // refout reflects init before the xor
    let p = Params::new(12, 0x80F, 0x123, false, true, 0).unwrap();
    assert_eq!(bitwise(&p, &[]), 0xC48);
  }

  #[test]
  fn result_fits_width() {
    let data: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
    for width in 1..=64u8 {
      let p = Params::new(width, 0xDEAD_BEEF_CAFE_F00D, u64::MAX, width % 2 == 0, width % 3 == 0, u64::MAX).unwrap();
      let crc = bitwise(&p, &data);
      assert_eq!(crc & !p.mask(), 0, "width {width} leaked high bits");
    }
  }

  #[test]
  fn sub_byte_catalog_values() {
    assert_eq!(bitwise(&catalog::CRC5_USB, CHECK_INPUT), 0x19);
    assert_eq!(bitwise(&catalog::CRC7_MMC, CHECK_INPUT), 0x75);
  }

  #[test]
  fn mixed_reflection() {
    // CRC-12/UMTS: refin=false, refout=true
    assert_eq!(bitwise(&catalog::CRC12_UMTS, CHECK_INPUT), 0xDAF);
  }

  #[test]
  fn order_sensitive() {
    let a = bitwise(&catalog::CRC32, b"ab");
    let b = bitwise(&catalog::CRC32, b"ba");
    assert_ne!(a, b);
  }

  #[test]
  fn single_bit_flips_change_crc() {
    let data = *b"The quick brown fox jumps over the lazy dog";
    let base = bitwise(&catalog::CCITT, &data);
    for i in 0..data.len() {
      for bit in 0..8 {
        let mut flipped = data;
        flipped[i] ^= 1 << bit;
        assert_ne!(bitwise(&catalog::CCITT, &flipped), base, "flip at byte {i} bit {bit}");
      }
    }
  }

  #[test]
  fn handles_large_input() {
    let data: [u8; 4096] = core::array::from_fn(|i| (i as u8).wrapping_mul(17));
    for preset in catalog::ALL {
      let _ = bitwise(&preset.params, &data);
    }
  }
}
