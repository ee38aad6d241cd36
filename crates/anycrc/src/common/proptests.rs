//! Property tests over arbitrary parameter sets.
//!
//! The catalog only covers a handful of variants. These tests draw the whole
//! parameter space (every width from 1 to 64, any polynomial, init and final
//! XOR, both reflections) and check the table-driven engine against the
//! bitwise reference, which is the mathematical definition of the CRC.
//!
//! 1. **Reference equivalence**: `table.checksum(d) == bitwise(p, d)`
//! 2. **Chunking equivalence**: any partition of the input into `update()`
//!    calls gives the one-shot result
//! 3. **Table reuse**: a table serves every parameter set that shares its
//!    width, polynomial and input reflection

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::reference::bitwise;
use crate::{Crc, MAX_WIDTH, Params, Table};

/// Any valid parameter set.
fn any_params() -> impl Strategy<Value = Params> {
  (
    1..=MAX_WIDTH,
    any::<u64>(),
    any::<u64>(),
    any::<bool>(),
    any::<bool>(),
    any::<u64>(),
  )
    .prop_map(|(width, poly, init, refin, refout, xorout)| {
      Params::new(width, poly, init, refin, refout, xorout).unwrap()
    })
}

/// Parameter sets narrower than a byte.
fn narrow_params() -> impl Strategy<Value = Params> {
  (1u8..8, any::<u64>(), any::<u64>(), any::<bool>(), any::<u64>()).prop_map(|(width, poly, init, refout, xorout)| {
    Params::new(width, poly, init, false, refout, xorout).unwrap()
  })
}

/// Feed `data` to `table` in chunks taken cyclically from `pattern`.
fn apply_chunking(table: &Table, data: &[u8], pattern: &[usize]) -> u64 {
  let mut crc = Crc::new(table);

  if pattern.is_empty() {
    crc.update(data);
    return crc.finalize();
  }

  let mut rest = data;
  for &size in pattern.iter().cycle() {
    if rest.is_empty() {
      break;
    }
    let (chunk, tail) = rest.split_at(size.clamp(1, rest.len()));
    crc.update(chunk);
    rest = tail;
  }

  crc.finalize()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  // ─────────────────────────────────────────────────────────────────────────
  // Reference Equivalence
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn table_matches_reference(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let table = Table::new(params);
    prop_assert_eq!(table.checksum(&data), bitwise(&params, &data), "{}", params);
  }

  #[test]
  fn narrow_normal_matches_reference(params in narrow_params(), data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let table = Table::new(params);
    prop_assert_eq!(table.checksum(&data), bitwise(&params, &data), "{}", params);
  }

  #[test]
  fn results_fit_width(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..=64)) {
    let table = Table::new(params);
    prop_assert_eq!(table.checksum(&data) & !params.mask(), 0);
    prop_assert_eq!(bitwise(&params, &data) & !params.mask(), 0);
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Chunking Equivalence
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn arbitrary_chunking(
    params in any_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    pattern in proptest::collection::vec(1usize..=97, 0..16)
  ) {
    let table = Table::new(params);
    prop_assert_eq!(apply_chunking(&table, &data, &pattern), table.checksum(&data));
  }

  #[test]
  fn power_of_two_chunks(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..=1024), shift in 0u32..10) {
    let table = Table::new(params);
    let chunk = 1usize << shift;
    let mut crc = table.init_value();
    for piece in data.chunks(chunk) {
      crc = table.update(crc, piece);
    }
    prop_assert_eq!(table.finalize(crc), bitwise(&params, &data));
  }

  #[test]
  fn split_anywhere(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let table = Table::new(params);
    let crc = table.update(table.update(table.init_value(), a), b);
    prop_assert_eq!(table.finalize(crc), table.checksum(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Table Reuse
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn table_reuse_across_output_settings(
    params in any_params(),
    init in any::<u64>(),
    refout in any::<bool>(),
    xorout in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let table = Table::new(params);
    let other = params.with_init(init).with_reflect_out(refout).with_final_xor(xorout);

    let mut crc = Crc::with_params(&table, other).unwrap();
    crc.update(&data);
    prop_assert_eq!(crc.finalize(), bitwise(&other, &data), "{} via {}", other, params);
  }
}

#[test]
fn every_width_once() {
  let data: Vec<u8> = (0u8..=255).collect();
  for width in 1..=MAX_WIDTH {
    for refin in [false, true] {
      let params = Params::new(width, 0x9E37_79B9_7F4A_7C15, u64::MAX, refin, !refin, 0x5555_5555_5555_5555).unwrap();
      assert_eq!(Table::new(params).checksum(&data), bitwise(&params, &data), "{params}");
    }
  }
}
