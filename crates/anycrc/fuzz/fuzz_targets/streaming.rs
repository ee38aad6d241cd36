//! Fuzz target for the streaming API over arbitrary parameter sets.
//!
//! Arbitrary sequences of update calls must match the bitwise reference, and
//! a table must serve any parameters that share its width, polynomial and
//! input reflection.

#![no_main]

use anycrc::{Crc, Params, Table, bitwise};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  init: u64,
  reflect_in: bool,
  reflect_out: bool,
  final_xor: u64,
  /// Alternative output settings for table reuse.
  other_init: u64,
  other_final_xor: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Ok(params) = Params::new(
    input.width,
    input.polynomial,
    input.init,
    input.reflect_in,
    input.reflect_out,
    input.final_xor,
  ) else {
    assert!(input.width == 0 || input.width > 64);
    return;
  };

  let table = Table::new(params);
  let expected = bitwise(&params, &input.data);
  assert_eq!(table.checksum(&input.data), expected, "one-shot mismatch for {params}");
  assert_eq!(stream(Crc::new(&table), &input.data, &input.chunk_sizes), expected, "streaming mismatch for {params}");

  let other = params
    .with_init(input.other_init)
    .with_final_xor(input.other_final_xor)
    .with_reflect_out(!input.reflect_out);
  let Ok(reused) = Crc::with_params(&table, other) else {
    panic!("compatible parameters rejected: {other}");
  };
  assert_eq!(stream(reused, &input.data, &input.chunk_sizes), bitwise(&other, &input.data), "reuse mismatch for {other}");
});

fn stream(mut crc: Crc<&Table>, data: &[u8], chunk_sizes: &[u8]) -> u64 {
  let mut rest = data;
  let mut sizes = chunk_sizes.iter().map(|&s| usize::from(s).max(1)).cycle();

  while !rest.is_empty() {
    let size = sizes.next().unwrap_or(1).min(rest.len());
    let (chunk, tail) = rest.split_at(size);
    crc.update(chunk);
    rest = tail;
  }

  crc.finalize()
}
