//! Basic checksum usage: presets, custom parameters, one-shot and streaming.
//!
//! Run with: `cargo run --example basic -p anycrc`

use std::{io::Write, sync::Arc, thread};

use anycrc::{Crc, Params, Table, bitwise, catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("=== anycrc Basic Examples ===\n");

  presets();
  custom_params()?;
  streaming()?;
  shared_table();
  Ok(())
}

/// Every catalog preset against its published check value.
fn presets() {
  println!("--- Catalog ---\n");

  let data = b"123456789";
  for preset in catalog::ALL {
    let table = Table::new(preset.params);
    let crc = table.checksum(data);
    let digits = usize::from(preset.params.width()).div_ceil(4);
    println!("{:<18} {:<20} 0x{crc:0digits$X}", preset.name, table.kernel().as_str());
    assert_eq!(crc, preset.check);
  }
  println!();
}

/// Any width from 1 to 64 bits.
fn custom_params() -> Result<(), anycrc::Error> {
  println!("--- Custom Parameters ---\n");

  let crc3 = Params::new(3, 0x3, 0x7, true, true, 0)?;
  println!("{crc3}");
  println!("  bitwise: 0x{:X}", bitwise(&crc3, b"123456789"));
  println!("  table:   0x{:X}", Table::new(crc3).checksum(b"123456789"));

  let by_name = Params::by_name("crc-16/xmodem")?;
  println!("{by_name}");

  if let Err(err) = Params::new(65, 0x1, 0, false, false, 0) {
    println!("rejected: {err}");
  }
  println!();
  Ok(())
}

/// Incremental updates; the CRC so far can be read at any point.
fn streaming() -> std::io::Result<()> {
  println!("--- Streaming ---\n");

  let table = Table::new(catalog::CRC64_ECMA);
  let mut crc = Crc::new(&table);
  crc.update(b"1234");
  println!("after \"1234\":      0x{:016X}", crc.finalize());
  crc.write_all(b"56789")?;
  println!("after \"123456789\": 0x{:016X}", crc.finalize());
  println!("digest:            {:x}", crc.digest());
  assert_eq!(crc.finalize(), 0x995D_C9BB_DF19_39FA);

  // Same table, different output settings.
  let jam = catalog::CRC64_ECMA.with_final_xor(0);
  let mut crc = Crc::with_params(&table, jam).map_err(std::io::Error::other)?;
  println!("without xorout:    0x{:016X}", crc.checksum(b"123456789"));
  println!();
  Ok(())
}

/// One table, many threads.
fn shared_table() {
  println!("--- Shared Table ---\n");

  let table = Arc::new(Table::new(catalog::CASTAGNOLI));
  let handles: Vec<_> = (0..4u8)
    .map(|i| {
      let table = Arc::clone(&table);
      thread::spawn(move || {
        let data = vec![i; 1024];
        (i, Crc::new(table).checksum(&data))
      })
    })
    .collect();

  for handle in handles {
    if let Ok((i, crc)) = handle.join() {
      println!("thread {i}: 0x{crc:08X}");
    }
  }
}
