//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every byte actually
//! transferred to a [`Crc`](crate::Crc). Short reads and writes are handled:
//! only the bytes the inner stream accepted or produced are hashed.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use anycrc::{Checksum as _, Crc, Table, catalog};
//!
//! let table = Table::new(catalog::CASTAGNOLI);
//! let mut reader = Crc::new(&table).reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), table.checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};

#[cfg(test)]
mod tests {
  extern crate alloc;
  extern crate std;

  use alloc::vec::Vec;
  use std::io::{Read, Write};

  use traits::Checksum;

  use crate::{Crc, Table, catalog};

  #[test]
  fn writer_matches_one_shot() {
    let table = Table::new(catalog::CRC64_NVME);
    let mut writer = Crc::new(&table).writer(Vec::new());
    writer.write_all(b"1234").unwrap();
    writer.write_all(b"56789").unwrap();
    let (out, crc) = writer.into_parts();
    assert_eq!(out, b"123456789");
    assert_eq!(crc, 0xAE8B_1486_0A79_9888);
  }

  #[test]
  fn reader_in_small_reads() {
    let table = Table::new(catalog::CRC24_OPENPGP);
    let mut reader = Crc::new(&table).reader(&b"123456789"[..]);
    let mut buf = [0u8; 2];
    while reader.read(&mut buf).unwrap() != 0 {}
    assert_eq!(reader.crc(), 0x21_CF02);
  }
}
