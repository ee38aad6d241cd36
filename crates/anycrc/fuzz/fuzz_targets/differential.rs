//! Differential fuzzing against `crc-fast`.

#![no_main]

use anycrc::{Table, catalog};
use crc_fast::CrcAlgorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let pairs = [
    (catalog::CRC32, CrcAlgorithm::Crc32IsoHdlc),
    (catalog::CASTAGNOLI, CrcAlgorithm::Crc32Iscsi),
    (catalog::CRC64_ECMA, CrcAlgorithm::Crc64Xz),
    (catalog::CRC64_NVME, CrcAlgorithm::Crc64Nvme),
  ];

  for (params, algorithm) in pairs {
    let ours = Table::new(params).checksum(data);
    assert_eq!(ours, crc_fast::checksum(algorithm, data), "{params}");
  }
});
