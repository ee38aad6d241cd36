//! Published check values and long-input vectors.

use anycrc::{Crc, Params, Table, bitwise, catalog};

const LONG: &[u8] = b"Whenever digital data is stored or interfaced, data corruption might occur. Since the beginning \
of computer science, people have been thinking of ways to deal with this type of problem. For serial data they came \
up with the solution to attach a parity bit to each sent byte. This simple detection mechanism works if an odd number \
of bits in a byte changes, but an even number of false bits in one byte will not be detected by the parity check. To \
overcome this problem people have searched for mathematical sound mechanisms to detect multiple false bits.";

/// `(preset, [digits, short sentence, long paragraph])`.
const VECTORS: &[(Params, [u64; 3])] = &[
  (catalog::CCITT, [0xDA31, 0xC87E, 0xD6ED]),
  (catalog::XMODEM, [0x2C89, 0x3932, 0x4E86]),
  (catalog::XMODEM2, [0x122E, 0x0638, 0x187A]),
  (catalog::CRC32, [0x9063_19F2, 0x814F_2B45, 0x8F27_3817]),
  (catalog::CASTAGNOLI, [0xA8B4_A6B9, 0x54F9_8A9E, 0x864F_DAFC]),
  (catalog::KOOPMAN, [0xCC53_DEAC, 0x1B81_01F9, 0xA416_34B2]),
  (
    catalog::CRC64_ISO,
    [0x8DB9_3749_FB37_B446, 0xBAA8_1A1E_D1A9_209B, 0x3479_6942_4A1A_7628],
  ),
  (
    catalog::CRC64_ECMA,
    [0x0DA1_B82E_F508_5A4A, 0xCF8C_4011_9AE9_0DCB, 0x3161_0F76_CFB2_72A5],
  ),
];

fn inputs() -> [&'static [u8]; 3] {
  [b"12345678901234567890", b"Introduction on CRC calculations", LONG]
}

#[test]
fn catalog_check_values() {
  for preset in catalog::ALL {
    let table = Table::new(preset.params);
    assert_eq!(table.checksum(b"123456789"), preset.check, "{}", preset.name);
    assert_eq!(bitwise(&preset.params, b"123456789"), preset.check, "{}", preset.name);
  }
}

#[test]
fn check_values_from_model() {
  let cases = [
    (Params::new(16, 0x1021, 0xFFFF, false, false, 0).unwrap(), 0x29B1),
    (Params::new(16, 0x1021, 0, false, false, 0).unwrap(), 0x31C3),
    (Params::new(32, 0x04C1_1DB7, !0, true, true, !0).unwrap(), 0xCBF4_3926),
    (
      Params::new(64, 0x42F0_E1EB_A9EA_3693, !0, true, true, !0).unwrap(),
      0x995D_C9BB_DF19_39FA,
    ),
    (Params::new(3, 0x03, 0x07, true, true, 0).unwrap(), 0x06),
    (Params::new(4, 0x03, 0x0F, false, false, 0x0F).unwrap(), 0x0B),
  ];
  for (params, check) in cases {
    assert_eq!(bitwise(&params, b"123456789"), check, "{params}");
    assert_eq!(Table::new(params).checksum(b"123456789"), check, "{params}");
  }
}

#[test]
fn long_inputs_one_shot() {
  for (params, expected) in VECTORS {
    let table = Table::new(*params);
    for (data, want) in inputs().into_iter().zip(expected) {
      assert_eq!(table.checksum(data), *want, "{params}");
      assert_eq!(bitwise(params, data), *want, "{params}");
    }
  }
}

#[test]
fn long_inputs_power_of_two_chunks() {
  for (params, expected) in VECTORS {
    let table = Table::new(*params);
    for (data, want) in inputs().into_iter().zip(expected) {
      for shift in 0..=9 {
        let mut crc = Crc::new(&table);
        for chunk in data.chunks(1 << shift) {
          crc.update(chunk);
        }
        assert_eq!(crc.finalize(), *want, "{params} chunk {}", 1 << shift);
      }
    }
  }
}

#[test]
fn digest_bytes_are_big_endian() {
  let mut crc = Crc::from_params(catalog::CRC32);
  crc.update(b"123456789");
  assert_eq!(&*crc.digest(), &[0xCB, 0xF4, 0x39, 0x26]);

  let mut crc = Crc::from_params(catalog::CRC12_UMTS);
  crc.update(b"123456789");
  assert_eq!(&*crc.digest(), &[0x0D, 0xAF]);

  let mut crc = Crc::from_params(catalog::CRC64_ECMA);
  crc.update(b"123456789");
  assert_eq!(crc.digest().as_bytes(), &0x995D_C9BB_DF19_39FAu64.to_be_bytes());
}

#[test]
fn output_sizes() {
  for (width, size) in [(3u8, 1usize), (8, 1), (12, 2), (16, 2), (32, 4), (64, 8)] {
    let params = Params::new(width, 0x07, 0, false, false, 0).unwrap();
    assert_eq!(Crc::from_params(params).output_size(), size, "width {width}");
  }
}
