use anycrc::{Crc, Error, Kernel, MAX_WIDTH, Params, Table, bitwise, catalog, reflect};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

#[test]
fn reflect_is_an_involution_below_width() {
  for count in 1..=MAX_WIDTH {
    for seed in [1u64, 0xDEAD_BEEF, 0x0123_4567_89AB_CDEF] {
      let v = seed & Params::new(count, 0, 0, false, false, 0).unwrap().mask();
      assert_eq!(reflect(reflect(v, count), count), v, "count {count}");
    }
  }
  assert_eq!(reflect(0xFF, 0), 0);
  assert_eq!(reflect(1, 200), 1 << 63);
}

#[test]
fn every_catalog_preset_over_many_lengths() {
  let lengths = [0usize, 1, 2, 3, 7, 8, 15, 16, 31, 64, 255, 256, 1024];
  for preset in catalog::ALL {
    let table = Table::new(preset.params);
    for len in lengths {
      let data = gen_bytes(len, len as u64 ^ 0xD1B5_4A32_D192_ED03);
      let oneshot = table.checksum(&data);
      assert_eq!(oneshot, bitwise(&preset.params, &data), "{} len {len}", preset.name);

      for split in [0, 1, len / 2, len.saturating_sub(1), len] {
        let split = split.min(len);
        let (a, b) = data.split_at(split);
        let mut crc = Crc::new(&table);
        crc.update(a);
        crc.update(b);
        assert_eq!(crc.finalize(), oneshot, "{} split {split}/{len}", preset.name);
      }
    }
  }
}

#[test]
fn empty_input_is_transformed_init() {
  let p = Params::new(12, 0x80F, 0x123, false, true, 0x00F).unwrap();
  let expected = (reflect(0x123, 12) ^ 0x00F) & 0xFFF;
  assert_eq!(bitwise(&p, &[]), expected);
  assert_eq!(Table::new(p).checksum(&[]), expected);
  assert_eq!(Crc::from_params(p).finalize(), expected);
}

#[test]
fn width_edges() {
  assert_eq!(Params::new(0, 1, 0, false, false, 0), Err(Error::InvalidWidth(0)));
  assert_eq!(Params::new(65, 1, 0, false, false, 0), Err(Error::InvalidWidth(65)));

  let data = gen_bytes(100, 7);
  for refin in [false, true] {
    let one = Params::new(1, 1, 0, refin, refin, 0).unwrap();
    assert_eq!(Table::new(one).checksum(&data), bitwise(&one, &data));
    let full = Params::new(64, 0x1B, 0, refin, !refin, u64::MAX).unwrap();
    assert_eq!(Table::new(full).checksum(&data), bitwise(&full, &data));
  }
}

#[test]
fn parity_is_the_one_bit_crc() {
  // x + 1: the remainder is the parity of all input bits.
  let parity = Params::new(1, 1, 0, false, false, 0).unwrap();
  let table = Table::new(parity);
  for len in 0..64 {
    let data = gen_bytes(len, 99);
    let ones: u32 = data.iter().map(|b| b.count_ones()).sum();
    assert_eq!(table.checksum(&data), u64::from(ones & 1), "len {len}");
  }
}

#[test]
fn kernel_selection_is_reported() {
  assert_eq!(Table::new(catalog::CRC32).kernel(), Kernel::Reflected);
  assert_eq!(Table::new(catalog::CRC24_OPENPGP).kernel(), Kernel::Normal);
  assert_eq!(Table::new(catalog::CRC7_MMC).kernel(), Kernel::NarrowNormal);
  assert_eq!(Table::new(catalog::CRC7_MMC).kernel().as_str(), "table/normal-narrow");
}

#[test]
fn one_table_many_output_settings() {
  let table = Table::new(catalog::CRC16);
  let data = gen_bytes(333, 5);
  for init in [0u64, 0xFFFF, 0x1D0F] {
    for xorout in [0u64, 0xFFFF] {
      for refout in [false, true] {
        let params = catalog::CRC16.with_init(init).with_final_xor(xorout).with_reflect_out(refout);
        let mut crc = Crc::with_params(&table, params).unwrap();
        crc.update(&data);
        assert_eq!(crc.finalize(), bitwise(&params, &data), "{params}");
      }
    }
  }
}

#[test]
fn by_name_round_trip() {
  for preset in catalog::ALL {
    assert_eq!(Params::by_name(preset.name), Ok(preset.params));
    assert_eq!(Params::by_name(&preset.name.to_lowercase()), Ok(preset.params));
    for alias in preset.aliases {
      assert_eq!(Params::by_name(alias), Ok(preset.params), "{alias}");
    }
  }
  assert_eq!(Params::by_name("CRC-0/NONE"), Err(Error::UnknownPreset));
}
