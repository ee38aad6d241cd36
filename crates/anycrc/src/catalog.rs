//! Named CRC presets.
//!
//! Each constant is a plain [`Params`] value. Names and aliases follow the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/); check
//! values are the CRC of `"123456789"` and are verified at compile time.
//!
//! ```
//! use anycrc::{Table, catalog};
//!
//! let preset = catalog::find("crc-32c").unwrap();
//! assert_eq!(preset.params, catalog::CASTAGNOLI);
//! assert_eq!(Table::new(preset.params).checksum(b"123456789"), preset.check);
//! ```

use crate::{Params, bitwise, common::reference::CHECK_INPUT};

/// A named parameter set with its catalogue check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
  /// Primary name.
  pub name: &'static str,
  /// Other accepted names.
  pub aliases: &'static [&'static str],
  /// The parameter set.
  pub params: Params,
  /// CRC of the ASCII bytes `"123456789"`.
  pub check: u64,
}

impl Preset {
  /// Whether `name` is this preset's name or one of its aliases, ignoring
  /// ASCII case.
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// 16-bit
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/IBM-3740, also known as CRC-16/CCITT-FALSE.
pub const CCITT: Params = Params::preset(16, 0x1021, 0xFFFF, false, false, 0);

/// CRC-16/ARC.
pub const CRC16: Params = Params::preset(16, 0x8005, 0, true, true, 0);

/// CRC-16/XMODEM.
pub const XMODEM: Params = Params::preset(16, 0x1021, 0, false, false, 0);

/// Reversed XMODEM polynomial `0x8408` fed LSB-first with reflected output.
///
/// A distinct CRC rather than an alias of [`XMODEM`]: its check value is
/// `0x0C73`, not `0x31C3`. It has no RevEng name and is listed as `XMODEM2`.
pub const XMODEM2: Params = Params::preset(16, 0x8408, 0, true, true, 0);

// ─────────────────────────────────────────────────────────────────────────────
// 32-bit
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC (zlib, Ethernet, PNG).
pub const CRC32: Params = Params::preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

/// Alias of [`CRC32`].
pub const IEEE: Params = CRC32;

/// CRC-32/ISCSI (CRC-32C).
pub const CASTAGNOLI: Params = Params::preset(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

/// Alias of [`CASTAGNOLI`].
pub const CRC32C: Params = CASTAGNOLI;

/// Koopman's 32-bit polynomial.
pub const KOOPMAN: Params = Params::preset(32, 0x741B_8CD7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

// ─────────────────────────────────────────────────────────────────────────────
// 64-bit
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/GO-ISO.
pub const CRC64_ISO: Params = Params::preset(64, 0x1B, u64::MAX, true, true, u64::MAX);

/// CRC-64/XZ (ECMA-182 polynomial).
pub const CRC64_ECMA: Params = Params::preset(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);

/// CRC-64/NVME.
pub const CRC64_NVME: Params = Params::preset(64, 0xAD93_D235_94C9_3659, u64::MAX, true, true, u64::MAX);

// ─────────────────────────────────────────────────────────────────────────────
// Odd widths
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-3/ROHC.
pub const CRC3_ROHC: Params = Params::preset(3, 0x3, 0x7, true, true, 0);

/// CRC-4/INTERLAKEN.
pub const CRC4_INTERLAKEN: Params = Params::preset(4, 0x3, 0xF, false, false, 0xF);

/// CRC-5/USB.
pub const CRC5_USB: Params = Params::preset(5, 0x05, 0x1F, true, true, 0x1F);

/// CRC-7/MMC.
pub const CRC7_MMC: Params = Params::preset(7, 0x09, 0, false, false, 0);

/// CRC-8/SMBUS.
pub const CRC8_SMBUS: Params = Params::preset(8, 0x07, 0, false, false, 0);

/// CRC-8/MAXIM-DOW.
pub const CRC8_MAXIM: Params = Params::preset(8, 0x31, 0, true, true, 0);

/// CRC-12/UMTS. Input is processed MSB-first, output is reflected.
pub const CRC12_UMTS: Params = Params::preset(12, 0x80F, 0, false, true, 0);

/// CRC-24/OPENPGP.
pub const CRC24_OPENPGP: Params = Params::preset(24, 0x86_4CFB, 0xB7_04CE, false, false, 0);

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

const fn entry(name: &'static str, aliases: &'static [&'static str], params: Params, check: u64) -> Preset {
  Preset {
    name,
    aliases,
    params,
    check,
  }
}

/// Every preset, ordered by width.
pub const ALL: &[Preset] = &[
  entry("CRC-3/ROHC", &["CRC3_ROHC"], CRC3_ROHC, 0x6),
  entry("CRC-4/INTERLAKEN", &["CRC4_INTERLAKEN"], CRC4_INTERLAKEN, 0xB),
  entry("CRC-5/USB", &["CRC5_USB"], CRC5_USB, 0x19),
  entry("CRC-7/MMC", &["CRC7_MMC"], CRC7_MMC, 0x75),
  entry("CRC-8/SMBUS", &["CRC-8", "CRC8_SMBUS"], CRC8_SMBUS, 0xF4),
  entry("CRC-8/MAXIM-DOW", &["CRC-8/MAXIM", "DOW-CRC", "CRC8_MAXIM"], CRC8_MAXIM, 0xA1),
  entry("CRC-12/UMTS", &["CRC-12/3GPP", "CRC12_UMTS"], CRC12_UMTS, 0xDAF),
  entry("CRC-16/IBM-3740", &["CRC-16/CCITT-FALSE", "CRC-16/AUTOSAR", "CCITT"], CCITT, 0x29B1),
  entry("CRC-16/ARC", &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM", "CRC16"], CRC16, 0xBB3D),
  entry("CRC-16/XMODEM", &["XMODEM", "ZMODEM", "CRC-16/ACORN", "CRC-16/LTE"], XMODEM, 0x31C3),
  entry("XMODEM2", &[], XMODEM2, 0x0C73),
  entry("CRC-24/OPENPGP", &["CRC-24", "CRC24_OPENPGP"], CRC24_OPENPGP, 0x21_CF02),
  entry(
    "CRC-32/ISO-HDLC",
    &["CRC-32", "CRC32", "IEEE", "CRC-32/ADCCP", "CRC-32/V-42", "PKZIP"],
    CRC32,
    0xCBF4_3926,
  ),
  entry(
    "CRC-32/ISCSI",
    &["CRC-32C", "CRC32C", "CASTAGNOLI", "CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN"],
    CASTAGNOLI,
    0xE306_9283,
  ),
  entry("CRC-32/KOOPMAN", &["KOOPMAN"], KOOPMAN, 0x2D3D_D0AE),
  entry("CRC-64/GO-ISO", &["CRC64_ISO"], CRC64_ISO, 0xB909_56C7_75A4_1001),
  entry(
    "CRC-64/XZ",
    &["CRC-64/GO-ECMA", "CRC64_ECMA"],
    CRC64_ECMA,
    0x995D_C9BB_DF19_39FA,
  ),
  entry("CRC-64/NVME", &["CRC64_NVME"], CRC64_NVME, 0xAE8B_1486_0A79_9888),
];

/// Find a preset by name or alias, ignoring ASCII case.
///
/// ```
/// use anycrc::catalog;
///
/// assert_eq!(catalog::find("crc-16/xmodem").map(|p| p.params), Some(catalog::XMODEM));
/// assert!(catalog::find("CRC-99").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Preset> {
  ALL.iter().find(|preset| preset.matches(name))
}

// Every check value in the registry must match the reference engine.
#[allow(clippy::indexing_slicing)]
const _: () = {
  let mut i = 0;
  while i < ALL.len() {
    let preset = &ALL[i];
    assert!(bitwise(&preset.params, CHECK_INPUT) == preset.check);
    i += 1;
  }
};
