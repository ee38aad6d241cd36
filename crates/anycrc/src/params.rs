//! CRC algorithm parameters.
//!
//! This module defines the parameter set describing a CRC variant, following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crate::{
  Error,
  common::bits::{mask, reflect},
};

/// Widest register supported by the engine.
pub const MAX_WIDTH: u8 = 64;

/// CRC algorithm parameters.
///
/// A `Params` value fully determines a CRC variant. It is plain `Copy` data:
/// presets in [`catalog`](crate::catalog) are independent constants and
/// nothing here is ever mutated after construction.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC, 1 to 64
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `init`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `final_xor`: Value to XOR with the final CRC
///
/// Integer fields are reduced modulo `2^width` at construction.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC32, CRC32C) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
  width: u8,
  polynomial: u64,
  init: u64,
  reflect_in: bool,
  reflect_out: bool,
  final_xor: u64,
}

impl Params {
  /// Validate and build a parameter set.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidWidth`] when `width` is 0 or above [`MAX_WIDTH`].
  ///
  /// ```
  /// use anycrc::{Error, Params};
  ///
  /// let xmodem = Params::new(16, 0x1021, 0, false, false, 0)?;
  /// assert_eq!(xmodem.polynomial(), 0x1021);
  ///
  /// assert_eq!(Params::new(0, 0x1, 0, false, false, 0), Err(Error::InvalidWidth(0)));
  /// # Ok::<(), Error>(())
  /// ```
  pub const fn new(
    width: u8,
    polynomial: u64,
    init: u64,
    reflect_in: bool,
    reflect_out: bool,
    final_xor: u64,
  ) -> Result<Self, Error> {
    if width == 0 || width > MAX_WIDTH {
      return Err(Error::InvalidWidth(width));
    }
    let mask = mask(width);
    Ok(Self {
      width,
      polynomial: polynomial & mask,
      init: init & mask,
      reflect_in,
      reflect_out,
      final_xor: final_xor & mask,
    })
  }

  /// Build a parameter set in a const context, failing compilation when the
  /// width is out of range.
  pub(crate) const fn preset(
    width: u8,
    polynomial: u64,
    init: u64,
    reflect_in: bool,
    reflect_out: bool,
    final_xor: u64,
  ) -> Self {
    match Self::new(width, polynomial, init, reflect_in, reflect_out, final_xor) {
      Ok(params) => params,
      Err(_) => panic!("preset width must be between 1 and 64"),
    }
  }

  /// Look up a catalog preset by name or alias (case-insensitive).
  ///
  /// # Errors
  ///
  /// Returns [`Error::UnknownPreset`] when no preset matches.
  ///
  /// ```
  /// use anycrc::{Params, catalog};
  ///
  /// assert_eq!(Params::by_name("crc-32/iso-hdlc")?, catalog::CRC32);
  /// # Ok::<(), anycrc::Error>(())
  /// ```
  pub fn by_name(name: &str) -> Result<Self, Error> {
    match crate::catalog::find(name) {
      Some(preset) => Ok(preset.params),
      None => {
        debug_event!(preset = name, "no crc preset matches");
        Err(Error::UnknownPreset)
      }
    }
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, normal (MSB-first) form, without the top bit.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// Whether input bytes are bit-reversed before processing.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is bit-reversed before the final XOR.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Value XORed into the result.
  #[inline]
  #[must_use]
  pub const fn final_xor(&self) -> u64 {
    self.final_xor
  }

  /// `2^width - 1`.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    mask(self.width)
  }

  /// Number of bytes in the digest rendering: `ceil(width / 8)`.
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    (self.width as usize).div_ceil(8)
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect(self.polynomial, self.width)
  }

  /// Same parameters with a different initial value (masked to `width`).
  #[inline]
  #[must_use]
  pub const fn with_init(self, init: u64) -> Self {
    Self {
      init: init & self.mask(),
      ..self
    }
  }

  /// Same parameters with a different final XOR value (masked to `width`).
  #[inline]
  #[must_use]
  pub const fn with_final_xor(self, final_xor: u64) -> Self {
    Self {
      final_xor: final_xor & self.mask(),
      ..self
    }
  }

  /// Same parameters with a different output reflection.
  #[inline]
  #[must_use]
  pub const fn with_reflect_out(self, reflect_out: bool) -> Self {
    Self { reflect_out, ..self }
  }

  /// Whether a lookup table built from `self` can serve `other`.
  ///
  /// Table entries depend only on width, polynomial and input reflection;
  /// `init`, `final_xor` and `reflect_out` are applied outside the table.
  #[inline]
  #[must_use]
  pub const fn shares_table_with(&self, other: &Self) -> bool {
    self.width == other.width && self.polynomial == other.polynomial && self.reflect_in == other.reflect_in
  }
}

/// RevEng catalogue notation, e.g.
/// `width=16 poly=0x1021 init=0xffff refin=false refout=false xorout=0x0000`.
impl fmt::Display for Params {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = (self.width as usize).div_ceil(4);
    write!(
      f,
      "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x}",
      self.width,
      self.polynomial,
      self.init,
      self.reflect_in,
      self.reflect_out,
      self.final_xor,
      w = digits + 2,
    )
  }
}
