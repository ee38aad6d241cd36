//! Bit reflection, the one primitive every engine shares.

/// Reverse the order of the low `count` bits of `value`.
///
/// Bits above `count` are dropped, so the result always fits in `count`
/// bits. `count == 0` yields 0 and counts above 64 behave as 64.
///
/// ```
/// use anycrc::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, count: u8) -> u64 {
  match count {
    0 => 0,
    1..=63 => value.reverse_bits() >> (64 - count as u32),
    _ => value.reverse_bits(),
  }
}

/// All-ones mask covering the low `width` bits.
///
/// `width` is clamped the same way as in [`reflect`].
#[inline]
#[must_use]
pub const fn mask(width: u8) -> u64 {
  match width {
    0 => 0,
    1..=63 => (1u64 << width) - 1,
    _ => u64::MAX,
  }
}
