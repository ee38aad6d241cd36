//! Common building blocks for CRC computation.
//!
//! This module provides:
//! - Bit reflection and width masks
//! - The bitwise reference engine every other path is checked against
//! - Const-fn lookup table generation for any width
//! - Byte-at-a-time table-driven folding

pub mod bits;
pub(crate) mod portable;
pub mod reference;
pub(crate) mod tables;


#[cfg(test)]
mod proptests;
