//! Core checksum traits for the anycrc workspace.
//!
//! This crate provides the trait every hasher in the workspace conforms to,
//! plus I/O adapters built on it. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Incremental, non-consuming checksum computation |
//! | [`ChecksumReader`] | Checksum bytes as they are read (`std`) |
//! | [`ChecksumWriter`] | Checksum bytes as they are written (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::Checksum;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
