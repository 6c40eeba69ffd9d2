//! Core hashing traits for widefnv.
//!
//! This crate provides the foundational traits that the widefnv hash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming non-cryptographic hashes | FNV-1a 32 … 1024 |
//!
//! # Error Types
//!
//! - [`VerificationError`] - A recomputed digest did not match the expected one
//! - [`ParseDigestError`] - A textual digest could not be decoded
//! - [`BufferTooSmall`] - An output buffer cannot hold a digest
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
pub mod error;
pub mod io;

pub use checksum::Checksum;
pub use error::{BufferTooSmall, ParseDigestError, VerificationError};
