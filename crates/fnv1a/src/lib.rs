//! FNV-1a at 32, 64, 128, 256, 512 and 1024 bits (**NOT CRYPTO**).
//!
//! The 32- and 64-bit variants use native wrapping arithmetic. The wider
//! variants keep the accumulator as a fixed array of 32-bit limbs and multiply
//! by the sparse FNV prime `2^S + low` with explicit carry propagation, so no
//! big-integer type is involved and every width is `no_std`.
//!
//! # Supported Widths
//!
//! | Type | Output | Prime |
//! |------|--------|-------|
//! | [`Fnv1a32`] | `[u8; 4]` | `2^24 + 0x193` |
//! | [`Fnv1a64`] | `[u8; 8]` | `2^40 + 0x1b3` |
//! | [`Fnv1a128`] | `[u8; 16]` | `2^88 + 0x13b` |
//! | [`Fnv1a256`] | `[u8; 32]` | `2^168 + 0x163` |
//! | [`Fnv1a512`] | `[u8; 64]` | `2^344 + 0x157` |
//! | [`Fnv1a1024`] | `[u8; 128]` | `2^680 + 0x18d` |
//!
//! # Byte Order
//!
//! Digests are little-endian: byte `k` is byte `k % 4` of limb `k / 4`, limb 0
//! being least significant. Published FNV values are written as big-endian
//! numbers; use [`BigEndianHex`] to print a digest that way.
//!
//! # Example
//!
//! ```rust
//! use fnv1a::{BigEndianHex, Checksum, Fnv1a128};
//!
//! // One-shot computation
//! let digest = fnv1a::hash_128(b"hello world!goodbye!");
//! assert_eq!(BigEndianHex(&digest).to_string(), "aebb096b13b291473b18f8448a446fa0");
//!
//! // Streaming computation
//! let mut hasher = Fnv1a128::new();
//! hasher.update(b"hello world!");
//! hasher.update(b"goodbye!");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! fnv1a = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod hex;
mod limbs;
mod native;
pub mod params;
mod wide;
mod width;

#[cfg(feature = "alloc")]
pub use hex::to_be_hex;
pub use hex::{BigEndianHex, parse_be_hex};
pub use native::{BuildFnv1a64, Fnv1a32, Fnv1a64};
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
pub use traits::{BufferTooSmall, Checksum, ParseDigestError, VerificationError};
pub use wide::{Fnv1a128, Fnv1a256, Fnv1a512, Fnv1a1024};
pub use width::{Description, ParseWidthError, Width};

/// FNV-1a 32 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_32(data: &[u8]) -> [u8; 4] {
  Fnv1a32::checksum(data)
}

/// FNV-1a 64 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_64(data: &[u8]) -> [u8; 8] {
  Fnv1a64::checksum(data)
}

/// FNV-1a 128 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_128(data: &[u8]) -> [u8; 16] {
  Fnv1a128::checksum(data)
}

/// FNV-1a 256 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_256(data: &[u8]) -> [u8; 32] {
  Fnv1a256::checksum(data)
}

/// FNV-1a 512 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_512(data: &[u8]) -> [u8; 64] {
  Fnv1a512::checksum(data)
}

/// FNV-1a 1024 of `data`, little-endian.
#[inline]
#[must_use]
pub fn hash_1024(data: &[u8]) -> [u8; 128] {
  Fnv1a1024::checksum(data)
}
