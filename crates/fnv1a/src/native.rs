//! FNV-1a on a single machine word (32 and 64 bits).
//!
//! These widths need no limb machinery: XOR, then a wrapping multiply by the
//! prime. Besides the [`Checksum`] impls they implement [`core::hash::Hasher`]
//! so they can back a `HashMap`.

use core::hash::{BuildHasherDefault, Hasher};

use traits::Checksum;

use crate::params::{FNV1A_32_OFFSET_BASIS, FNV1A_32_PRIME, FNV1A_64_OFFSET_BASIS, FNV1A_64_PRIME};

/// FNV-1a 32-bit streaming hasher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fnv1a32 {
  state: u32,
}

/// FNV-1a 64-bit streaming hasher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fnv1a64 {
  state: u64,
}

/// A [`BuildHasher`](core::hash::BuildHasher) producing [`Fnv1a64`] hashers.
pub type BuildFnv1a64 = BuildHasherDefault<Fnv1a64>;

impl Fnv1a32 {
  /// Create a hasher whose state is the given native value.
  #[inline]
  #[must_use]
  pub const fn from_value(value: u32) -> Self {
    Self { state: value }
  }

  /// The current hash as a native integer.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u32 {
    self.state
  }

  /// Hash `data` at compile time or at runtime.
  #[must_use]
  pub const fn hash_const(data: &[u8]) -> u32 {
    let mut state = FNV1A_32_OFFSET_BASIS;
    let mut rest = data;
    while let [byte, tail @ ..] = rest {
      state ^= *byte as u32;
      state = state.wrapping_mul(FNV1A_32_PRIME);
      rest = tail;
    }
    state
  }

  /// Name of the kernel in use.
  #[inline]
  #[must_use]
  pub const fn backend_name() -> &'static str {
    "portable/native32"
  }
}

impl Fnv1a64 {
  /// Create a hasher whose state is the given native value.
  #[inline]
  #[must_use]
  pub const fn from_value(value: u64) -> Self {
    Self { state: value }
  }

  /// The current hash as a native integer.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.state
  }

  /// Hash `data` at compile time or at runtime.
  #[must_use]
  pub const fn hash_const(data: &[u8]) -> u64 {
    let mut state = FNV1A_64_OFFSET_BASIS;
    let mut rest = data;
    while let [byte, tail @ ..] = rest {
      state ^= *byte as u64;
      state = state.wrapping_mul(FNV1A_64_PRIME);
      rest = tail;
    }
    state
  }

  /// Name of the kernel in use.
  #[inline]
  #[must_use]
  pub const fn backend_name() -> &'static str {
    "portable/native64"
  }
}

impl Default for Fnv1a32 {
  #[inline]
  fn default() -> Self {
    Self::from_value(FNV1A_32_OFFSET_BASIS)
  }
}

impl Default for Fnv1a64 {
  #[inline]
  fn default() -> Self {
    Self::from_value(FNV1A_64_OFFSET_BASIS)
  }
}

impl Checksum for Fnv1a32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = [u8; 4];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Self::from_value(u32::from_le_bytes(initial))
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    let mut state = self.state;
    for &byte in data {
      state ^= u32::from(byte);
      state = state.wrapping_mul(FNV1A_32_PRIME);
    }
    self.state = state;
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.state.to_le_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Checksum for Fnv1a64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = [u8; 8];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Self::from_value(u64::from_le_bytes(initial))
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    let mut state = self.state;
    for &byte in data {
      state ^= u64::from(byte);
      state = state.wrapping_mul(FNV1A_64_PRIME);
    }
    self.state = state;
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.state.to_le_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Hasher for Fnv1a32 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    u64::from(self.state)
  }
}

impl Hasher for Fnv1a64 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.state
  }
}
