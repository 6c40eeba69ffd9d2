//! Fixed-width limb accumulator for the multi-word FNV-1a variants.
//!
//! The accumulator is a little-endian array of 32-bit digits, each held in a
//! `u64` slot so a digit times the prime's low digit, plus the shifted cross
//! term and the incoming carry, never leaves the slot. The bound is checked for
//! every parameter table by [`WideParams::is_well_formed`].

#![allow(clippy::indexing_slicing)] // Const digit loading walks fixed-size arrays

use crate::params::WideParams;

const LIMB_MASK: u64 = 0xFFFF_FFFF;

/// An `L`-limb FNV-1a accumulator, least-significant digit first.
///
/// Invariant: after construction and after every processed byte each slot
/// holds a value below `2^32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Limbs<const L: usize>([u64; L]);

impl<const L: usize> Limbs<L> {
  /// Load base-2^32 digits, least significant first.
  #[inline]
  #[must_use]
  pub(crate) const fn from_digits(digits: &[u32; L]) -> Self {
    let mut out = [0u64; L];
    let mut i = 0;
    while i < L {
      out[i] = digits[i] as u64;
      i += 1;
    }
    Self(out)
  }

  /// Load a little-endian serialized digest.
  ///
  /// `bytes` must be `4 * L` long; the caller guarantees this at compile time.
  #[inline]
  #[must_use]
  pub(crate) fn from_le_bytes(bytes: &[u8]) -> Self {
    debug_assert_eq!(bytes.len(), 4 * L);
    let mut out = [0u64; L];
    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
      let mut word = [0u8; 4];
      word.copy_from_slice(chunk);
      *slot = u64::from(u32::from_le_bytes(word));
    }
    Self(out)
  }

  /// Serialize as little-endian limbs of little-endian bytes.
  ///
  /// Output byte `k` is byte `k % 4` of limb `k / 4`.
  #[inline]
  pub(crate) fn write_le_bytes(&self, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 4 * L);
    for (chunk, &limb) in out.chunks_exact_mut(4).zip(self.0.iter()) {
      chunk.copy_from_slice(&((limb & LIMB_MASK) as u32).to_le_bytes());
    }
  }

  /// Fold `data` into the accumulator, one FNV-1a round per byte.
  #[inline]
  pub(crate) fn absorb(&mut self, params: &WideParams<L>, data: &[u8]) {
    for &byte in data {
      self.xor_byte(byte);
      self.mul_prime(params);
    }
  }

  #[inline(always)]
  fn xor_byte(&mut self, byte: u8) {
    if let Some(low) = self.0.first_mut() {
      *low ^= u64::from(byte);
    }
  }

  /// Multiply by `2^(32*limb_offset + prime_shift) + prime_low` modulo `2^(32*L)`.
  #[inline(always)]
  fn mul_prime(&mut self, params: &WideParams<L>) {
    let low = u64::from(params.prime_low);
    let mut product = self.0.map(|digit| digit * low);

    // High prime term: digit j lands in slot j + limb_offset, shifted within
    // the limb. Digits that would land at or above slot L vanish mod 2^(32*L).
    if let Some(high) = product.get_mut(params.limb_offset..) {
      for (slot, &digit) in high.iter_mut().zip(self.0.iter()) {
        *slot += digit << params.prime_shift;
      }
    }

    let mut carry = 0u64;
    for (digit, slot) in self.0.iter_mut().zip(product) {
      let value = slot + carry;
      *digit = value & LIMB_MASK;
      carry = value >> 32;
    }
    // The final carry is the part of the product at or above 2^(32*L).
  }

  #[cfg(test)]
  pub(crate) fn digits(&self) -> [u64; L] {
    self.0
  }
}
