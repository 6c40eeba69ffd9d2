//! FNV-1a at 128, 256, 512 and 1024 bits.
//!
//! All four widths share the limb engine in [`crate::limbs`]; they differ only
//! in their [`WideParams`](crate::params::WideParams) table.

use crate::{
  limbs::Limbs,
  params::{FNV1A_128, FNV1A_256, FNV1A_512, FNV1A_1024, WideParams},
};

/// Generate a multi-limb FNV-1a type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: Limbs<$limbs>`
/// - `params()` and `backend_name()` introspection
/// - `Default`, `Debug` and `Checksum` implementations
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Fnv1a256`)
/// - `$params`: The parameter table (e.g., `FNV1A_256`)
/// - `$limbs`: Limb count (`bits / 32`)
/// - `$out`: Digest size in bytes (`bits / 8`)
macro_rules! define_wide_fnv {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
      limbs: $limbs:literal,
      out: $out:literal,
      backend: $backend:literal,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, PartialEq, Eq)]
    $vis struct $name {
      state: Limbs<$limbs>,
    }

    const _: () = assert!($out == 4 * $limbs);

    impl $name {
      const PARAMS: WideParams<$limbs> = $params;

      /// The offset basis, prime and limb layout for this width.
      #[inline]
      #[must_use]
      pub const fn params() -> WideParams<$limbs> {
        Self::PARAMS
      }

      /// Name of the multiply kernel in use.
      #[inline]
      #[must_use]
      pub const fn backend_name() -> &'static str {
        $backend
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self {
          state: Limbs::from_digits(&Self::PARAMS.offset_basis),
        }
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digest = <Self as traits::Checksum>::finalize(self);
        f.debug_tuple(stringify!($name))
          .field(&format_args!("{}", crate::hex::BigEndianHex(&digest)))
          .finish()
      }
    }

    impl traits::Checksum for $name {
      const OUTPUT_SIZE: usize = $out;
      type Output = [u8; $out];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn with_initial(initial: Self::Output) -> Self {
        Self {
          state: Limbs::from_le_bytes(&initial),
        }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state.absorb(&Self::PARAMS, data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $out];
        self.state.write_le_bytes(&mut out);
        out
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::default();
      }
    }
  };
}

define_wide_fnv! {
  /// FNV-1a 128-bit streaming hasher.
  pub struct Fnv1a128 {
    params: FNV1A_128,
    limbs: 4,
    out: 16,
    backend: "portable/limb32x4",
  }
}

define_wide_fnv! {
  /// FNV-1a 256-bit streaming hasher.
  pub struct Fnv1a256 {
    params: FNV1A_256,
    limbs: 8,
    out: 32,
    backend: "portable/limb32x8",
  }
}

define_wide_fnv! {
  /// FNV-1a 512-bit streaming hasher.
  pub struct Fnv1a512 {
    params: FNV1A_512,
    limbs: 16,
    out: 64,
    backend: "portable/limb32x16",
  }
}

define_wide_fnv! {
  /// FNV-1a 1024-bit streaming hasher.
  ///
  /// Digests of short inputs contain long runs of zero bytes. That comes from
  /// the sparse offset basis and is the defined behavior of this width.
  pub struct Fnv1a1024 {
    params: FNV1A_1024,
    limbs: 32,
    out: 128,
    backend: "portable/limb32x32",
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use traits::Checksum;

  use super::*;

  #[test]
  fn empty_input_serializes_offset_basis() {
    let digest = Fnv1a128::checksum(b"");
    assert_eq!(
      digest,
      [
        0x8D, 0xC5, 0x95, 0x62, 0x75, 0x21, 0xB8, 0x62, 0x42, 0x01, 0xBB, 0x07, 0x2E, 0x27, 0x62, 0x6C
      ]
    );
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut h = Fnv1a512::new();
    h.update(b"idempotent");
    assert_eq!(h.finalize(), h.finalize());
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut h = Fnv1a256::new();
    h.update(b"some data");
    h.reset();
    assert_eq!(h, Fnv1a256::default());
  }

  #[test]
  fn resume_from_digest() {
    let mut h = Fnv1a1024::with_initial(Fnv1a1024::checksum(b"hello world!"));
    h.update(b"goodbye!");
    assert_eq!(h.finalize(), Fnv1a1024::checksum(b"hello world!goodbye!"));
  }

  #[test]
  fn debug_shows_big_endian_digest() {
    let dbg = alloc::format!("{:?}", Fnv1a128::new());
    assert_eq!(dbg, "Fnv1a128(6c62272e07bb014262b821756295c58d)");
  }

  #[test]
  fn introspection() {
    assert_eq!(Fnv1a256::backend_name(), "portable/limb32x8");
    assert_eq!(Fnv1a1024::params().bits, 1024);
    assert_eq!(Fnv1a512::params().limb_offset, 10);
  }
}
