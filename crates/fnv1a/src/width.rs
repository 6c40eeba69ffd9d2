//! Runtime selection of an FNV-1a width.
//!
//! The typed hashers ([`Fnv1a32`] … [`Fnv1a1024`]) fix the width at compile
//! time. [`Width`] covers callers that learn it at runtime, such as a CLI flag
//! or a digest header.

use core::{fmt, str::FromStr};

use traits::{BufferTooSmall, Checksum};

use crate::{
  Fnv1a32, Fnv1a64, Fnv1a128, Fnv1a256, Fnv1a512, Fnv1a1024,
  params::{FNV1A_32_PRIME_EXPONENT, FNV1A_32_PRIME_LOW, FNV1A_64_PRIME_EXPONENT, FNV1A_64_PRIME_LOW},
};

/// A supported FNV-1a digest width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
  /// FNV-1a 32, see [`Fnv1a32`].
  W32,
  /// FNV-1a 64, see [`Fnv1a64`].
  W64,
  /// FNV-1a 128, see [`Fnv1a128`].
  W128,
  /// FNV-1a 256, see [`Fnv1a256`].
  W256,
  /// FNV-1a 512, see [`Fnv1a512`].
  W512,
  /// FNV-1a 1024, see [`Fnv1a1024`].
  W1024,
}

impl Width {
  /// Every width, narrowest first.
  pub const ALL: [Width; 6] = [
    Width::W32,
    Width::W64,
    Width::W128,
    Width::W256,
    Width::W512,
    Width::W1024,
  ];

  /// Digest width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W32 => 32,
      Self::W64 => 64,
      Self::W128 => 128,
      Self::W256 => 256,
      Self::W512 => 512,
      Self::W1024 => 1024,
    }
  }

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(self) -> usize {
    self.bits() as usize / 8
  }

  /// Look up a width by its bit count.
  #[must_use]
  pub const fn from_bits(bits: u32) -> Option<Self> {
    match bits {
      32 => Some(Self::W32),
      64 => Some(Self::W64),
      128 => Some(Self::W128),
      256 => Some(Self::W256),
      512 => Some(Self::W512),
      1024 => Some(Self::W1024),
      _ => None,
    }
  }

  /// Name of the kernel backing this width.
  #[must_use]
  pub const fn backend_name(self) -> &'static str {
    match self {
      Self::W32 => Fnv1a32::backend_name(),
      Self::W64 => Fnv1a64::backend_name(),
      Self::W128 => Fnv1a128::backend_name(),
      Self::W256 => Fnv1a256::backend_name(),
      Self::W512 => Fnv1a512::backend_name(),
      Self::W1024 => Fnv1a1024::backend_name(),
    }
  }

  /// Human-readable summary of the width's parameters.
  #[inline]
  #[must_use]
  pub const fn describe(self) -> Description {
    Description { width: self }
  }

  /// Hash `data` into the front of `out`, returning the digest length.
  ///
  /// The digest is written little-endian.
  ///
  /// # Errors
  ///
  /// Returns [`BufferTooSmall`] if `out` is shorter than
  /// [`output_size`](Self::output_size); `out` is left untouched.
  pub fn hash_into(self, data: &[u8], out: &mut [u8]) -> Result<usize, BufferTooSmall> {
    let n = self.output_size();
    let available = out.len();
    let dst = out.get_mut(..n).ok_or(BufferTooSmall { required: n, available })?;
    match self {
      Self::W32 => dst.copy_from_slice(&Fnv1a32::checksum(data)),
      Self::W64 => dst.copy_from_slice(&Fnv1a64::checksum(data)),
      Self::W128 => dst.copy_from_slice(&Fnv1a128::checksum(data)),
      Self::W256 => dst.copy_from_slice(&Fnv1a256::checksum(data)),
      Self::W512 => dst.copy_from_slice(&Fnv1a512::checksum(data)),
      Self::W1024 => dst.copy_from_slice(&Fnv1a1024::checksum(data)),
    }
    Ok(n)
  }

  /// Hash `data` into a freshly allocated little-endian digest.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn hash_to_vec(self, data: &[u8]) -> alloc::vec::Vec<u8> {
    match self {
      Self::W32 => Fnv1a32::checksum(data).to_vec(),
      Self::W64 => Fnv1a64::checksum(data).to_vec(),
      Self::W128 => Fnv1a128::checksum(data).to_vec(),
      Self::W256 => Fnv1a256::checksum(data).to_vec(),
      Self::W512 => Fnv1a512::checksum(data).to_vec(),
      Self::W1024 => Fnv1a1024::checksum(data).to_vec(),
    }
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "fnv1a-{}", self.bits())
  }
}

/// Error returned when a string names no supported width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseWidthError;

impl fmt::Display for ParseWidthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unsupported FNV-1a width (expected 32, 64, 128, 256, 512 or 1024)")
  }
}

impl core::error::Error for ParseWidthError {}

impl FromStr for Width {
  type Err = ParseWidthError;

  /// Accepts `"256"`, `"fnv1a-256"` and `"fnv1a256"`, ASCII case-insensitive.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    let digits = match s.get(..5) {
      Some(prefix) if prefix.eq_ignore_ascii_case("fnv1a") => {
        let rest = s.get(5..).unwrap_or("");
        rest.strip_prefix('-').unwrap_or(rest)
      }
      _ => s,
    };
    digits
      .parse::<u32>()
      .ok()
      .and_then(Self::from_bits)
      .ok_or(ParseWidthError)
  }
}

/// Parameter summary returned by [`Width::describe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  width: Width,
}

impl Description {
  /// Limb count of the accumulator, or `None` for native-word widths.
  #[must_use]
  pub const fn limbs(&self) -> Option<usize> {
    match self.width {
      Width::W32 | Width::W64 => None,
      w => Some(w.bits() as usize / 32),
    }
  }

  /// The prime as `(exponent, low)` with `prime = 2^exponent + low`.
  #[must_use]
  pub const fn prime(&self) -> (u32, u32) {
    match self.width {
      Width::W32 => (FNV1A_32_PRIME_EXPONENT, FNV1A_32_PRIME_LOW),
      Width::W64 => (FNV1A_64_PRIME_EXPONENT, FNV1A_64_PRIME_LOW),
      Width::W128 => (Fnv1a128::params().prime_exponent(), Fnv1a128::params().prime_low),
      Width::W256 => (Fnv1a256::params().prime_exponent(), Fnv1a256::params().prime_low),
      Width::W512 => (Fnv1a512::params().prime_exponent(), Fnv1a512::params().prime_low),
      Width::W1024 => (Fnv1a1024::params().prime_exponent(), Fnv1a1024::params().prime_low),
    }
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (exponent, low) = self.prime();
    match self.limbs() {
      Some(limbs) => write!(f, "{}: {limbs} limbs, prime = 2^{exponent} + {low:#x}", self.width)?,
      None => write!(f, "{}: native word, prime = 2^{exponent} + {low:#x}", self.width)?,
    }
    write!(f, " [{}]", self.width.backend_name())
  }
}
