//! Error types for digest exchange.
//!
//! Hashing itself is total and never fails. These errors only arise at the
//! edges: comparing a recomputed digest against a stored one, decoding a
//! digest from its textual form, or writing a digest into a caller buffer.

use core::fmt;

/// Verification failed.
///
/// Returned when a recomputed digest does not match the expected one.
/// Intentionally carries no detail about which bytes differed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 16], expected: &[u8; 16]) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// let a = [0u8; 16];
/// let b = [1u8; 16];
/// assert!(verify(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("digest verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// A textual digest could not be decoded.
///
/// Produced when parsing the big-endian hex display form of a digest back into
/// its little-endian byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseDigestError {
  /// The input did not contain exactly `expected` hex digits.
  InvalidLength {
    /// Number of hex digits required for the digest width.
    expected: usize,
    /// Number of hex digits found (after stripping an optional `0x` prefix).
    actual: usize,
  },
  /// A non-hex character was found at `index` (after the optional prefix).
  InvalidDigit {
    /// Character offset of the offending digit.
    index: usize,
  },
}

impl fmt::Display for ParseDigestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidLength { expected, actual } => {
        write!(f, "invalid digest length: expected {expected} hex digits, found {actual}")
      }
      Self::InvalidDigit { index } => write!(f, "invalid hex digit at offset {index}"),
    }
  }
}

impl core::error::Error for ParseDigestError {}

/// An output buffer is too small to hold a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferTooSmall {
  /// Bytes required.
  pub required: usize,
  /// Bytes available.
  pub available: usize,
}

impl fmt::Display for BufferTooSmall {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "output buffer too small: need {} bytes, have {}",
      self.required, self.available
    )
  }
}

impl core::error::Error for BufferTooSmall {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(VerificationError::new().to_string(), "digest verification failed");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", VerificationError::new());
    assert_eq!(dbg, "VerificationError");
  }

  #[test]
  fn default_is_new() {
    assert_eq!(VerificationError::default(), VerificationError::new());
  }

  #[test]
  fn parse_error_messages() {
    let len = ParseDigestError::InvalidLength { expected: 32, actual: 31 };
    assert_eq!(len.to_string(), "invalid digest length: expected 32 hex digits, found 31");

    let digit = ParseDigestError::InvalidDigit { index: 7 };
    assert_eq!(digit.to_string(), "invalid hex digit at offset 7");
  }

  #[test]
  fn buffer_too_small_message() {
    let e = BufferTooSmall { required: 128, available: 64 };
    assert_eq!(e.to_string(), "output buffer too small: need 128 bytes, have 64");
  }

  #[test]
  fn errors_are_core_errors() {
    fn assert_error<E: core::error::Error>(_: &E) {}
    assert_error(&VerificationError::new());
    assert_error(&ParseDigestError::InvalidDigit { index: 0 });
    assert_error(&BufferTooSmall { required: 1, available: 0 });
  }
}
