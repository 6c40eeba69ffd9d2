//! Streaming hash trait.
//!
//! Trait for non-cryptographic hashes whose whole state is the running digest,
//! such as the FNV-1a family.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data
//! - **Resumable**: A previously emitted digest restarts the computation

use core::fmt::Debug;

use crate::VerificationError;

/// Non-cryptographic streaming hash.
///
/// Provides the core interface for digest computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use fnv1a::{Checksum, Fnv1a256};
///
/// // One-shot (fastest for data already in memory)
/// let digest = Fnv1a256::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Fnv1a256::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), digest);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - `with_initial(h.finalize())` must continue exactly where `h` left off
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - FNV-1a 32: 4
  /// - FNV-1a 256: 32
  /// - FNV-1a 1024: 128
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Always a little-endian byte array of `OUTPUT_SIZE` bytes.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously emitted digest.
  ///
  /// Useful for continuing a computation across process boundaries: only the
  /// digest needs to be persisted.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Recompute the digest of `data` and compare it against `expected`.
  ///
  /// `expected` must be in the little-endian exchange order produced by
  /// [`finalize`](Self::finalize).
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the digests differ.
  #[inline]
  fn verify(data: &[u8], expected: &Self::Output) -> Result<(), VerificationError> {
    if Self::checksum(data) == *expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }

  /// Wrap a reader to compute the digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use fnv1a::{Checksum, Fnv1a128};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Fnv1a128::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("FNV-1a 128: {}", fnv1a::BigEndianHex(&reader.digest()));
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use fnv1a::{Checksum, Fnv1a128};
  /// use std::fs::File;
  ///
  /// let file = File::create("output.bin")?;
  /// let mut writer = Fnv1a128::writer(file);
  /// writer.write_all(b"hello world")?;
  /// let (file, digest) = writer.into_parts();
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Default)]
  struct Sum([u8; 2]);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 2;
    type Output = [u8; 2];

    fn new() -> Self {
      Self([0; 2])
    }

    fn with_initial(initial: Self::Output) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      let mut v = u16::from_le_bytes(self.0);
      for &b in data {
        v = v.wrapping_add(u16::from(b));
      }
      self.0 = v.to_le_bytes();
    }

    fn finalize(&self) -> Self::Output {
      self.0
    }

    fn reset(&mut self) {
      self.0 = [0; 2];
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum::checksum_vectored(&[b"ab", b"", b"c"]), Sum::checksum(b"abc"));
  }

  #[test]
  fn verify_accepts_match_and_rejects_mismatch() {
    let good = Sum::checksum(b"payload");
    assert_eq!(Sum::verify(b"payload", &good), Ok(()));
    assert_eq!(Sum::verify(b"payloaD", &good), Err(VerificationError::new()));
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_vectored() {
    use std::io::IoSlice;

    let mut h = Sum::new();
    h.update_io_slices(&[IoSlice::new(b"ab"), IoSlice::new(b""), IoSlice::new(b"cd")]);
    assert_eq!(h.finalize(), Sum::checksum_vectored(&[b"ab", b"cd"]));
  }

  #[test]
  fn with_initial_resumes() {
    let mut h = Sum::with_initial(Sum::checksum(b"ab"));
    h.update(b"cd");
    assert_eq!(h.finalize(), Sum::checksum(b"abcd"));
  }
}
