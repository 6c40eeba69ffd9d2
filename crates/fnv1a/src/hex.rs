//! Big-endian hex display of little-endian digests.
//!
//! Digests are exchanged little-endian, but FNV values are conventionally
//! printed as one big number, most significant byte first. These helpers do
//! the reversal so callers never print raw digest bytes in the wrong order.

use core::fmt;

use traits::ParseDigestError;

/// Formats a little-endian digest as big-endian hex without allocating.
///
/// # Examples
///
/// ```
/// use fnv1a::BigEndianHex;
///
/// let digest = fnv1a::hash_32(b"hello world!goodbye!");
/// assert_eq!(format!("{}", BigEndianHex(&digest)), "113baa28");
/// assert_eq!(format!("{:X}", BigEndianHex(&digest)), "113BAA28");
/// ```
#[derive(Clone, Copy)]
pub struct BigEndianHex<'a>(pub &'a [u8]);

impl BigEndianHex<'_> {
  fn write(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
    for byte in self.0.iter().rev() {
      if upper {
        write!(f, "{byte:02X}")?;
      } else {
        write!(f, "{byte:02x}")?;
      }
    }
    Ok(())
  }
}

impl fmt::Display for BigEndianHex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.write(f, false)
  }
}

impl fmt::LowerHex for BigEndianHex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    self.write(f, false)
  }
}

impl fmt::UpperHex for BigEndianHex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    self.write(f, true)
  }
}

impl fmt::Debug for BigEndianHex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.write(f, false)
  }
}

/// Render a little-endian digest as lowercase big-endian hex.
#[cfg(feature = "alloc")]
#[must_use]
pub fn to_be_hex(digest: &[u8]) -> alloc::string::String {
  use alloc::string::ToString;
  BigEndianHex(digest).to_string()
}

#[inline]
const fn nibble(c: u8) -> Option<u8> {
  match c {
    b'0'..=b'9' => Some(c - b'0'),
    b'a'..=b'f' => Some(c - b'a' + 10),
    b'A'..=b'F' => Some(c - b'A' + 10),
    _ => None,
  }
}

/// Parse a big-endian hex display string into a little-endian digest.
///
/// Accepts an optional `0x`/`0X` prefix and either letter case. Exactly
/// `2 * N` hex digits are required; leading zeros are significant.
///
/// # Errors
///
/// Returns [`ParseDigestError::InvalidLength`] when the digit count is wrong
/// and [`ParseDigestError::InvalidDigit`] on the first non-hex character.
///
/// # Examples
///
/// ```
/// let digest: [u8; 4] = fnv1a::parse_be_hex("0x113baa28")?;
/// assert_eq!(digest, fnv1a::hash_32(b"hello world!goodbye!"));
/// # Ok::<(), fnv1a::ParseDigestError>(())
/// ```
pub fn parse_be_hex<const N: usize>(s: &str) -> Result<[u8; N], ParseDigestError> {
  let digits = s
    .strip_prefix("0x")
    .or_else(|| s.strip_prefix("0X"))
    .unwrap_or(s)
    .as_bytes();

  if digits.len() != 2 * N {
    return Err(ParseDigestError::InvalidLength {
      expected: 2 * N,
      actual: digits.len(),
    });
  }

  let mut out = [0u8; N];
  // Pair k (from the left) is the most significant remaining byte, so it
  // lands at index N - 1 - k.
  for ((k, pair), slot) in digits.chunks_exact(2).enumerate().zip(out.iter_mut().rev()) {
    let (hi, lo) = match *pair {
      [hi, lo] => (hi, lo),
      _ => return Err(ParseDigestError::InvalidDigit { index: 2 * k }),
    };
    let hi = nibble(hi).ok_or(ParseDigestError::InvalidDigit { index: 2 * k })?;
    let lo = nibble(lo).ok_or(ParseDigestError::InvalidDigit { index: 2 * k + 1 })?;
    *slot = (hi << 4) | lo;
  }
  Ok(out)
}
