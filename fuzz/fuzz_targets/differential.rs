//! Differential fuzzing against reference implementations.
//!
//! The 64-bit width is compared with the `fnv` crate and every limb width
//! with a `num-bigint` evaluation of `((h ^ b) * p) mod 2^W`.

#![no_main]

use core::hash::Hasher as _;

use fnv1a::{Checksum, Fnv1a64, Fnv1a128, Fnv1a256, Fnv1a512, Fnv1a1024};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

// Limb multiplies are the slow path; keep iterations fast.
const MAX_WIDE_LEN: usize = 1024;

fuzz_target!(|data: &[u8]| {
  test_fnv1a_64_differential(data);

  let data = &data[..data.len().min(MAX_WIDE_LEN)];
  test_wide_differential::<Fnv1a128>(data, 128, 88, 0x13B);
  test_wide_differential::<Fnv1a256>(data, 256, 168, 0x163);
  test_wide_differential::<Fnv1a512>(data, 512, 344, 0x157);
  test_wide_differential::<Fnv1a1024>(data, 1024, 680, 0x18D);
});

fn test_fnv1a_64_differential(data: &[u8]) {
  let ours = Fnv1a64::hash_const(data);
  let mut reference = fnv::FnvHasher::default();
  reference.write(data);
  let reference = reference.finish();

  assert_eq!(
    ours,
    reference,
    "FNV-1a 64 differential mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
    data.len()
  );
  assert_eq!(Fnv1a64::checksum(data), ours.to_le_bytes(), "FNV-1a 64 const/streaming mismatch");
}

fn test_wide_differential<C: Checksum>(data: &[u8], bits: u32, exponent: u32, low: u32) {
  let modulus = BigUint::from(1u8) << bits;
  let prime = (BigUint::from(1u8) << exponent) + BigUint::from(low);

  // The empty digest is the offset basis, checked separately by the vector tests.
  let mut h = BigUint::from_bytes_le(C::new().finalize().as_ref());
  for &b in data {
    h ^= BigUint::from(b);
    h = (h * &prime) % &modulus;
  }
  let mut reference = h.to_bytes_le();
  reference.resize(bits as usize / 8, 0);

  let ours = C::checksum(data);
  assert_eq!(ours.as_ref(), &reference[..], "FNV-1a {bits} differential mismatch, len={}", data.len());
}
