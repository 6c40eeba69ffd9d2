use std::io::{IoSlice, IoSliceMut, Read as _, Write as _};

use fnv1a::{Checksum, Fnv1a32, Fnv1a64, Fnv1a128, Fnv1a256, Fnv1a512, Fnv1a1024, VerificationError, Width};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

fn streaming_invariants<C: Checksum>(name: &str) {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);
      let oneshot = C::checksum(&data);
      assert_eq!(oneshot.as_ref().len(), C::OUTPUT_SIZE, "{name} digest length at len={len}");
      assert_eq!(C::checksum(&data), oneshot, "{name} not deterministic at len={len}");

      // Representative split points.
      for split in [0, len / 3, len / 2, len.saturating_sub(1), len] {
        let (a, b) = data.split_at(split);
        let mut h = C::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "{name} split mismatch at len={len} split={split}");

        let mut resumed = C::with_initial(C::checksum(a));
        resumed.update(b);
        assert_eq!(resumed.finalize(), oneshot, "{name} resume mismatch at len={len} split={split}");
      }

      let mut h = C::new();
      for byte in &data {
        h.update(core::slice::from_ref(byte));
      }
      assert_eq!(h.finalize(), oneshot, "{name} bytewise mismatch at len={len}");

      let third = len / 3;
      let bufs = [&data[..third], &[][..], &data[third..2 * third], &data[2 * third..]];
      assert_eq!(C::checksum_vectored(&bufs), oneshot, "{name} vectored mismatch at len={len}");
    }
  }
}

#[test]
fn fnv1a_32_invariants() {
  streaming_invariants::<Fnv1a32>("fnv1a-32");
}

#[test]
fn fnv1a_64_invariants() {
  streaming_invariants::<Fnv1a64>("fnv1a-64");
}

#[test]
fn fnv1a_128_invariants() {
  streaming_invariants::<Fnv1a128>("fnv1a-128");
}

#[test]
fn fnv1a_256_invariants() {
  streaming_invariants::<Fnv1a256>("fnv1a-256");
}

#[test]
fn fnv1a_512_invariants() {
  streaming_invariants::<Fnv1a512>("fnv1a-512");
}

#[test]
fn fnv1a_1024_invariants() {
  streaming_invariants::<Fnv1a1024>("fnv1a-1024");
}

#[test]
fn empty_update_is_identity() {
  fn check<C: Checksum>() {
    let mut h = C::new();
    h.update(b"abc");
    let before = h.finalize();
    h.update(&[]);
    assert_eq!(h.finalize(), before);
    assert_eq!(C::new().finalize(), C::checksum(&[]));
  }
  check::<Fnv1a32>();
  check::<Fnv1a64>();
  check::<Fnv1a128>();
  check::<Fnv1a256>();
  check::<Fnv1a512>();
  check::<Fnv1a1024>();
}

#[test]
fn reset_discards_absorbed_input() {
  fn check<C: Checksum>() {
    let mut h = C::new();
    h.update(b"discard me");
    h.reset();
    h.update(b"keep");
    assert_eq!(h.finalize(), C::checksum(b"keep"));
  }
  check::<Fnv1a32>();
  check::<Fnv1a64>();
  check::<Fnv1a128>();
  check::<Fnv1a256>();
  check::<Fnv1a512>();
  check::<Fnv1a1024>();
}

#[test]
fn single_byte_flip_changes_digest() {
  fn check<C: Checksum>(name: &str) {
    let data = gen_bytes(64, 7);
    let base = C::checksum(&data);
    for i in 0..data.len() {
      let mut flipped = data.clone();
      flipped[i] ^= 0x01;
      assert_ne!(C::checksum(&flipped), base, "{name} collision after flipping byte {i}");
    }
  }
  check::<Fnv1a32>("fnv1a-32");
  check::<Fnv1a64>("fnv1a-64");
  check::<Fnv1a128>("fnv1a-128");
  check::<Fnv1a256>("fnv1a-256");
  check::<Fnv1a512>("fnv1a-512");
  check::<Fnv1a1024>("fnv1a-1024");
}

#[test]
fn io_slices_match_vectored() {
  let data = gen_bytes(200, 5);
  let (a, b) = data.split_at(77);
  let mut h = Fnv1a256::new();
  h.update_io_slices(&[IoSlice::new(a), IoSlice::new(&[]), IoSlice::new(b)]);
  assert_eq!(h.finalize(), Fnv1a256::checksum_vectored(&[a, b]));
  assert_eq!(h.finalize(), Fnv1a256::checksum(&data));
}

#[test]
fn long_saturated_input_is_stable() {
  // 0xFF bytes flip every low bit of the low limb, stressing the carry chain.
  let data = vec![0xFFu8; 1 << 16];
  let mut h = Fnv1a1024::new();
  for chunk in data.chunks(4093) {
    h.update(chunk);
  }
  assert_eq!(h.finalize(), Fnv1a1024::checksum(&data));
}

#[test]
fn verify_reports_mismatch() {
  let data = b"I am a gopher!";
  let digest = Fnv1a512::checksum(data);
  assert_eq!(Fnv1a512::verify(data, &digest), Ok(()));
  assert_eq!(Fnv1a512::verify(b"I am a gopher?", &digest), Err(VerificationError::new()));
}

#[test]
fn reader_hashes_everything_read() {
  let data = gen_bytes(10_000, 42);
  let mut reader = Fnv1a256::reader(&data[..]);
  let mut sink = Vec::new();
  let mut buf = [0u8; 333];
  loop {
    let n = reader.read(&mut buf).unwrap();
    if n == 0 {
      break;
    }
    sink.extend_from_slice(&buf[..n]);
  }
  assert_eq!(sink, data);
  assert_eq!(reader.digest(), Fnv1a256::checksum(&data));
}

#[test]
fn reader_vectored_hashes_bytes_returned() {
  let data = gen_bytes(1000, 21);
  let mut reader = Fnv1a1024::reader(&data[..]);
  let mut sink = Vec::new();
  let (mut a, mut b) = ([0u8; 100], [0u8; 37]);
  loop {
    let mut bufs = [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)];
    let n = reader.read_vectored(&mut bufs).unwrap();
    if n == 0 {
      break;
    }
    let first = n.min(a.len());
    sink.extend_from_slice(&a[..first]);
    sink.extend_from_slice(&b[..n - first]);
  }
  assert_eq!(sink, data);
  assert_eq!(reader.digest(), Fnv1a1024::checksum(&data));
}

#[test]
fn writer_hashes_everything_written() {
  let data = gen_bytes(5_000, 9);
  let mut writer = Fnv1a128::writer(Vec::new());
  for chunk in data.chunks(77) {
    writer.write_all(chunk).unwrap();
  }
  writer.flush().unwrap();
  let (inner, digest) = writer.into_parts();
  assert_eq!(inner, data);
  assert_eq!(digest, Fnv1a128::checksum(&data));
}

#[test]
fn io_copy_through_writer() {
  let data = gen_bytes(4096, 3);
  let mut writer = Fnv1a64::writer(std::io::sink());
  std::io::copy(&mut &data[..], &mut writer).unwrap();
  assert_eq!(writer.digest(), Fnv1a64::checksum(&data));
}

#[test]
fn width_dispatch_matches_typed_hashers() {
  let data = gen_bytes(300, 11);
  let typed: [Vec<u8>; 6] = [
    Fnv1a32::checksum(&data).to_vec(),
    Fnv1a64::checksum(&data).to_vec(),
    Fnv1a128::checksum(&data).to_vec(),
    Fnv1a256::checksum(&data).to_vec(),
    Fnv1a512::checksum(&data).to_vec(),
    Fnv1a1024::checksum(&data).to_vec(),
  ];
  for (w, expected) in Width::ALL.into_iter().zip(typed) {
    assert_eq!(w.hash_to_vec(&data), expected, "{w} dispatch mismatch");
  }
}

#[test]
fn hashmap_with_fnv1a64() {
  let mut map: std::collections::HashMap<&str, u32, fnv1a::BuildFnv1a64> = Default::default();
  map.insert("alpha", 1);
  map.insert("beta", 2);
  assert_eq!(map.get("alpha"), Some(&1));
  assert_eq!(map.get("beta"), Some(&2));
}
