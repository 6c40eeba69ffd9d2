//! Fuzz target for the streaming API.
//!
//! Arbitrary chunkings, resumes from intermediate digests and vectored
//! updates must all agree with the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use fnv1a::{Checksum, Fnv1a32, Fnv1a64, Fnv1a128, Fnv1a256, Fnv1a512, Fnv1a1024};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Byte offset at which to finalize and resume
  resume_at: usize,
}

fuzz_target!(|input: Input| {
  test_streaming::<Fnv1a32>("fnv1a-32", &input);
  test_streaming::<Fnv1a64>("fnv1a-64", &input);
  test_streaming::<Fnv1a128>("fnv1a-128", &input);
  test_streaming::<Fnv1a256>("fnv1a-256", &input);
  test_streaming::<Fnv1a512>("fnv1a-512", &input);
  test_streaming::<Fnv1a1024>("fnv1a-1024", &input);
});

fn chunks<'a>(data: &'a [u8], chunk_sizes: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    out.push(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
  out
}

fn test_streaming<C: Checksum>(name: &str, input: &Input) {
  let data = &input.data;
  let expected = C::checksum(data);
  let pieces = chunks(data, &input.chunk_sizes);

  let mut hasher = C::new();
  for piece in &pieces {
    hasher.update(piece);
  }
  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");

  assert_eq!(C::checksum_vectored(&pieces), expected, "{name} vectored mismatch");

  let split = input.resume_at % (data.len() + 1);
  let (head, tail) = data.split_at(split);
  let mut resumed = C::with_initial(C::checksum(head));
  resumed.update(tail);
  assert_eq!(resumed.finalize(), expected, "{name} resume mismatch at {split}");
}
