//! Hash two fixed strings at every FNV-1a width and print the digests.
//!
//! Run with: `cargo run -p fnv1a --example demo`

use fnv1a::{BigEndianHex, Checksum, Fnv1a256, Width};

const INPUTS: [&[u8]; 2] = [b"hello world!goodbye!", b"I am a gopher!"];

fn main() {
  println!("=== FNV-1a Digests ===\n");

  for input in INPUTS {
    println!("input: {:?}", String::from_utf8_lossy(input));
    for w in Width::ALL {
      let digest = w.hash_to_vec(input);
      println!("  {:<10} {}", w.to_string(), BigEndianHex(&digest));
    }
    println!();
  }

  streaming_example();
  describe_widths();
}

/// Chunked input gives the same digest as one-shot.
fn streaming_example() {
  println!("--- Streaming ---\n");

  let mut h = Fnv1a256::new();
  h.update(b"hello world!");
  h.update(b"goodbye!");
  let digest = h.finalize();
  assert_eq!(digest, Fnv1a256::checksum(INPUTS[0]));
  println!("  fnv1a-256 in two chunks: {}\n", BigEndianHex(&digest));
}

fn describe_widths() {
  println!("--- Parameters ---\n");
  for w in Width::ALL {
    println!("  {}", w.describe());
  }
}
