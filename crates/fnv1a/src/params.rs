//! FNV-1a parameters.
//!
//! Offset bases and primes for every supported width, following the
//! definitions published at <http://www.isthe.com/chongo/tech/comp/fnv/>.
//!
//! Every wide FNV prime has the sparse form `2^(32*limb_offset + shift) + low`
//! with `low < 2^32`. Multiplying by it costs one limb-wise scale by `low` plus
//! one shifted add of the low limbs into the high limbs, instead of a full
//! schoolbook product.

/// FNV-1a 32 offset basis.
pub const FNV1A_32_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32 prime, `2^24 + 0x193`.
pub const FNV1A_32_PRIME: u32 = (1 << FNV1A_32_PRIME_EXPONENT) + FNV1A_32_PRIME_LOW;

/// Exponent of the FNV-1a 32 prime's high term.
pub const FNV1A_32_PRIME_EXPONENT: u32 = 24;

/// Low digit of the FNV-1a 32 prime.
pub const FNV1A_32_PRIME_LOW: u32 = 0x193;

/// FNV-1a 64 offset basis.
pub const FNV1A_64_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// FNV-1a 64 prime, `2^40 + 0x1B3`.
pub const FNV1A_64_PRIME: u64 = (1 << FNV1A_64_PRIME_EXPONENT) + FNV1A_64_PRIME_LOW as u64;

/// Exponent of the FNV-1a 64 prime's high term.
pub const FNV1A_64_PRIME_EXPONENT: u32 = 40;

/// Low digit of the FNV-1a 64 prime.
pub const FNV1A_64_PRIME_LOW: u32 = 0x1B3;

/// Parameters of a multi-limb FNV-1a width.
///
/// `L` is the number of 32-bit limbs (`bits / 32`).
///
/// # Parameters
///
/// - `bits`: Digest width in bits (128, 256, 512 or 1024)
/// - `offset_basis`: Initial accumulator, least-significant limb first
/// - `prime_low`: Low digit of the prime
/// - `prime_shift`: Bit position of the high prime bit inside its limb
/// - `limb_offset`: Limb holding the high prime bit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WideParams<const L: usize> {
  /// Width in bits.
  pub bits: u32,
  /// Offset basis as base-2^32 digits, index 0 least significant.
  pub offset_basis: [u32; L],
  /// Low digit of the prime.
  pub prime_low: u32,
  /// Shift of the high prime bit within limb `limb_offset`.
  pub prime_shift: u32,
  /// Index of the limb holding the high prime bit.
  pub limb_offset: usize,
}

impl<const L: usize> WideParams<L> {
  /// Number of 32-bit limbs.
  pub const LIMBS: usize = L;

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    L * 4
  }

  /// Exponent `S` of the prime's high term, `prime = 2^S + prime_low`.
  #[inline]
  #[must_use]
  pub const fn prime_exponent(&self) -> u32 {
    32 * self.limb_offset as u32 + self.prime_shift
  }

  /// Upper bound of a product slot during one multiply step.
  ///
  /// A slot receives `digit * prime_low`, plus `digit << prime_shift` from a
  /// lower limb, plus the carry from the slot below. Carries are bounded by
  /// `(scaled >> 32) + 1`.
  #[must_use]
  pub const fn max_product_slot(&self) -> u128 {
    let digit = u32::MAX as u128;
    let scaled = digit * self.prime_low as u128 + (digit << self.prime_shift);
    scaled + (scaled >> 32) + 1
  }

  /// Whether the parameter set is internally consistent and its multiply step
  /// fits in 64-bit product slots.
  #[must_use]
  pub const fn is_well_formed(&self) -> bool {
    self.bits as usize == L * 32
      && self.prime_shift < 32
      && self.limb_offset >= 1
      && self.limb_offset < L
      && self.prime_low & 1 == 1
      && self.max_product_slot() <= u64::MAX as u128
  }
}

/// FNV-1a 128: prime `2^88 + 0x13B`.
pub const FNV1A_128: WideParams<4> = WideParams {
  bits: 128,
  offset_basis: [0x6295_C58D, 0x62B8_2175, 0x07BB_0142, 0x6C62_272E],
  prime_low: 0x0000_013B,
  prime_shift: 24,
  limb_offset: 2,
};

/// FNV-1a 256: prime `2^168 + 0x163`.
pub const FNV1A_256: WideParams<8> = WideParams {
  bits: 256,
  offset_basis: [
    0xCAEE_0535, 0x1023_B4C8, 0x47B6_BBB3, 0xC8B1_5368, 0xC4E5_76CC, 0x2D98_C384, 0xAAC5_5036, 0xDD26_8DBC,
  ],
  prime_low: 0x0000_0163,
  prime_shift: 8,
  limb_offset: 5,
};

/// FNV-1a 512: prime `2^344 + 0x157`.
pub const FNV1A_512: WideParams<16> = WideParams {
  bits: 512,
  offset_basis: [
    0x4AFE_9FD9, 0xAC98_2AAC, 0x5F56_E34B, 0x1820_3641, 0x42DB_E7CE, 0x2EA7_9BC9, 0x34C1_92F6, 0xE948_F68A,
    0x0000_0D21, 0x0000_0000, 0xC900_0000, 0xAC87_D059, 0x3099_90AC, 0xDCA1_E50F, 0x171F_4416, 0xB86D_B0B1,
  ],
  prime_low: 0x0000_0157,
  prime_shift: 24,
  limb_offset: 10,
};

/// FNV-1a 1024: prime `2^680 + 0x18D`.
///
/// The offset basis is sparse: limbs 9..=20 and the top two limbs are zero,
/// which shows up as long zero runs in digests of short inputs.
pub const FNV1A_1024: WideParams<32> = WideParams {
  bits: 1024,
  offset_basis: [
    0x71EE_90B3, 0xAFF4_B16C, 0xC6A9_3B21, 0x6BDE_8CC9, 0xC005_AE55, 0x555F_256C, 0x2734_510A, 0xEB6E_7380,
    0x0004_C6D7, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
    0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x9A21_D900, 0xDA36_74DA, 0x6C3B_F34E,
    0x23FD_ADA1, 0x4B29_FC42, 0x5910_28B7, 0x32E5_6D5A, 0x758E_CC4D, 0x005F_7A76, 0x0000_0000, 0x0000_0000,
  ],
  prime_low: 0x0000_018D,
  prime_shift: 8,
  limb_offset: 21,
};

const _: () = assert!(FNV1A_128.is_well_formed());
const _: () = assert!(FNV1A_256.is_well_formed());
const _: () = assert!(FNV1A_512.is_well_formed());
const _: () = assert!(FNV1A_1024.is_well_formed());
