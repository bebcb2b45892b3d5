//! Hash Operators for DOUBLE
//!
//! Implements: HashCode, XxHash64
//!
//! Both hash the canonical bits, so every NaN pattern hashes alike and so do
//! `+0.0` and `-0.0`.

use crate::operators::canonical::canonicalize;
use xxhash_rust::xxh64::xxh64;

const MIX_MULTIPLIER: u64 = 0xC2B2_AE3D_27D4_EB4F;
const MIX_FINALIZER: u64 = 0x9E37_79B1_85EB_CA87;

/// General identity hash
#[inline]
pub fn hash_code(value: f64) -> u64 {
    canonicalize(value)
        .bits()
        .wrapping_mul(MIX_MULTIPLIER)
        .rotate_left(31)
        .wrapping_mul(MIX_FINALIZER)
}

/// XXH64 (seed 0) of the canonical bits in little-endian order
#[inline]
pub fn xx_hash_64(value: f64) -> u64 {
    xxh64(&canonicalize(value).to_le_bytes(), 0)
}
