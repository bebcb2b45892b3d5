//! Canonical bit patterns for hashing and equivalence classes
//!
//! Every NaN collapses to one quiet-NaN pattern and `-0.0` collapses to `+0.0`.
//! Only the hash operators canonicalize; everything else sees raw values.

/// Canonical quiet NaN (`0x7ff8_0000_0000_0000`)
pub const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// Bit pattern of a double after canonicalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalBits(u64);

impl CanonicalBits {
    /// Raw 64-bit pattern
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Little-endian bytes of the pattern
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// The double this pattern encodes
    pub fn to_double(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Canonicalize a double
#[inline]
pub fn canonicalize(value: f64) -> CanonicalBits {
    if value.is_nan() {
        CanonicalBits(CANONICAL_NAN_BITS)
    } else if value == 0.0 {
        CanonicalBits(0)
    } else {
        CanonicalBits(value.to_bits())
    }
}
