//! # Polynomial Rolling Hash
//!
//! `h = (h * base + byte) mod modulus` over every byte of the key, the same
//! hash Rabin-Karp rolls over a text window. The defaults pick base 257 (just
//! above the byte alphabet) and the Mersenne prime 2^61 - 1 as modulus.
//!
//! **Note**: not cryptographically secure.

use crate::hashing::HashFunction;

/// Default base (multiplier), just above the byte alphabet.
pub const DEFAULT_BASE: u64 = 257;
/// Default modulus: 2^61 - 1, a Mersenne prime.
pub const DEFAULT_MODULUS: u64 = 0x1FFFFFFFFFFFFFFF;

/// A polynomial hash with a configurable base and modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialHash {
    base: u64,
    modulus: u64,
}

impl Default for PolynomialHash {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolynomialHash {
    /// Creates a hash with the default base and modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    ///
    /// # Panics
    /// - if `base <= 1`.
    pub fn with_base(mut self, base: u64) -> Self {
        assert!(base > 1, "base must be > 1");
        self.base = base;
        self
    }

    /// Sets the modulus. Must be < 2^63 so the 128-bit intermediate stays exact.
    ///
    /// # Panics
    /// - if `modulus <= 1` or `modulus >= 2^63`.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        assert!(modulus > 1, "modulus must be > 1");
        assert!(modulus < 1 << 63, "modulus must be < 2^63");
        self.modulus = modulus;
        self
    }

    /// Hashes `data` in one shot. The result is in `[0, modulus)`.
    pub fn hash_slice(&self, data: &[u8]) -> u64 {
        data.iter().fold(0u64, |h, &b| {
            add_mod(mul_mod(h, self.base, self.modulus), b as u64 % self.modulus, self.modulus)
        })
    }
}

impl HashFunction for PolynomialHash {
    fn hash(&self, bytes: &[u8]) -> u64 {
        self.hash_slice(bytes)
    }
}

/// Polynomial hash of `data` with the default parameters.
pub fn polynomial_hash(data: &[u8]) -> u64 {
    PolynomialHash::new().hash_slice(data)
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a.wrapping_add(b);
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
