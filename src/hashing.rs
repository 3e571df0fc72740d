//! Hash functions under test.
//!
//! This module provides the capability the table hashes through and a catalog of
//! concrete functions to benchmark against each other:
//! - Degenerate baselines (constant, first byte, length, byte sum)
//! - Rotate-and-xor hashes (`rol`, `ror`)
//! - Checksum style (CRC32)
//! - Multiplicative hashes (FNV-1, FNV-1a, polynomial rolling)
//! - Mixing hashes (Jenkins one-at-a-time, MurmurHash64A)
//!
//! Every function is a pure `&[u8] -> u64` transform. The table never looks
//! inside one; it only reduces the result modulo its bucket count.
//!
//! # Examples
//!
//! ```rust
//! use hashbench::hashing::{Algorithm, HashFunction};
//!
//! let h = Algorithm::Crc32.hash(b"123456789");
//! assert_eq!(h, 0xcbf43926);
//! assert_eq!("crc32".parse::<Algorithm>().unwrap(), Algorithm::Crc32);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub mod crc32;
pub mod fnv;
pub mod jenkins;
pub mod murmurhash;
pub mod polynomial_rolling;
pub mod trivial;

pub use crc32::crc32_hash;
pub use fnv::{fnv64_hash, fnv64a_hash};
pub use jenkins::jenkins_hash;
pub use murmurhash::murmur64a_hash;
pub use polynomial_rolling::polynomial_hash;
pub use trivial::{byte_sum_hash, first_byte_hash, length_hash, rol_hash, ror_hash, zero_hash};

/// A deterministic, side-effect free transform from bytes to a 64-bit value.
pub trait HashFunction {
    /// Hash the given bytes.
    fn hash(&self, bytes: &[u8]) -> u64;
}

impl HashFunction for fn(&[u8]) -> u64 {
    fn hash(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn hash(&self, bytes: &[u8]) -> u64 {
        (**self).hash(bytes)
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Box<H> {
    fn hash(&self, bytes: &[u8]) -> u64 {
        (**self).hash(bytes)
    }
}

/// The catalog of built-in hash functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Always zero; every key collides.
    Zero,
    /// Value of the first byte.
    FirstByte,
    /// Length of the key.
    Length,
    /// Sum of all bytes.
    ByteSum,
    /// Rotate left by one, xor next byte.
    Rol,
    /// Rotate right by one, xor next byte.
    Ror,
    /// Standard reflected CRC-32.
    Crc32,
    /// 64-bit FNV-1
    Fnv1,
    /// 64-bit FNV-1a
    Fnv1a,
    /// Polynomial rolling hash, base 257 modulo 2^61 - 1.
    Polynomial,
    /// Jenkins one-at-a-time.
    Jenkins,
    /// MurmurHash64A with a zero seed.
    Murmur,
}

impl Algorithm {
    /// Every algorithm, in the order reports list them.
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Zero,
        Algorithm::FirstByte,
        Algorithm::Length,
        Algorithm::ByteSum,
        Algorithm::Rol,
        Algorithm::Ror,
        Algorithm::Crc32,
        Algorithm::Fnv1,
        Algorithm::Fnv1a,
        Algorithm::Polynomial,
        Algorithm::Jenkins,
        Algorithm::Murmur,
    ];

    /// Label used in reports and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Zero => "zero",
            Algorithm::FirstByte => "first_byte",
            Algorithm::Length => "length",
            Algorithm::ByteSum => "byte_sum",
            Algorithm::Rol => "rol",
            Algorithm::Ror => "ror",
            Algorithm::Crc32 => "crc32",
            Algorithm::Fnv1 => "fnv1",
            Algorithm::Fnv1a => "fnv1a",
            Algorithm::Polynomial => "polynomial",
            Algorithm::Jenkins => "jenkins",
            Algorithm::Murmur => "murmur",
        }
    }
}

impl HashFunction for Algorithm {
    fn hash(&self, bytes: &[u8]) -> u64 {
        match self {
            Algorithm::Zero => zero_hash(bytes),
            Algorithm::FirstByte => first_byte_hash(bytes),
            Algorithm::Length => length_hash(bytes),
            Algorithm::ByteSum => byte_sum_hash(bytes),
            Algorithm::Rol => rol_hash(bytes),
            Algorithm::Ror => ror_hash(bytes),
            Algorithm::Crc32 => crc32_hash(bytes) as u64,
            Algorithm::Fnv1 => fnv64_hash(bytes),
            Algorithm::Fnv1a => fnv64a_hash(bytes),
            Algorithm::Polynomial => polynomial_hash(bytes),
            Algorithm::Jenkins => jenkins_hash(bytes) as u64,
            Algorithm::Murmur => murmur64a_hash(bytes, 0),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument(format!("unknown hash algorithm `{s}`")))
    }
}
