//! # MurmurHash64A
//!
//! Austin Appleby's 64-bit MurmurHash2 variant for 64-bit platforms. Reads
//! the key eight bytes at a time (little endian), mixes each block into the
//! state, folds the tail in, then finalizes with an avalanche step.
//!
//! **Note**: MurmurHash is **not** cryptographically secure.

const M: u64 = 0xc6a4a7935bd1e995;
const R: u32 = 47;

/// Returns the MurmurHash64A of `data` for the given `seed`.
pub fn murmur64a_hash(data: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        let mut word = [0u8; 8];
        word.copy_from_slice(block);
        let mut k = u64::from_le_bytes(word);

        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        for (i, &b) in tail.iter().enumerate() {
            h ^= (b as u64) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_zero_seed() {
        assert_eq!(murmur64a_hash(b"", 0), 0);
    }

    #[test]
    fn test_seed_changes_output() {
        let a = murmur64a_hash(b"hello world", 0);
        let b = murmur64a_hash(b"hello world", 42);
        assert_ne!(a, b);
        assert_eq!(a, murmur64a_hash(b"hello world", 0));
    }

    #[test]
    fn test_tail_bytes_matter() {
        // 8-byte block plus tails of different lengths
        let base = murmur64a_hash(b"abcdefgh", 0);
        assert_ne!(base, murmur64a_hash(b"abcdefghi", 0));
        assert_ne!(murmur64a_hash(b"abcdefghi", 0), murmur64a_hash(b"abcdefghj", 0));
    }
}
