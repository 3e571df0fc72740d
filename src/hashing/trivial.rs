//! # Baseline Hashes
//!
//! Deliberately weak hash functions. They exist to show what a poor
//! distribution looks like next to the real ones: the constant hash piles
//! every key into bucket 0, `first_byte` and `length` only ever reach a
//! handful of buckets, and `byte_sum` clusters around the average word
//! weight. `rol`/`ror` are the classic rotate-and-xor hashes.

/// Always returns zero.
pub fn zero_hash(_data: &[u8]) -> u64 {
    0
}

/// Returns the first byte of `data`, or zero for an empty slice.
pub fn first_byte_hash(data: &[u8]) -> u64 {
    data.first().map_or(0, |&b| b as u64)
}

/// Returns the length of `data`.
pub fn length_hash(data: &[u8]) -> u64 {
    data.len() as u64
}

/// Returns the sum of all bytes.
pub fn byte_sum_hash(data: &[u8]) -> u64 {
    data.iter().map(|&b| b as u64).sum()
}

/// For each byte: rotate the state left by one bit, then xor the byte in.
pub fn rol_hash(data: &[u8]) -> u64 {
    data.iter().fold(0u64, |h, &b| h.rotate_left(1) ^ b as u64)
}

/// For each byte: rotate the state right by one bit, then xor the byte in.
pub fn ror_hash(data: &[u8]) -> u64 {
    data.iter().fold(0u64, |h, &b| h.rotate_right(1) ^ b as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_hashes() {
        assert_eq!(zero_hash(b"anything"), 0);
        assert_eq!(first_byte_hash(b"abc"), b'a' as u64);
        assert_eq!(first_byte_hash(b""), 0);
        assert_eq!(length_hash(b"hello"), 5);
        assert_eq!(byte_sum_hash(b"ab"), 97 + 98);
    }

    #[test]
    fn test_rotations() {
        // "ab": ((0 rol 1) ^ 'a') rol 1 ^ 'b' = (97 << 1) ^ 98
        assert_eq!(rol_hash(b"ab"), (97u64 << 1) ^ 98);
        assert_eq!(ror_hash(b"ab"), 97u64.rotate_right(1) ^ 98);
        // byte sum cannot tell anagrams apart, rotations can
        assert_eq!(byte_sum_hash(b"ab"), byte_sum_hash(b"ba"));
        assert_ne!(rol_hash(b"ab"), rol_hash(b"ba"));
    }
}
