//! # Jenkins "One-At-A-Time" Hash
//!
//! Bob Jenkins' one-at-a-time hash with a **32-bit** state. The table
//! zero-extends the result to 64 bits.
//!
//! **Note**: not cryptographically secure.

/// Computes Jenkins's one-at-a-time hash of `data`.
pub fn jenkins_hash(data: &[u8]) -> u32 {
    let mut h: u32 = 0;
    for &c in data {
        h = h.wrapping_add(c as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // Published test vector for one-at-a-time.
        assert_eq!(jenkins_hash(b"a"), 0xca2e9442);
        assert_eq!(
            jenkins_hash(b"The quick brown fox jumps over the lazy dog"),
            0x519e91f5
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(jenkins_hash(b""), 0);
    }
}
