//! # FNV Hash
//!
//! 64-bit FNV-1 and FNV-1a (Fowler–Noll–Vo). A simple multiplicative hash
//! that spreads short text keys well for its cost.
//!
//! **Note**: FNV is not cryptographically secure.

/// Offset basis and prime for 64-bit FNV-1 or FNV-1a.
const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Returns a 64-bit FNV-1a hash of `data`.
pub fn fnv64a_hash(data: &[u8]) -> u64 {
    let mut state = FNV64_OFFSET_BASIS;
    for &b in data {
        // FNV-1a: xor first, then multiply
        state ^= b as u64;
        state = state.wrapping_mul(FNV64_PRIME);
    }
    state
}

/// Returns a 64-bit FNV-1 hash of `data`.
pub fn fnv64_hash(data: &[u8]) -> u64 {
    let mut state = FNV64_OFFSET_BASIS;
    for &b in data {
        state = state.wrapping_mul(FNV64_PRIME);
        state ^= b as u64;
    }
    state
}
