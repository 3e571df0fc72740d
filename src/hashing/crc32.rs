//! # CRC32
//!
//! Table-driven CRC-32 with the standard reflected polynomial (0xEDB88320),
//! init 0xFFFFFFFF and final XOR 0xFFFFFFFF, as used by Ethernet, ZIP and PNG.
//! The lookup table is computed at compile time.
//!
//! **Note**: CRC is a checksum, not a cryptographic hash.

/// Reversed form of the 802.3 polynomial 0x04C11DB7.
pub const POLYNOMIAL: u32 = 0xEDB88320;
/// Initial register value.
pub const INIT: u32 = 0xFFFF_FFFF;
/// Final XOR value.
pub const FINAL_XOR: u32 = 0xFFFF_FFFF;

static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        // reflected: process LSB to MSB
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            if (crc & 1) != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Returns the CRC-32 of `data`.
pub fn crc32_hash(data: &[u8]) -> u32 {
    let mut crc = INIT;
    for &b in data {
        let idx = (crc ^ (b as u32)) & 0xFF;
        crc = (crc >> 8) ^ TABLE[idx as usize];
    }
    crc ^ FINAL_XOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        // standard CRC-32 check value for "123456789"
        assert_eq!(crc32_hash(b"123456789"), 0xcbf43926);
    }

    #[test]
    fn test_empty() {
        assert_eq!(crc32_hash(b""), 0);
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(TABLE[0], 0);
        assert_eq!(TABLE[1], 0x77073096);
        assert_eq!(TABLE[255], 0x2D02EF8D);
    }
}
