//! Little-endian partial-width word codecs
//!
//! The wire format is little-endian regardless of host endianness; these
//! helpers are the only place byte order is interpreted. Each reader
//! accepts fewer bytes than the word is wide, zero-filling the rest.

/// Read up to 4 bytes as a little-endian u32
pub fn u32_from_le_partial(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4);
    let mut buf = [0u8; 4];
    buf[..bytes.len()].copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

/// Read up to 8 bytes as a little-endian u64
pub fn u64_from_le_partial(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Read up to 16 bytes as a little-endian u128
pub fn u128_from_le_partial(bytes: &[u8]) -> u128 {
    debug_assert!(bytes.len() <= 16);
    let mut buf = [0u8; 16];
    buf[..bytes.len()].copy_from_slice(bytes);
    u128::from_le_bytes(buf)
}

/// Write the low `out.len()` bytes of a u128 in little-endian order
pub fn u128_to_le_partial(value: u128, out: &mut [u8]) {
    debug_assert!(out.len() <= 16);
    let buf = value.to_le_bytes();
    out.copy_from_slice(&buf[..out.len()]);
}
