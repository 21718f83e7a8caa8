//! Bit twiddling and little endian load helpers shared by the codecs.
//!
//! Loads assemble values byte by byte from a slice; the compiler turns these into single
//! unaligned loads where the target allows it.

/// Count the number of contiguous zero bits starting from the MSB.
///
/// `x` must not be 0. Callers OR in a low bit where the value could be 0.
#[inline(always)]
pub const fn count_leading_zeros(x: u64) -> u32 {
    debug_assert!(x != 0);
    x.leading_zeros()
}

/// Count the number of contiguous zero bits starting from the LSB.
///
/// `x` must not be 0. Callers decoding a first byte OR in `0x100` so the result is at most 8.
#[inline(always)]
pub const fn count_trailing_zeros(x: u32) -> u32 {
    debug_assert!(x != 0);
    x.trailing_zeros()
}

/// Number of significant bits in `x`, counting 0 as a 1 bit value.
#[inline(always)]
pub const fn bit_length(x: u64) -> u32 {
    64 - count_leading_zeros(x | 1)
}

/// Load a little endian `u64` from the first 8 bytes of `p`.
///
/// # Panics
///
/// If `p.len() < 8`.
#[inline(always)]
pub fn load_u64_le(p: &[u8]) -> u64 {
    let p = &p[..8];
    u64::from_le_bytes([p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]])
}

/// Load a little endian `u16` from the first 2 bytes of `p`.
///
/// # Panics
///
/// If `p.len() < 2`.
#[inline(always)]
pub fn load_u16_le(p: &[u8]) -> u16 {
    let p = &p[..2];
    u16::from_le_bytes([p[0], p[1]])
}

/// Load a little endian unsigned value from the first `n` bytes of `p`, `n <= 8`.
///
/// # Panics
///
/// If `p.len() < n`.
#[inline]
pub fn load_uint_le(p: &[u8], n: usize) -> u64 {
    debug_assert!(n <= 8);
    p[..n]
        .iter()
        .rev()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

/// Mask selecting the low `n` bytes of a `u64`, `1 <= n <= 8`.
#[inline(always)]
pub const fn byte_mask(n: usize) -> u64 {
    u64::MAX >> (64 - 8 * n)
}
