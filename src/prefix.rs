//! PrefixVarint: a unary length prefix in the low bits of the first byte.
//!
//! A value of `len` bytes (1..=8) stores `len - 1` zero bits followed by a one bit at the bottom
//! of the first byte, and the value bits above them, little endian. Values needing more than 56
//! bits are written as a 0x00 marker followed by the full little endian `u64`.

use bytes::{Buf, BufMut};

use crate::bits::{bit_length, count_trailing_zeros, load_u64_le};
use crate::core::require;
use crate::{Codec, DecodeError, FAST_PATH_LEN};

/// Largest number of value bits that fit in the unary-prefixed forms.
const MAX_PREFIXED_BITS: u32 = 56;

/// Length of the marker form used for values wider than `MAX_PREFIXED_BITS`.
const MARKER_LEN: usize = 9;

const fn len_slow(bits: u32) -> usize {
    if bits > MAX_PREFIXED_BITS {
        MARKER_LEN
    } else {
        1 + (bits as usize - 1) / 7
    }
}

const fn compute_len_table() -> [u8; 65] {
    let mut tbl = [0u8; 65];
    let mut bits = 1;
    while bits < tbl.len() {
        tbl[bits] = len_slow(bits as u32) as u8;
        bits += 1;
    }
    tbl
}

/// Encoded length indexed by bit length.
const LEN_TABLE: [u8; 65] = compute_len_table();

/// Total encoded length declared by the first byte `tag`.
#[inline(always)]
fn prefix_len(tag: u8) -> usize {
    1 + count_trailing_zeros(u32::from(tag) | 0x100) as usize
}

/// The PrefixVarint codec.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixVarint;

impl Codec for PrefixVarint {
    const NAME: &'static str = "PrefixVarint";
    const MAX_LEN: usize = MARKER_LEN;

    #[inline]
    fn encoded_len(v: u64) -> usize {
        LEN_TABLE[bit_length(v) as usize] as usize
    }

    #[inline]
    fn tail_len(tag: u8) -> Option<usize> {
        Some(prefix_len(tag) - 1)
    }

    #[inline]
    fn put<B: BufMut>(v: u64, buf: &mut B) {
        let len = Self::encoded_len(v);
        if len < MARKER_LEN {
            buf.put_uint_le(((v << 1) | 1) << (len - 1), len);
        } else {
            buf.put_u8(0);
            buf.put_u64_le(v);
        }
    }

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
        let chunk = buf.chunk();
        if chunk.len() >= FAST_PATH_LEN {
            let tag = chunk[0];
            if tag & 1 != 0 {
                buf.advance(1);
                return Ok((tag >> 1).into());
            }
            let len = prefix_len(tag);
            let v = if len < MARKER_LEN {
                let unused = 64 - 8 * len;
                load_u64_le(chunk) << unused >> (unused + len)
            } else {
                load_u64_le(&chunk[1..])
            };
            buf.advance(len);
            return Ok(v);
        }
        get_slow(buf)
    }
}

/// Decodes a value near the end of a chunk, reading only the bytes the value declares.
fn get_slow<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
    require(buf, 1)?;
    let tag = buf.get_u8();
    if tag & 1 != 0 {
        return Ok((tag >> 1).into());
    }
    let len = prefix_len(tag);
    require(buf, len - 1)?;
    if len < MARKER_LEN {
        let raw = u64::from(tag) | (buf.get_uint_le(len - 1) << 8);
        Ok(raw >> len)
    } else {
        Ok(buf.get_u64_le())
    }
}
