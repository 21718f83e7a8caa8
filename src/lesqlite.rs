//! A little endian variant of the SQLite variable length integer coding.
//!
//! The first byte B0 determines the length:
//!
//! * `0-184`: 1 byte, value = B0.
//! * `185-248`: 2 bytes, value = 185 + B1 + 256 * (B0 - 185).
//! * `249-255`: 3-9 bytes, B0 - 249 + 2 little endian bytes following B0.

use bytes::{Buf, BufMut};

use crate::bits::{bit_length, byte_mask, load_u64_le};
use crate::core::require;
use crate::{Codec, DecodeError, FAST_PATH_LEN};

pub(crate) const CUT1: u8 = 185;
pub(crate) const CUT2: u8 = 249;

/// First value that does not fit the 2 byte tier.
pub(crate) const LIMIT1: u64 = CUT1 as u64 + ((CUT2 - CUT1) as u64) * 256;

/// Number of little endian bytes following a top tier B0.
#[inline(always)]
fn top_tail_len(b0: u8) -> usize {
    (b0 - CUT2) as usize + 2
}

/// The leSQLite codec.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LeSqlite;

impl Codec for LeSqlite {
    const NAME: &'static str = "leSQLite";
    const MAX_LEN: usize = 9;

    #[inline]
    fn encoded_len(v: u64) -> usize {
        if v < u64::from(CUT1) {
            1
        } else if v < LIMIT1 {
            2
        } else {
            1 + (bit_length(v) as usize + 7) / 8
        }
    }

    #[inline]
    fn tail_len(tag: u8) -> Option<usize> {
        Some(if tag < CUT1 {
            0
        } else if tag < CUT2 {
            1
        } else {
            top_tail_len(tag)
        })
    }

    #[inline]
    fn put<B: BufMut>(v: u64, buf: &mut B) {
        if v < u64::from(CUT1) {
            buf.put_u8(v as u8);
        } else if v < LIMIT1 {
            let x = v - u64::from(CUT1);
            buf.put_u8(CUT1 + (x >> 8) as u8);
            buf.put_u8(x as u8);
        } else {
            // No offset in the top tier.
            let n = (bit_length(v) as usize + 7) / 8;
            buf.put_u8(CUT2 + (n - 2) as u8);
            buf.put_uint_le(v, n);
        }
    }

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
        let chunk = buf.chunk();
        if chunk.len() >= FAST_PATH_LEN {
            let b0 = chunk[0];
            if b0 < CUT1 {
                buf.advance(1);
                Ok(b0.into())
            } else if b0 < CUT2 {
                let v = u64::from(CUT1) + u64::from(chunk[1]) + (u64::from(b0 - CUT1) << 8);
                buf.advance(2);
                Ok(v)
            } else {
                let n = top_tail_len(b0);
                let v = load_u64_le(&chunk[1..]) & byte_mask(n);
                buf.advance(1 + n);
                Ok(v)
            }
        } else {
            get_slow(buf)
        }
    }
}

fn get_slow<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
    require(buf, 1)?;
    let b0 = buf.get_u8();
    if b0 < CUT1 {
        Ok(b0.into())
    } else if b0 < CUT2 {
        require(buf, 1)?;
        Ok(u64::from(CUT1) + u64::from(buf.get_u8()) + (u64::from(b0 - CUT1) << 8))
    } else {
        let n = top_tail_len(b0);
        require(buf, n)?;
        Ok(buf.get_uint_le(n))
    }
}
