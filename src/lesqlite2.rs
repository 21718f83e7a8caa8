//! A second little endian variant of the SQLite variable length integer coding.
//!
//! The first byte B0 determines the length:
//!
//! * `[0; CUT1[`: 1 byte, value = B0.
//! * `[CUT1; CUT2[`: 2 bytes, first byte provides 6 high bits.
//! * `[CUT2; CUT3[`: 3 bytes, first byte provides 3 high bits.
//! * `[CUT3; 255]`: 4-9 bytes, first byte provides length.
//!
//! The 2 and 3 byte tiers are offset so that every code maps to exactly one value. The 4+ byte
//! tier stores the value verbatim and is not bijective.

use bytes::{Buf, BufMut};

use crate::bits::{bit_length, byte_mask, load_u16_le, load_u64_le};
use crate::core::require;
use crate::{Codec, DecodeError, FAST_PATH_LEN};

pub(crate) const CUT1: u8 = 178;
pub(crate) const CUT2: u8 = 242;
/// Total length is B0 - CUT3 + 4 bytes.
pub(crate) const CUT3: u8 = 250;

pub(crate) const OFFSET1: u64 = CUT1 as u64;
pub(crate) const LIMIT1: u64 = OFFSET1 + (1 << 14);

pub(crate) const OFFSET2: u64 = LIMIT1;
pub(crate) const LIMIT2: u64 = OFFSET2 + (1 << 19);

const _: () = assert!(CUT2 - CUT1 == 64, "B0 provides 6 bits");
const _: () = assert!(CUT3 - CUT2 == 8, "B0 provides 3 bits");

/// Number of little endian bytes following a top tier B0.
#[inline(always)]
fn top_tail_len(b0: u8) -> usize {
    (b0 - CUT3) as usize + 3
}

/// The leSQLite2 codec.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LeSqlite2;

impl Codec for LeSqlite2 {
    const NAME: &'static str = "leSQLite2";
    const MAX_LEN: usize = 9;

    #[inline]
    fn encoded_len(v: u64) -> usize {
        if v < OFFSET1 {
            1
        } else if v < LIMIT1 {
            2
        } else if v < LIMIT2 {
            3
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
        } else if tag < CUT3 {
            2
        } else {
            top_tail_len(tag)
        })
    }

    #[inline]
    fn put<B: BufMut>(v: u64, buf: &mut B) {
        if v < OFFSET1 {
            buf.put_u8(v as u8);
        } else if v < LIMIT1 {
            // 2 bytes encode 14 bits.
            let x = v - OFFSET1;
            buf.put_u8(CUT1 + (x >> 8) as u8);
            buf.put_u8(x as u8);
        } else if v < LIMIT2 {
            // 3 bytes encode 19 bits.
            let x = v - OFFSET2;
            buf.put_u8(CUT2 + (x >> 16) as u8);
            buf.put_u16_le(x as u16);
        } else {
            let n = (bit_length(v) as usize + 7) / 8;
            buf.put_u8(CUT3 + (n - 3) as u8);
            buf.put_uint_le(v, n);
        }
    }

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
        let chunk = buf.chunk();
        if chunk.len() < FAST_PATH_LEN {
            return get_slow(buf);
        }
        let b0 = chunk[0];
        let (v, len) = if b0 < CUT1 {
            (u64::from(b0), 1)
        } else if b0 < CUT2 {
            (OFFSET1 + u64::from(chunk[1]) + (u64::from(b0 - CUT1) << 8), 2)
        } else if b0 < CUT3 {
            let low = u64::from(load_u16_le(&chunk[1..]));
            (OFFSET2 + low + (u64::from(b0 - CUT2) << 16), 3)
        } else {
            let n = top_tail_len(b0);
            (load_u64_le(&chunk[1..]) & byte_mask(n), 1 + n)
        };
        buf.advance(len);
        Ok(v)
    }
}

fn get_slow<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
    require(buf, 1)?;
    let b0 = buf.get_u8();
    if b0 < CUT1 {
        Ok(b0.into())
    } else if b0 < CUT2 {
        require(buf, 1)?;
        Ok(OFFSET1 + u64::from(buf.get_u8()) + (u64::from(b0 - CUT1) << 8))
    } else if b0 < CUT3 {
        require(buf, 2)?;
        Ok(OFFSET2 + u64::from(buf.get_u16_le()) + (u64::from(b0 - CUT2) << 16))
    } else {
        let n = top_tail_len(b0);
        require(buf, n)?;
        Ok(buf.get_uint_le(n))
    }
}
