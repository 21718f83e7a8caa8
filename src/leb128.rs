//! Little Endian Base 128: 7 value bits per byte, least significant group first, with bit 7 set
//! on every byte except the last.
//!
//! For example, 300 encodes as `[0xAC, 0x02]`.

use bytes::{Buf, BufMut};

use crate::bits::bit_length;
use crate::core::require;
use crate::{Codec, DecodeError};

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Shift of the last group that still lands inside a `u64`. That group may only carry bit 63.
const LAST_SHIFT: u32 = 63;

/// The LEB128 codec.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Leb128;

impl Codec for Leb128 {
    const NAME: &'static str = "LEB128";
    const MAX_LEN: usize = 10;

    #[inline]
    fn encoded_len(v: u64) -> usize {
        (bit_length(v) as usize + 6) / 7
    }

    #[inline]
    fn tail_len(_tag: u8) -> Option<usize> {
        None
    }

    #[inline]
    fn put<B: BufMut>(mut v: u64, buf: &mut B) {
        while v > u64::from(PAYLOAD_MASK) {
            buf.put_u8(v as u8 | CONTINUATION);
            v >>= 7;
        }
        buf.put_u8(v as u8);
    }

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Result<u64, DecodeError> {
        require(buf, 1)?;
        let byte = buf.get_u8();
        if byte < CONTINUATION {
            return Ok(byte.into());
        }
        get_multibyte(byte, buf)
    }
}

/// Decodes the continuation bytes of a value whose first byte `first` had bit 7 set.
fn get_multibyte<B: Buf>(first: u8, buf: &mut B) -> Result<u64, DecodeError> {
    let mut value = u64::from(first & PAYLOAD_MASK);
    let mut shift = 7;
    loop {
        require(buf, 1)?;
        let byte = buf.get_u8();
        if shift == LAST_SHIFT && byte > 1 {
            return Err(DecodeError::Overflow);
        }
        value |= u64::from(byte & PAYLOAD_MASK) << shift;
        if byte < CONTINUATION {
            return Ok(value);
        }
        shift += 7;
    }
}
