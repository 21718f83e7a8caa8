//! Extensions to `std::io` traits to support reading/writing values of any `Codec`.
use std::io::{BufRead, Error, ErrorKind, Read, Result, Write};

use crate::{Codec, DecodeError, MAX_LEN};

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        let kind = match value {
            DecodeError::TruncatedInput => ErrorKind::UnexpectedEof,
            DecodeError::Overflow => ErrorKind::InvalidData,
        };
        Error::new(kind, value)
    }
}

/// Code a value with `C` and write it to `w`. Returns the number of bytes written.
#[inline]
pub fn write_varint<C: Codec>(v: u64, w: &mut impl Write) -> Result<usize> {
    let v = C::to_varint_bytes(v);
    w.write_all(v.as_slice())?;
    Ok(v.len())
}

/// Read and decode a value coded with `C` from `r`.
///
/// Reads exactly the bytes of one value. Prefer `read_varint_buf()` wherever possible as it
/// should be more efficient.
pub fn read_varint<C: Codec>(r: &mut impl Read) -> Result<u64> {
    let mut buf = [0u8; MAX_LEN];
    r.read_exact(&mut buf[..1])?;
    let len = match C::tail_len(buf[0]) {
        Some(tail) => {
            r.read_exact(&mut buf[1..=tail])?;
            1 + tail
        }
        None => {
            // Continuation coded: keep reading until a byte with bit 7 clear.
            let mut len = 1;
            while buf[len - 1] & 0x80 != 0 {
                if len == C::MAX_LEN {
                    return Err(DecodeError::Overflow.into());
                }
                r.read_exact(&mut buf[len..=len])?;
                len += 1;
            }
            len
        }
    };
    let mut encoded = &buf[..len];
    Ok(C::get(&mut encoded)?)
}

/// Read and decode a value coded with `C` from `r`.
#[inline]
pub fn read_varint_buf<C: Codec>(r: &mut impl BufRead) -> Result<u64> {
    let buf = r.fill_buf()?;
    if buf.len() >= C::MAX_LEN {
        let mut encoded = buf;
        let v = C::get(&mut encoded)?;
        let len = buf.len() - encoded.len();
        r.consume(len);
        Ok(v)
    } else {
        read_varint::<C>(r)
    }
}
