use bytes::{Buf, BufMut};

use crate::MAX_LEN;

/// Errors that may occur when decoding a value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Reached end-of-buffer unexpectedly.
    ///
    /// This may happen if you attempt to decode an empty buffer or if the buffer is shorter than
    /// the length declared by the leading byte(s) of the value.
    TruncatedInput,
    /// The value read does not fit in 64 bits.
    ///
    /// Only LEB128 can express such values; no encoder in this crate produces them.
    Overflow,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::TruncatedInput => f.write_str("input ends before the encoded value"),
            DecodeError::Overflow => f.write_str("encoded value does not fit in 64 bits"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A variable length integer coding of `u64` values.
///
/// Implementors provide the single value primitives (`put`, `get`, `encoded_len`, `tail_len`);
/// sequence coding is built on top of those.
pub trait Codec {
    /// Display name of the coding.
    const NAME: &'static str;

    /// Maximum number of bytes a single value occupies.
    const MAX_LEN: usize;

    /// Returns the number of bytes required to encode `v`.
    /// This value will always be in `[1, Self::MAX_LEN]`.
    fn encoded_len(v: u64) -> usize;

    /// Returns the number of bytes that follow a leading byte `tag`, or `None` if the length is
    /// carried by continuation bits in the following bytes instead.
    fn tail_len(tag: u8) -> Option<usize>;

    /// Writes the encoding of `v` to `buf`.
    ///
    /// # Panics
    ///
    /// If `buf` cannot grow to hold `Self::encoded_len(v)` more bytes.
    fn put<B: BufMut>(v: u64, buf: &mut B);

    /// Reads one value from `buf`, advancing it past the bytes consumed.
    ///
    /// On error the position of `buf` is unspecified.
    fn get<B: Buf>(buf: &mut B) -> Result<u64, DecodeError>;

    /// Encode `v` to `buf` and return the number of bytes written.
    ///
    /// # Panics
    ///
    /// If `Self::encoded_len(v) > buf.len()`.
    #[inline]
    fn encode_slice(v: u64, buf: &mut [u8]) -> usize {
        let avail = buf.len();
        let mut dst = buf;
        Self::put(v, &mut dst);
        avail - dst.len()
    }

    /// Encode `v` to an owned buffer and return it.
    /// Use `as_slice()` to access the encoded bytes.
    #[inline]
    fn to_varint_bytes(v: u64) -> EncodedVarInt {
        let mut enc = EncodedVarInt::default();
        enc.len = Self::encode_slice(v, &mut enc.buf) as u8;
        enc
    }

    /// Appends the encoding of every value in `values` to `buf`.
    fn encode_to<B: BufMut>(values: &[u64], buf: &mut B) {
        for v in values {
            Self::put(*v, buf);
        }
    }

    /// Encodes `values` into a new buffer.
    fn encode(values: &[u64]) -> Vec<u8> {
        let mut out = Vec::with_capacity(values.len() * 2);
        Self::encode_to(values, &mut out);
        out
    }

    /// Decodes `out.len()` values from the front of `input` into `out`, returning the number of
    /// bytes consumed.
    #[inline]
    fn decode_into(input: &[u8], out: &mut [u64]) -> Result<usize, DecodeError> {
        let mut buf = input;
        for slot in out.iter_mut() {
            *slot = Self::get(&mut buf)?;
        }
        Ok(input.len() - buf.len())
    }

    /// Decodes `count` values from the front of `input`.
    fn decode(input: &[u8], count: usize) -> Result<Vec<u64>, DecodeError> {
        let mut out = vec![0u64; count];
        Self::decode_into(input, &mut out)?;
        Ok(out)
    }
}

/// A single encoded value produced by `Codec::to_varint_bytes()`.
pub struct EncodedVarInt {
    buf: [u8; MAX_LEN],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedVarInt {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the number of bytes used to encode the value.
    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for EncodedVarInt {
    fn default() -> Self {
        Self {
            buf: [0u8; MAX_LEN],
            len: 0,
        }
    }
}

/// Fails with `TruncatedInput` unless `buf` holds at least `n` more bytes.
///
/// The buffer is drained on failure so that repeated reads terminate.
#[inline]
pub(crate) fn require<B: Buf>(buf: &mut B, n: usize) -> Result<(), DecodeError> {
    if buf.remaining() < n {
        buf.advance(buf.remaining());
        Err(DecodeError::TruncatedInput)
    } else {
        Ok(())
    }
}
