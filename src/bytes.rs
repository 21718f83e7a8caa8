//! Traits that allow writing/reading values of any `Codec` on `bytes::{BufMut,Buf}`.

use crate::{Codec, DecodeError};

use bytes::{Buf, BufMut};

/// Extension for `buf::BufMut` to write values with any `Codec`.
pub trait VarIntBufMut {
    fn put_varint<C: Codec>(&mut self, v: u64);
}

impl<Inner: BufMut> VarIntBufMut for Inner {
    /// Writes a value to the buffer using codec `C`.
    #[inline]
    fn put_varint<C: Codec>(&mut self, v: u64) {
        C::put(v, self);
    }
}

/// Extension for `buf::Buf` to read values with any `Codec`.
pub trait VarIntBuf {
    /// Reads a value from the buffer. After a successful read, the buffer will be advanced by the
    /// number of bytes read.
    ///
    /// # Examples
    ///
    /// ```
    /// use varint_codecs::{PrefixVarint, VarIntBuf, VarIntBufMut};
    ///
    /// let to_encode = [1, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_varint::<PrefixVarint>(*v);
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   let decoded = buf.get_varint::<PrefixVarint>().unwrap();
    ///   assert_eq!(decoded, *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `TruncatedInput` error if the buffer is empty or if the buffer is not long enough
    /// to contain the full encoded value.
    ///
    /// Returns an `Overflow` error if a LEB128 value does not fit in 64 bits.
    fn get_varint<C: Codec>(&mut self) -> Result<u64, DecodeError>;

    /// Returns an iterator over the values in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use varint_codecs::{Leb128, VarIntBuf, VarIntBufMut};
    ///
    /// let to_encode = [1, 2, 30, 24_000, u64::MAX];
    /// let mut buf = vec![];
    /// for n in to_encode.iter() {
    ///     buf.put_varint::<Leb128>(*n);
    /// }
    /// let mut result = vec![];
    /// let mut decode_data = buf.as_slice();
    /// for decoded in decode_data.iter_varint::<Leb128>() {
    ///     result.push(decoded.unwrap());
    /// }
    /// assert_eq!(to_encode, result.as_slice());
    /// ```
    fn iter_varint<C: Codec>(&mut self) -> VarIntIter<'_, Self, C>
    where
        Self: Sized,
    {
        VarIntIter::new(self)
    }
}

impl<Inner: Buf> VarIntBuf for Inner {
    #[inline]
    fn get_varint<C: Codec>(&mut self) -> Result<u64, DecodeError> {
        C::get(self)
    }
}

/// An iterator over values of codec `C` in a `Buf`.
///
/// Yields an error at most once: a failed read drains the buffer.
pub struct VarIntIter<'a, B, C> {
    buf: &'a mut B,
    _marker: std::marker::PhantomData<C>,
}

impl<'a, B, C> VarIntIter<'a, B, C> {
    /// Creates a new `VarIntIter`.
    pub fn new(buf: &'a mut B) -> Self {
        Self {
            buf,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, B, C> Iterator for VarIntIter<'a, B, C>
where
    B: Buf,
    C: Codec,
{
    type Item = Result<u64, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.has_remaining() {
            let item = self.buf.get_varint::<C>();
            if item.is_err() {
                self.buf.advance(self.buf.remaining());
            }
            Some(item)
        } else {
            None
        }
    }
}
