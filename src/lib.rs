//! This crate implements four variable length integer codings for `u64` values and a harness
//! that compares how fast they decode.
//!
//! * [`Leb128`]: the classic [LEB128](https://en.wikipedia.org/wiki/LEB128) coding, 7 value bits
//!   per byte and a continuation bit in the high bit of every byte but the last.
//! * [`PrefixVarint`]: a unary length prefix in the low bits of the first byte followed by the
//!   little endian value bits. The length is known after reading one byte, which removes the
//!   per-byte branch LEB128 needs.
//! * [`LeSqlite`]: a little endian variant of the SQLite4 coding where ranges of the first byte
//!   select 1, 2, or 3-9 byte encodings.
//! * [`LeSqlite2`]: like `LeSqlite` with a 3 byte tier and bijective offsets on the 2 and 3 byte
//!   tiers so no code is wasted.
//!
//! Every codec implements the [`Codec`] trait. Codecs code values directly to/from
//! `bytes::{Buf,BufMut}`, and helpers are provided to code sequences, to extend
//! `bytes::{Buf,BufMut}`, and to handle values in `std::io::{Write,Read}`. The [`Format`] enum
//! names the closed set of codecs for code that picks one at runtime.
//!
//! Decoders never read past the end of their input. A buffer that ends before the length
//! declared by its leading byte(s) produces [`DecodeError::TruncatedInput`].
//!
//! ```
//! use varint_codecs::{Codec, LeSqlite2, VarIntBuf, VarIntBufMut};
//!
//! // value_buf is the maximum size needed to encode a value.
//! let mut value_buf = [0u8; varint_codecs::MAX_LEN];
//! assert_eq!(LeSqlite2::encode_slice(167894, &mut value_buf), 3);
//! assert_eq!(LeSqlite2::decode(&value_buf[..3], 1).unwrap(), vec![167894]);
//!
//! let mut buf_mut = vec![];
//! for v in (0..1000).step_by(3) {
//!   buf_mut.put_varint::<LeSqlite2>(v);
//! }
//!
//! let mut buf = buf_mut.as_slice();
//! while let Ok(v) = buf.get_varint::<LeSqlite2>() {
//!   assert_eq!(v % 3, 0);
//! }
//! assert!(buf.is_empty());
//! ```
pub mod bits;
mod bytes;
pub(crate) mod core;
mod format;
pub mod harness;
mod io;
mod leb128;
pub mod logging;
mod lesqlite;
mod lesqlite2;
mod prefix;

pub use crate::bytes::{VarIntBuf, VarIntBufMut, VarIntIter};
pub use crate::core::{Codec, DecodeError, EncodedVarInt};
pub use crate::format::{Format, ParseFormatError};
pub use crate::io::{read_varint, read_varint_buf, write_varint};
pub use crate::leb128::Leb128;
pub use crate::lesqlite::LeSqlite;
pub use crate::lesqlite2::LeSqlite2;
pub use crate::prefix::PrefixVarint;

/// Maximum number of bytes a single encoded value will occupy in any of the codecs.
///
/// This is the LEB128 length of values of 2^63 and above; the other codecs never exceed 9.
pub const MAX_LEN: usize = 10;

/// Number of bytes that must be contiguously readable at the cursor for the word-at-a-time
/// decode paths: the leading byte plus one full little endian `u64` load.
pub(crate) const FAST_PATH_LEN: usize = 9;
