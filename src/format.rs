use std::fmt;
use std::str::FromStr;

use crate::{Codec, DecodeError, LeSqlite, LeSqlite2, Leb128, PrefixVarint};

/// The closed set of codecs, for callers that choose a coding at runtime.
///
/// Each variant dispatches to its own `Codec` implementation only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Format {
    Leb128,
    PrefixVarint,
    LeSqlite,
    LeSqlite2,
}

/// Dispatches `$body` with `$codec` bound to the codec type of `$format`.
macro_rules! dispatch {
    ($format:expr, $codec:ident => $body:expr) => {
        match $format {
            Format::Leb128 => {
                type $codec = Leb128;
                $body
            }
            Format::PrefixVarint => {
                type $codec = PrefixVarint;
                $body
            }
            Format::LeSqlite => {
                type $codec = LeSqlite;
                $body
            }
            Format::LeSqlite2 => {
                type $codec = LeSqlite2;
                $body
            }
        }
    };
}

impl Format {
    /// Every format, LEB128 first.
    pub const ALL: [Format; 4] = [
        Format::Leb128,
        Format::PrefixVarint,
        Format::LeSqlite,
        Format::LeSqlite2,
    ];

    pub fn name(self) -> &'static str {
        dispatch!(self, C => C::NAME)
    }

    pub fn max_len(self) -> usize {
        dispatch!(self, C => C::MAX_LEN)
    }

    /// Returns the number of bytes required to encode `v`.
    pub fn encoded_len(self, v: u64) -> usize {
        dispatch!(self, C => C::encoded_len(v))
    }

    pub fn encode(self, values: &[u64]) -> Vec<u8> {
        dispatch!(self, C => C::encode(values))
    }

    pub fn decode(self, input: &[u8], count: usize) -> Result<Vec<u64>, DecodeError> {
        dispatch!(self, C => C::decode(input, count))
    }

    /// Decodes `out.len()` values into `out`, returning the number of bytes consumed.
    #[inline]
    pub fn decode_into(self, input: &[u8], out: &mut [u64]) -> Result<usize, DecodeError> {
        dispatch!(self, C => C::decode_into(input, out))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown format {:?} (use leb128|prefix|lesqlite|lesqlite2)",
            self.0
        )
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leb128" => Ok(Format::Leb128),
            "prefix" | "prefixvarint" => Ok(Format::PrefixVarint),
            "lesqlite" => Ok(Format::LeSqlite),
            "lesqlite2" => Ok(Format::LeSqlite2),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}
