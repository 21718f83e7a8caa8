use std::num::ParseIntError;
use std::path::PathBuf;

use crate::DecodeError;

/// Errors raised while acquiring test vectors or running a codec.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The test vector file does not exist.
    #[error("{}: no such file", path.display())]
    FileNotFound { path: PathBuf },

    /// The test vector file could not be opened or read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the test vector file is not an unsigned 64-bit decimal integer.
    #[error("{}:{line}: invalid unsigned integer {text:?}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// There is nothing to measure.
    #[error("the test vector is empty")]
    EmptyInput,

    /// A codec failed to decode its own output.
    #[error("{codec}: failed to decode its own output: {source}")]
    Decode {
        codec: &'static str,
        #[source]
        source: DecodeError,
    },

    /// A codec decoded its own output to a different sequence.
    #[error("{codec}: round trip mismatch at index {index}: expected {expected}, decoded {actual}")]
    RoundTripMismatch {
        codec: &'static str,
        index: usize,
        expected: u64,
        actual: u64,
    },
}

impl HarnessError {
    /// Whether this error means a codec is broken, as opposed to bad input.
    pub fn is_correctness_failure(&self) -> bool {
        matches!(
            self,
            HarnessError::Decode { .. } | HarnessError::RoundTripMismatch { .. }
        )
    }
}
