//! Decode throughput comparison across the codecs.
//!
//! Each format encodes the test vector once, then decode is timed over a reused output buffer
//! and the result is checked against the input. A codec that fails to reproduce its input stops
//! the run: its timing would be meaningless.

mod error;
pub mod timing;
pub mod vectors;

use std::hint::black_box;
use std::time::Duration;

use tracing::{info, warn};

use crate::Format;

pub use self::error::HarnessError;
pub use self::timing::Calibrator;

/// Measurements of one format over one test vector.
#[derive(Clone, Debug, PartialEq)]
pub struct CodecReport {
    pub format: Format,
    /// Number of integers in the test vector.
    pub count: usize,
    /// Encoded size of the whole test vector in bytes.
    pub encoded_len: usize,
    /// Average time to decode the whole test vector once.
    pub decode_time: Duration,
}

impl CodecReport {
    pub fn bytes_per_integer(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.encoded_len as f64 / self.count as f64
        }
    }

    pub fn secs_per_decode(&self) -> f64 {
        self.decode_time.as_secs_f64()
    }
}

/// Encode `numbers` with `format`, time its decoder and verify the round trip.
pub fn run_codec(
    format: Format,
    numbers: &[u64],
    calibrator: &Calibrator,
) -> Result<CodecReport, HarnessError> {
    let encoded = format.encode(numbers);
    let mut report = CodecReport {
        format,
        count: numbers.len(),
        encoded_len: encoded.len(),
        decode_time: Duration::ZERO,
    };
    info!(
        codec = format.name(),
        bytes_per_integer = report.bytes_per_integer(),
        "encoded"
    );

    let mut buffer = vec![0u64; numbers.len()];
    // Check once up front so a broken decoder is not timed in a loop.
    decode_checked(format, &encoded, &mut buffer)?;
    report.decode_time = calibrator.measure(|| {
        let _ = black_box(format.decode_into(black_box(&encoded), &mut buffer));
    });
    verify(format, numbers, &buffer)?;

    info!(
        codec = format.name(),
        secs = report.secs_per_decode(),
        "decoded"
    );
    Ok(report)
}

fn decode_checked(format: Format, encoded: &[u8], out: &mut [u64]) -> Result<(), HarnessError> {
    let consumed = format
        .decode_into(encoded, out)
        .map_err(|source| HarnessError::Decode {
            codec: format.name(),
            source,
        })?;
    if consumed != encoded.len() {
        warn!(
            codec = format.name(),
            consumed,
            encoded = encoded.len(),
            "decoder left trailing bytes"
        );
    }
    Ok(())
}

/// Fails with `RoundTripMismatch` at the first index where `decoded` differs from `numbers`.
fn verify(format: Format, numbers: &[u64], decoded: &[u64]) -> Result<(), HarnessError> {
    match numbers.iter().zip(decoded).position(|(a, b)| a != b) {
        Some(index) => Err(HarnessError::RoundTripMismatch {
            codec: format.name(),
            index,
            expected: numbers[index],
            actual: decoded[index],
        }),
        None => Ok(()),
    }
}

/// Run every format in `formats` over `numbers`, stopping at the first failure.
pub fn run(
    numbers: &[u64],
    formats: &[Format],
    calibrator: &Calibrator,
) -> Result<Vec<CodecReport>, HarnessError> {
    if numbers.is_empty() {
        return Err(HarnessError::EmptyInput);
    }
    formats
        .iter()
        .map(|format| run_codec(*format, numbers, calibrator))
        .collect()
}

/// Decode time of LEB128 divided by the decode time of every other reported format.
///
/// Empty if LEB128 was not measured.
pub fn ratios(reports: &[CodecReport]) -> Vec<(Format, f64)> {
    let baseline = match reports.iter().find(|r| r.format == Format::Leb128) {
        Some(r) => r.secs_per_decode(),
        None => return Vec::new(),
    };
    reports
        .iter()
        .filter(|r| r.format != Format::Leb128)
        .map(|r| (r.format, baseline / r.secs_per_decode()))
        .collect()
}
