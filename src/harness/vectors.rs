//! Test vector sources: log-uniform random samples and plain text files.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::HarnessError;

/// Default number of generated integers.
pub const DEFAULT_COUNT: usize = 100_000;

/// Maximum significant bits in the log-uniform random numbers.
const RANDOM_BITS: u32 = 64;

/// Generate `n` log-uniform random numbers.
///
/// Each value is `exp(u)` for `u` uniform over `[0, 64 ln 2)`, so bit lengths are uniformly
/// distributed over 1..=64. Values are truncated toward zero and saturate at `u64::MAX`.
pub fn log_uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u64> {
    let dist = Uniform::new(0.0f64, f64::from(RANDOM_BITS) * std::f64::consts::LN_2);
    (0..n).map(|_| dist.sample(rng).exp() as u64).collect()
}

/// Read a test vector from a file.
///
/// Format: one unsigned decimal number per line. Surrounding whitespace is ignored and blank
/// lines are skipped.
pub fn read_test_vector(path: &Path) -> Result<Vec<u64>, HarnessError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => HarnessError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => HarnessError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    parse_test_vector(BufReader::new(file), path)
}

/// Parses the test vector format from `reader`; `path` is used for error reporting only.
pub fn parse_test_vector<R: BufRead>(reader: R, path: &Path) -> Result<Vec<u64>, HarnessError> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value = text.parse::<u64>().map_err(|source| HarnessError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_string(),
            source,
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn log_uniform_is_deterministic_per_seed() {
        let a = log_uniform(&mut StdRng::seed_from_u64(7), 1000);
        let b = log_uniform(&mut StdRng::seed_from_u64(7), 1000);
        let c = log_uniform(&mut StdRng::seed_from_u64(8), 1000);
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn log_uniform_spans_bit_lengths() {
        let values = log_uniform(&mut StdRng::seed_from_u64(0), DEFAULT_COUNT);
        let mut seen = [0usize; 65];
        for v in &values {
            seen[(64 - v.leading_zeros()) as usize] += 1;
        }
        // Roughly 1/64 of the sample per bit length; allow generous slack.
        let expected = DEFAULT_COUNT / 64;
        for (bits, count) in seen.iter().enumerate().skip(2).take(62) {
            assert!(
                *count > expected / 2 && *count < expected * 2,
                "bit length {} seen {} times",
                bits,
                count
            );
        }
    }

    #[test]
    fn parse_lines() {
        let text = "0\n  42 \n\n18446744073709551615\n7";
        let values = parse_test_vector(text.as_bytes(), Path::new("mem")).unwrap();
        assert_eq!(values, vec![0, 42, u64::MAX, 7]);
    }

    #[test]
    fn parse_reports_line() {
        let text = "1\n2\n-3\n";
        match parse_test_vector(text.as_bytes(), Path::new("mem")) {
            Err(HarnessError::Parse { line, text, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "-3");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        let text = "18446744073709551616\n";
        assert!(matches!(
            parse_test_vector(text.as_bytes(), Path::new("mem")),
            Err(HarnessError::Parse { line: 1, .. })
        ));
    }
}
