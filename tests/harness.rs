use std::io::Write;
use std::time::Duration;

use varint_codecs::harness::{self, vectors, Calibrator, HarnessError};
use varint_codecs::Format;

#[test]
fn reads_test_vector_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0").unwrap();
    writeln!(file, "540850").unwrap();
    writeln!(file).unwrap();
    write!(file, "18446744073709551615").unwrap();
    file.flush().unwrap();

    let numbers = vectors::read_test_vector(file.path()).unwrap();
    assert_eq!(numbers, vec![0, 540_850, u64::MAX]);

    let calibrator = Calibrator::new(Duration::from_micros(100));
    let reports = harness::run(&numbers, &Format::ALL, &calibrator).unwrap();
    let leb128 = &reports[0];
    assert_eq!(leb128.format, Format::Leb128);
    // 1 + 3 + 10 bytes.
    assert_eq!(leb128.encoded_len, 14);
    assert!((leb128.bytes_per_integer() - 14.0 / 3.0).abs() < 1e-9);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match vectors::read_test_vector(&path) {
        Err(HarnessError::FileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn parse_error_names_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "12\nabc\n7").unwrap();
    file.flush().unwrap();

    let err = vectors::read_test_vector(file.path()).unwrap_err();
    assert!(matches!(err, HarnessError::Parse { line: 2, .. }), "{:?}", err);
    assert!(err.to_string().contains("\"abc\""), "{}", err);
    assert!(!err.is_correctness_failure());
}

#[test]
fn empty_file_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let numbers = vectors::read_test_vector(file.path()).unwrap();
    assert!(numbers.is_empty());
    let calibrator = Calibrator::new(Duration::from_micros(100));
    assert!(matches!(
        harness::run(&numbers, &Format::ALL, &calibrator),
        Err(HarnessError::EmptyInput)
    ));
}
