//! `varint-bench`: compare decode speed of the varint codecs over a test vector.
//!
//! Without a file argument a log-uniform random vector is generated. With one, the file is read
//! as one unsigned decimal integer per line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueHint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use varint_codecs::harness::{self, vectors, Calibrator, CodecReport, HarnessError};
use varint_codecs::{logging, Format};

#[derive(Parser, Debug)]
#[command(
    name = "varint-bench",
    version,
    about = "Measure bytes/integer and decode time of LEB128, PrefixVarint, leSQLite and leSQLite2"
)]
struct Cli {
    /// Test vector file, one unsigned decimal integer per line.
    #[arg(value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Number of log-uniform integers to generate when no file is given.
    #[arg(long, env = "VARINT_BENCH_COUNT", default_value_t = vectors::DEFAULT_COUNT)]
    count: usize,

    /// Seed for the log-uniform generator.
    #[arg(long, env = "VARINT_BENCH_SEED", default_value_t = 0)]
    seed: u64,

    /// Minimum duration in seconds of a timed batch of decodes.
    #[arg(long, env = "VARINT_BENCH_MIN_TIME", default_value_t = 1.0, value_parser = parse_secs)]
    min_time: f64,

    /// Restrict the run to these codecs (leb128|prefix|lesqlite|lesqlite2). May be repeated.
    #[arg(long = "codec", value_name = "NAME")]
    codecs: Vec<Format>,
}

fn parse_secs(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("{s} is not a positive number of seconds"))
    }
}

fn main() -> ExitCode {
    logging::setup_logging();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "benchmark failed");
            eprintln!("varint-bench: {err}");
            if err.is_correctness_failure() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let numbers = match &cli.file {
        Some(path) => {
            let numbers = vectors::read_test_vector(path)?;
            println!("Read {} integers from {}.", numbers.len(), path.display());
            numbers
        }
        None => {
            let mut rng = StdRng::seed_from_u64(cli.seed);
            let numbers = vectors::log_uniform(&mut rng, cli.count);
            println!("Generated {} log-uniform integers.", numbers.len());
            numbers
        }
    };

    let formats = if cli.codecs.is_empty() {
        Format::ALL.to_vec()
    } else {
        cli.codecs.clone()
    };
    let calibrator = Calibrator::new(Duration::from_secs_f64(cli.min_time));

    if numbers.is_empty() {
        return Err(HarnessError::EmptyInput);
    }
    let mut reports = Vec::with_capacity(formats.len());
    for format in formats {
        let report = harness::run_codec(format, &numbers, &calibrator)?;
        print_report(&report);
        reports.push(report);
    }

    for (format, ratio) in harness::ratios(&reports) {
        println!("T({}) / T({}) = {:.3}.", Format::Leb128, format, ratio);
    }
    Ok(())
}

fn print_report(report: &CodecReport) {
    println!(
        "{}: {:.3} bytes/integer.",
        report.format,
        report.bytes_per_integer()
    );
    println!("{}: {:.3e} secs.", report.format, report.secs_per_decode());
}
