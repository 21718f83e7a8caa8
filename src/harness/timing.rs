//! Repetition count calibration for decode timing.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default minimum duration of a timed batch.
pub const DEFAULT_MIN_TIME: Duration = Duration::from_secs(1);

/// Times a closure by running it in batches long enough to swamp timer resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Calibrator {
    min_time: Duration,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TIME)
    }
}

impl Calibrator {
    /// Creates a calibrator whose batches last at least `min_time`. A zero duration is raised
    /// to one nanosecond so calibration always terminates.
    pub fn new(min_time: Duration) -> Self {
        Self {
            min_time: min_time.max(Duration::from_nanos(1)),
        }
    }

    pub fn min_time(&self) -> Duration {
        self.min_time
    }

    /// Returns the average duration of one call of `f`.
    ///
    /// The repetition count grows tenfold until a batch runs for at least `min_time`, is then
    /// scaled so one more batch should take about `min_time`, and that final batch is reported.
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Duration {
        let mut repetitions: u64 = 1;
        let mut elapsed = time_batch(&mut f, repetitions);
        while elapsed < self.min_time {
            repetitions = repetitions.saturating_mul(10);
            elapsed = time_batch(&mut f, repetitions);
            debug!(repetitions, elapsed_ns = elapsed.as_nanos() as u64, "calibrating");
        }

        repetitions = scale_repetitions(repetitions, elapsed, self.min_time);
        let elapsed = time_batch(&mut f, repetitions);
        debug!(repetitions, elapsed_ns = elapsed.as_nanos() as u64, "measured");
        per_repetition(elapsed, repetitions)
    }
}

fn time_batch<F: FnMut()>(f: &mut F, repetitions: u64) -> Duration {
    let before = Instant::now();
    for _ in 0..repetitions {
        f();
    }
    before.elapsed()
}

/// Repetition count expected to take `target` given that `repetitions` took `elapsed`.
pub(crate) fn scale_repetitions(repetitions: u64, elapsed: Duration, target: Duration) -> u64 {
    if elapsed.is_zero() {
        return repetitions;
    }
    let scaled = repetitions as f64 * target.as_secs_f64() / elapsed.as_secs_f64();
    (scaled.round() as u64).max(1)
}

pub(crate) fn per_repetition(elapsed: Duration, repetitions: u64) -> Duration {
    let nanos = elapsed.as_nanos() / u128::from(repetitions.max(1));
    Duration::from_nanos(nanos as u64)
}
