//! Monotonic timing and rate computation

use std::time::Instant;

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Rate reported when the elapsed time is zero seconds
const ZERO_DURATION_MULTIPLIER: i128 = 1000;

/// Measures one timed region
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn stop(&self) -> Elapsed {
        let nanos = u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        Elapsed::from_nanos(nanos)
    }
}

/// Elapsed wall time in whole nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    nanos: u64,
}

impl Elapsed {
    pub fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    pub fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Whole milliseconds, truncated
    pub fn as_millis(&self) -> u64 {
        self.nanos / NANOS_PER_MILLI
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_SEC
    }

    /// Events per second, truncated toward zero.
    ///
    /// A zero elapsed time reports `value * 1000` instead of dividing by zero.
    pub fn rate(&self, value: i64) -> i64 {
        let rate = self.wide_rate(i128::from(value));
        i64::try_from(rate).unwrap_or(if rate < 0 { i64::MIN } else { i64::MAX })
    }

    /// Same as [`Elapsed::rate`] for counters that can exceed `i64`
    pub fn wide_rate(&self, value: i128) -> i128 {
        let secs = self.as_secs_f64();
        if secs > 0.0 {
            (value as f64 / secs) as i128
        } else {
            value.saturating_mul(ZERO_DURATION_MULTIPLIER)
        }
    }
}
