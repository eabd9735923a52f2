//! Execution timing.
//!
//! Strategies measure only their selection logic (ordering and packing).
//! Copying the instance happens before the clock starts, the same way for
//! every strategy, so elapsed times are comparable.

use std::time::{Duration, Instant};

/// A value together with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` and records its elapsed time on a monotonic clock.
///
/// # Examples
///
/// ```
/// use u_knapsack::timing::timed;
///
/// let t = timed(|| (1..=10u64).sum::<u64>());
/// assert_eq!(t.value, 55);
/// ```
pub fn timed<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let watch = Stopwatch::start();
    let value = f();
    Timed {
        value,
        elapsed: watch.elapsed(),
    }
}

/// Monotonic stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Converts a duration to fractional milliseconds for display.
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}
