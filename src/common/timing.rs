//! Timing helpers that report through `tracing`

use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Unit picked by [`scale_seconds`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Millis,
    Micros,
    Nanos,
    Picos,
}

impl TimeUnit {
    const LADDER: [TimeUnit; 5] = [
        TimeUnit::Seconds,
        TimeUnit::Millis,
        TimeUnit::Micros,
        TimeUnit::Nanos,
        TimeUnit::Picos,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
            TimeUnit::Nanos => "ns",
            TimeUnit::Picos => "ps",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Express `seconds` in the largest unit that keeps the value at least 1.
///
/// Anything shorter than a picosecond is still reported in picoseconds.
///
/// # Example
/// ```
/// # use araceae::common::{scale_seconds, TimeUnit};
/// let (value, unit) = scale_seconds(0.25);
/// assert_eq!(unit, TimeUnit::Millis);
/// assert!((value - 250.0).abs() < 1e-9);
/// ```
pub fn scale_seconds(seconds: f64) -> (f64, TimeUnit) {
    let mut value = seconds;
    for unit in TimeUnit::LADDER {
        if value >= 1.0 {
            return (value, unit);
        }
        value *= 1000.0;
    }
    (value / 1000.0, TimeUnit::Picos)
}

/// What a [`ScopedTimer`] reports when it goes out of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Elapsed time, in a scaled unit
    #[default]
    Delta,
    /// Rate, as one over the elapsed time
    Hz,
}

/// Logs how long a scope took when dropped
#[derive(Debug)]
pub struct ScopedTimer {
    label: String,
    decimals: usize,
    mode: TimerMode,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>, decimals: usize, mode: TimerMode) -> Self {
        ScopedTimer {
            label: label.into(),
            decimals,
            mode,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Text logged on drop, for the given elapsed duration
    pub fn report(&self, elapsed: Duration) -> String {
        let seconds = elapsed.as_secs_f64();
        match self.mode {
            TimerMode::Delta => {
                let (value, unit) = scale_seconds(seconds);
                format!("{}: {:.*} {}", self.label, self.decimals, value, unit)
            }
            TimerMode::Hz if seconds > 0.0 => {
                format!("{}: {:.0} Hz", self.label, 1.0 / seconds)
            }
            TimerMode::Hz => format!("{}: inf Hz", self.label),
        }
    }
}

impl Default for ScopedTimer {
    fn default() -> Self {
        Self::new("Timer", 2, TimerMode::Delta)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        info!("{}", self.report(self.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_seconds_units() {
        assert_eq!(scale_seconds(2.0), (2.0, TimeUnit::Seconds));
        assert_eq!(scale_seconds(0.5).1, TimeUnit::Millis);
        assert_eq!(scale_seconds(2e-5).1, TimeUnit::Micros);
        assert_eq!(scale_seconds(3e-9).1, TimeUnit::Nanos);
        assert_eq!(scale_seconds(4e-12).1, TimeUnit::Picos);
    }

    #[test]
    fn test_scale_seconds_below_picos() {
        let (value, unit) = scale_seconds(0.0);
        assert_eq!(value, 0.0);
        assert_eq!(unit, TimeUnit::Picos);
    }

    #[test]
    fn test_delta_report() {
        let timer = ScopedTimer::new("load", 1, TimerMode::Delta);
        assert_eq!(timer.report(Duration::from_millis(23)), "load: 23.0 ms");
        assert_eq!(timer.report(Duration::from_secs(3)), "load: 3.0 s");
    }

    #[test]
    fn test_hz_report() {
        let timer = ScopedTimer::new("loop", 2, TimerMode::Hz);
        assert_eq!(timer.report(Duration::from_millis(10)), "loop: 100 Hz");
        assert_eq!(timer.report(Duration::ZERO), "loop: inf Hz");
    }
}
