//! Poll timing for repeated desktop-state reads.
//!
//! The fullscreen query is a point-in-time read, so anything that wants to
//! follow space changes has to sample it. This module owns the sampling
//! interval and the rate check used by watch loops.

use std::time::Duration;

use crate::error::{ProbeError, ProbeResult};

/// Smallest interval accepted for polling the window server.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Largest interval accepted (one hour).
pub const MAX_POLL_INTERVAL_MS: u64 = 60 * 60 * 1000;

/// Default interval between two fullscreen reads.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// A validated polling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval {
    millis: u64,
}

impl PollInterval {
    /// Build an interval within
    /// [`MIN_POLL_INTERVAL_MS`]..=[`MAX_POLL_INTERVAL_MS`].
    pub fn from_millis(millis: u64) -> ProbeResult<Self> {
        if millis < MIN_POLL_INTERVAL_MS {
            return Err(ProbeError::config(format!(
                "poll interval must be at least {MIN_POLL_INTERVAL_MS}ms, got {millis}ms"
            )));
        }
        if millis > MAX_POLL_INTERVAL_MS {
            return Err(ProbeError::config(format!(
                "poll interval must be at most {MAX_POLL_INTERVAL_MS}ms, got {millis}ms"
            )));
        }
        Ok(Self { millis })
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }

    /// Number of nanoseconds between samples.
    pub fn as_nanos(&self) -> u64 {
        self.millis.saturating_mul(1_000_000)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self {
            millis: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Rate controller for sampling.
#[derive(Debug)]
pub struct RateController {
    target_interval_ns: u64,
    last_tick_ns: Option<u64>,
}

impl RateController {
    pub fn new(interval: PollInterval) -> Self {
        Self {
            target_interval_ns: interval.as_nanos(),
            last_tick_ns: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_ns: u64) -> bool {
        match self.last_tick_ns {
            None => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last.saturating_add(self.target_interval_ns) => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }

    pub fn interval_ns(&self) -> u64 {
        self.target_interval_ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_intervals_below_minimum() {
        assert!(PollInterval::from_millis(0).is_err());
        assert!(PollInterval::from_millis(MIN_POLL_INTERVAL_MS - 1).is_err());
        let interval = PollInterval::from_millis(MIN_POLL_INTERVAL_MS).unwrap();
        assert_eq!(interval.as_duration(), Duration::from_millis(10));
    }

    #[test]
    fn rejects_intervals_above_one_hour() {
        assert!(PollInterval::from_millis(MAX_POLL_INTERVAL_MS).is_ok());
        assert!(PollInterval::from_millis(MAX_POLL_INTERVAL_MS + 1).is_err());
        let err = PollInterval::from_millis(u64::MAX / 1000).unwrap_err();
        assert!(matches!(err, ProbeError::Config { .. }));
    }

    #[test]
    fn rate_controller_near_end_of_clock_does_not_overflow() {
        let interval = PollInterval::from_millis(MAX_POLL_INTERVAL_MS).unwrap();
        let mut ctrl = RateController::new(interval);
        assert!(ctrl.should_tick(u64::MAX - 10));
        assert!(!ctrl.should_tick(u64::MAX));
    }

    #[test]
    fn default_interval_matches_constant() {
        assert_eq!(
            PollInterval::default().as_millis(),
            DEFAULT_POLL_INTERVAL_MS
        );
    }

    #[test]
    fn test_rate_controller() {
        let mut ctrl = RateController::new(PollInterval::from_millis(100).unwrap());
        assert!(ctrl.should_tick(0)); // first tick always fires
        assert!(!ctrl.should_tick(50_000_000));
        assert!(ctrl.should_tick(100_000_000));
        assert_eq!(ctrl.interval_ns(), 100_000_000);
    }
}
