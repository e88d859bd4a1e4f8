//! Timestamps and coverage periods
//!
//! The engine works with timezone-free epoch timestamps: oracles report
//! readings with integer millisecond timestamps, and the policy period is a
//! pair of such instants. Wall-clock handling stays at the edges.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An absolute instant, expressed as milliseconds since the Unix epoch.
///
/// Timestamps carry no timezone component; ordering is plain integer
/// ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from epoch milliseconds
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the epoch milliseconds
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Returns the current wall-clock instant
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Returns this instant shifted by the given number of milliseconds
    pub const fn offset(self, millis: i64) -> Self {
        Self(self.0 + millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> i64 {
        ts.0
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod { start: Timestamp, end: Timestamp },
}

/// The time window during which oracle readings are considered timely.
///
/// Both bounds are inclusive: a reading stamped exactly at `end` is still
/// within the period, anything later is late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPeriod {
    /// Start of the coverage window (inclusive)
    pub start: Timestamp,
    /// End of the coverage window (inclusive)
    pub end: Timestamp,
}

impl PolicyPeriod {
    /// Creates a new period, requiring `start < end`
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the timestamp falls within the window
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Returns true if the timestamp is past the end of the window
    pub fn ended_before(&self, timestamp: Timestamp) -> bool {
        timestamp > self.end
    }

    /// Returns the window length in milliseconds
    pub fn duration_millis(&self) -> i64 {
        self.end.millis() - self.start.millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_requires_start_before_end() {
        let result = PolicyPeriod::new(Timestamp::from_millis(100), Timestamp::from_millis(100));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));

        let result = PolicyPeriod::new(Timestamp::from_millis(200), Timestamp::from_millis(100));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_period_end_is_inclusive() {
        let period =
            PolicyPeriod::new(Timestamp::from_millis(0), Timestamp::from_millis(1_000)).unwrap();

        assert!(period.contains(Timestamp::from_millis(1_000)));
        assert!(!period.ended_before(Timestamp::from_millis(1_000)));
        assert!(period.ended_before(Timestamp::from_millis(1_001)));
    }

    #[test]
    fn test_timestamp_ordering() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
        assert_eq!(Timestamp::from_millis(5).offset(-5), Timestamp::from_millis(0));
    }
}
