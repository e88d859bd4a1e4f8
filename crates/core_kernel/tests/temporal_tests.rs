//! Tests for timestamps and coverage periods

use core_kernel::{PolicyPeriod, TemporalError, Timestamp};
use proptest::prelude::*;

#[test]
fn period_rejects_reversed_bounds() {
    let start = Timestamp::from_millis(2_000);
    let end = Timestamp::from_millis(1_000);

    let err = PolicyPeriod::new(start, end).unwrap_err();
    assert_eq!(err, TemporalError::InvalidPeriod { start, end });
}

#[test]
fn period_accepts_ordered_bounds() {
    let period = PolicyPeriod::new(Timestamp::from_millis(10), Timestamp::from_millis(20)).unwrap();
    assert_eq!(period.duration_millis(), 10);
}

#[test]
fn timestamp_converts_to_raw_millis() {
    let ts = Timestamp::from_millis(1_700_000_000_000);
    assert_eq!(ts.millis(), 1_700_000_000_000);
    assert_eq!(i64::from(ts), 1_700_000_000_000);
    assert_eq!(Timestamp::from(1_700_000_000_000_i64), ts);
}

proptest! {
    /// A timestamp is late exactly when it is strictly past the period end.
    #[test]
    fn lateness_matches_strict_ordering(
        start in 0_i64..1_000_000,
        len in 1_i64..1_000_000,
        ts in -1_000_000_i64..3_000_000,
    ) {
        let period = PolicyPeriod::new(
            Timestamp::from_millis(start),
            Timestamp::from_millis(start + len),
        ).unwrap();

        let stamp = Timestamp::from_millis(ts);
        prop_assert_eq!(period.ended_before(stamp), ts > start + len);
        prop_assert_eq!(period.contains(stamp), ts >= start && ts <= start + len);
    }
}
