//! Condition evaluation
//!
//! The decision procedure applied to every oracle reading, in strict order:
//!
//! 1. **Time check (highest priority)** - a reading stamped after the period
//!    end declines the claim, even for a measure that was never configured.
//!    Lateness alone is disqualifying, independent of the value reported.
//! 2. **Threshold check** - a configured measure whose value falls outside
//!    its inclusive acceptance range issues the claim.
//! 3. **No-op** - anything else leaves the policy waiting for more data.
//!
//! The evaluator is a pure function over the threshold table, the coverage
//! period, and the reading; the aggregate maps its verdict onto state
//! transitions and facts.

use core_kernel::{PolicyPeriod, Timestamp};

use crate::measure::{MeasureType, ThresholdTable};

/// Outcome of assessing a single oracle reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The reading arrived after the coverage period ended
    AfterPeriod,
    /// The named measure breached its configured acceptance range
    OutOfRange(MeasureType),
    /// Within bounds, or the measure was never configured
    InRange,
}

/// Assesses one reading against the policy's thresholds and period.
///
/// The time check runs first; a late reading yields [`Verdict::AfterPeriod`]
/// before the threshold table is consulted at all.
pub fn assess(
    thresholds: &ThresholdTable,
    period: &PolicyPeriod,
    measure: MeasureType,
    value: i64,
    observed_at: Timestamp,
) -> Verdict {
    if period.ended_before(observed_at) {
        return Verdict::AfterPeriod;
    }

    let slot = thresholds.get(measure);
    if slot.is_set && !slot.accepts(value) {
        return Verdict::OutOfRange(measure);
    }

    Verdict::InRange
}

/// Formats the claim reason for a breached measure
pub fn breach_reason(measure: MeasureType) -> String {
    format!("{} limits exceeded", measure.name())
}
