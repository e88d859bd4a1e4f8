//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use core_kernel::Timestamp;
use domain_policy::MeasureType;
use proptest::prelude::*;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating supported measures
pub fn measure_strategy() -> impl Strategy<Value = MeasureType> {
    prop_oneof![
        Just(MeasureType::Temperature),
        Just(MeasureType::WindSpeed),
        Just(MeasureType::WindGustSpeed),
        Just(MeasureType::UVIndex),
        Just(MeasureType::Pressure),
        Just(MeasureType::Humidity),
    ]
}

/// Strategy for generating valid measure indexes
pub fn measure_index_strategy() -> impl Strategy<Value = u8> {
    0u8..MeasureType::COUNT as u8
}

/// Strategy for generating unsupported measure indexes
pub fn invalid_measure_index_strategy() -> impl Strategy<Value = u8> {
    MeasureType::COUNT as u8..=u8::MAX
}

/// Strategy for generating values inside a closed range
pub fn in_range_value_strategy(min: i64, max: i64) -> impl Strategy<Value = i64> {
    min..=max
}

/// Strategy for generating values outside a closed range
pub fn out_of_range_value_strategy(min: i64, max: i64) -> impl Strategy<Value = i64> {
    prop_oneof![min - 1_000..min, max + 1..=max + 1_000]
}

/// Strategy for generating timestamps inside the standard coverage window
pub fn in_period_timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    let start = TemporalFixtures::period_start().millis();
    let end = TemporalFixtures::period_end().millis();
    (start..=end).prop_map(Timestamp::from_millis)
}

/// Strategy for generating timestamps after the standard coverage window
pub fn after_period_timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    let end = TemporalFixtures::period_end().millis();
    (end + 1..end + 1_000_000_000).prop_map(Timestamp::from_millis)
}
