//! Weather measures and their acceptance thresholds
//!
//! A policy can be conditioned on six enumerated weather metrics. Each
//! measure has one threshold slot that exists from creation; the insurant
//! may overwrite a slot any number of times before submission, and the
//! latest write wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of the weather metrics a policy can be conditioned on.
///
/// Indices 0-5 are the wire encoding; no other index is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MeasureType {
    Temperature = 0,
    WindSpeed = 1,
    WindGustSpeed = 2,
    UVIndex = 3,
    Pressure = 4,
    Humidity = 5,
}

impl MeasureType {
    /// Number of supported measures
    pub const COUNT: usize = 6;

    /// All measures in index order
    pub const ALL: [MeasureType; Self::COUNT] = [
        MeasureType::Temperature,
        MeasureType::WindSpeed,
        MeasureType::WindGustSpeed,
        MeasureType::UVIndex,
        MeasureType::Pressure,
        MeasureType::Humidity,
    ];

    /// Resolves a wire index into a measure, if valid
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the wire index of this measure
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name used in claim reasons
    pub const fn name(self) -> &'static str {
        match self {
            MeasureType::Temperature => "Temperature",
            MeasureType::WindSpeed => "WindSpeed",
            MeasureType::WindGustSpeed => "WindGustSpeed",
            MeasureType::UVIndex => "UVIndex",
            MeasureType::Pressure => "Pressure",
            MeasureType::Humidity => "Humidity",
        }
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive acceptance range for one measure.
///
/// An unset slot reports `is_set = false` with zero bounds; it never
/// participates in evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureThreshold {
    /// Lower acceptance bound (inclusive)
    pub min: i64,
    /// Upper acceptance bound (inclusive)
    pub max: i64,
    /// Whether the insurant has configured this measure
    pub is_set: bool,
}

impl MeasureThreshold {
    /// Creates a configured threshold
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max, is_set: true }
    }

    /// Returns true if the value falls within the acceptance range
    pub const fn accepts(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The per-policy threshold configuration: one slot per measure, all six
/// present from creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    slots: [MeasureThreshold; MeasureType::COUNT],
}

impl ThresholdTable {
    /// Creates a table with every slot unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for a measure
    pub fn get(&self, measure: MeasureType) -> MeasureThreshold {
        self.slots[measure.index() as usize]
    }

    /// Overwrites the slot for a measure; replaces both bounds and marks
    /// the slot configured in one step
    pub fn set(&mut self, measure: MeasureType, min: i64, max: i64) {
        self.slots[measure.index() as usize] = MeasureThreshold::new(min, max);
    }

    /// Returns true if any slot has been configured
    pub fn any_set(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_set)
    }
}
