//! Policy DTOs
//!
//! Coordinates travel as fixed-point integers (degrees x 10^7) and period
//! bounds as Unix epoch milliseconds, matching the domain's wire
//! convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_policy::{MeasureType, Policy, PolicyFact, PolicyState, RecordedFact};

#[derive(Debug, Deserialize)]
pub struct CreatePolicyRequest {
    pub insurant_id: Uuid,
    pub oracle_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePolicyResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetThresholdRequest {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThresholdResponse {
    pub measure: String,
    pub measure_index: u8,
    pub min: i64,
    pub max: i64,
    pub is_set: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitPolicyRequest {
    /// Latitude, degrees x 10^7
    #[validate(range(min = -900_000_000, max = 900_000_000))]
    pub lat: i64,
    /// Longitude, degrees x 10^7
    #[validate(range(min = -1_800_000_000, max = 1_800_000_000))]
    pub lon: i64,
    /// Coverage start, Unix epoch milliseconds
    pub period_start: i64,
    /// Coverage end, Unix epoch milliseconds
    pub period_end: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConditionReadingRequest {
    #[validate(range(max = 5))]
    pub measure_index: u8,
    pub value: i64,
    /// Observation time, Unix epoch milliseconds
    pub observed_at: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub state: String,
    pub code: u8,
}

impl StateResponse {
    pub fn of(state: PolicyState) -> Self {
        Self {
            state: state.to_string(),
            code: state.code(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub id: String,
    pub insurant_id: String,
    pub oracle_id: String,
    pub state: String,
    pub state_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<i64>,
    pub thresholds: Vec<ThresholdResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Policy> for PolicyResponse {
    fn from(policy: &Policy) -> Self {
        let thresholds = MeasureType::ALL
            .iter()
            .filter_map(|measure| {
                let slot = policy.measured_value(measure.index()).ok()?;
                slot.is_set.then(|| ThresholdResponse {
                    measure: measure.name().to_string(),
                    measure_index: measure.index(),
                    min: slot.min,
                    max: slot.max,
                    is_set: slot.is_set,
                })
            })
            .collect();

        Self {
            id: policy.id().to_string(),
            insurant_id: policy.insurant().to_string(),
            oracle_id: policy.oracle().to_string(),
            state: policy.state().to_string(),
            state_code: policy.state().code(),
            lat: policy.location().map(|point| point.lat_e7),
            lon: policy.location().map(|point| point.lon_e7),
            period_start: policy.period().map(|period| period.start.millis()),
            period_end: policy.period().map(|period| period.end.millis()),
            thresholds,
            created_at: policy.created_at(),
            updated_at: policy.updated_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FactResponse {
    pub sequence: u64,
    pub fact_type: String,
    pub fact: PolicyFact,
    pub recorded_at: DateTime<Utc>,
}

impl From<RecordedFact> for FactResponse {
    fn from(entry: RecordedFact) -> Self {
        Self {
            sequence: entry.sequence,
            fact_type: entry.fact.fact_type().to_string(),
            fact: entry.fact,
            recorded_at: entry.recorded_at,
        }
    }
}
