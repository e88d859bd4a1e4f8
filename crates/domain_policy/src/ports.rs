//! Repository port for policy aggregates
//!
//! The engine treats storage as an opaque collaborator supplying atomic
//! read-modify-write over one aggregate at a time. Adapters implement
//! [`PolicyRegistry`]; every method is one serializable step with no
//! interleaving observable by other operations, and a failed call commits
//! nothing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{PartyId, PolicyId, Timestamp};

use crate::aggregate::{Policy, PolicyState};
use crate::error::PolicyError;
use crate::events::PolicyFact;
use crate::measure::MeasureThreshold;

/// Errors surfaced by registry adapters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No aggregate exists under the given identifier
    #[error("Policy not found: {0}")]
    NotFound(PolicyId),

    /// The operation was rejected by the domain
    #[error(transparent)]
    Domain(#[from] PolicyError),
}

/// One entry of the append-only fact log.
///
/// Facts are recorded in arrival order with a per-policy sequence number so
/// consumers can poll incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedFact {
    pub policy_id: PolicyId,
    /// Position within this policy's log, starting at 0
    pub sequence: u64,
    pub fact: PolicyFact,
    pub recorded_at: DateTime<Utc>,
}

/// Port over the policy store.
///
/// Each operation is parameterized by the policy identifier: the store
/// hosts one aggregate instance per identifier, and every call addresses
/// exactly one of them.
#[async_trait]
pub trait PolicyRegistry: Send + Sync + 'static {
    /// Creates a policy with its two fixed identities and returns its key
    async fn create(&self, insurant: PartyId, oracle: PartyId) -> Result<PolicyId, RegistryError>;

    /// Returns a snapshot of the aggregate
    async fn get(&self, id: PolicyId) -> Result<Policy, RegistryError>;

    /// Returns the current lifecycle state
    async fn state(&self, id: PolicyId) -> Result<PolicyState, RegistryError>;

    /// Reads the threshold slot for a measure
    async fn measured_value(
        &self,
        id: PolicyId,
        measure_index: u8,
    ) -> Result<MeasureThreshold, RegistryError>;

    /// Configures the threshold slot for a measure (insurant only)
    async fn set_measured_value(
        &self,
        id: PolicyId,
        caller: PartyId,
        measure_index: u8,
        min: i64,
        max: i64,
    ) -> Result<(), RegistryError>;

    /// Submits the policy (insurant only, exactly once)
    async fn submit(
        &self,
        id: PolicyId,
        caller: PartyId,
        lat: i64,
        lon: i64,
        period_start: Timestamp,
        period_end: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Applies one oracle reading (oracle only)
    async fn update_measured_conditions(
        &self,
        id: PolicyId,
        caller: PartyId,
        measure_index: u8,
        value: i64,
        observed_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Returns the policy's fact log in recording order
    async fn facts(&self, id: PolicyId) -> Result<Vec<RecordedFact>, RegistryError>;
}
