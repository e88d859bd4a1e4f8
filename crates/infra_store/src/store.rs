//! In-memory policy registry
//!
//! Aggregates and their fact logs live under one `RwLock`, which is what
//! makes every mutation a single serializable step: the handler clones the
//! stored aggregate, applies the domain operation to the clone, and commits
//! the clone together with its drained facts only on success. A rejected
//! operation therefore leaves both the aggregate and the log untouched.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{PartyId, PolicyId, Timestamp};
use domain_policy::{
    MeasureThreshold, Policy, PolicyError, PolicyRegistry, PolicyState, RecordedFact,
    RegistryError,
};

#[derive(Default)]
struct StoreInner {
    policies: HashMap<PolicyId, Policy>,
    fact_logs: HashMap<PolicyId, Vec<RecordedFact>>,
}

/// Lock-per-store registry backed by process memory.
///
/// Suitable as the system of record for a single-process deployment and as
/// the backing store in tests.
#[derive(Default)]
pub struct InMemoryPolicyRegistry {
    inner: RwLock<StoreInner>,
}

impl InMemoryPolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of policies currently held
    pub fn len(&self) -> usize {
        self.read_inner(|inner| inner.policies.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Facts recorded at or after `from_sequence`, for incremental polling
    pub fn facts_since(
        &self,
        id: PolicyId,
        from_sequence: u64,
    ) -> Result<Vec<RecordedFact>, RegistryError> {
        self.read_inner(|inner| {
            if !inner.policies.contains_key(&id) {
                return Err(RegistryError::NotFound(id));
            }
            let log = inner.fact_logs.get(&id).map(Vec::as_slice).unwrap_or(&[]);
            Ok(log
                .iter()
                .filter(|entry| entry.sequence >= from_sequence)
                .cloned()
                .collect())
        })
    }

    fn read_inner<R>(&self, f: impl FnOnce(&StoreInner) -> R) -> R {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&inner)
    }

    fn read_policy<R>(
        &self,
        id: PolicyId,
        f: impl FnOnce(&Policy) -> Result<R, PolicyError>,
    ) -> Result<R, RegistryError> {
        self.read_inner(|inner| {
            let policy = inner.policies.get(&id).ok_or(RegistryError::NotFound(id))?;
            Ok(f(policy)?)
        })
    }

    /// Clone-apply-commit over one aggregate. The closure runs against a
    /// working copy; only a successful run replaces the stored aggregate and
    /// appends its facts.
    fn mutate<R>(
        &self,
        id: PolicyId,
        f: impl FnOnce(&mut Policy) -> Result<R, PolicyError>,
    ) -> Result<R, RegistryError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut working = inner
            .policies
            .get(&id)
            .ok_or(RegistryError::NotFound(id))?
            .clone();

        let out = f(&mut working)?;

        let facts = working.take_facts();
        let state = working.state();
        inner.policies.insert(id, working);

        if !facts.is_empty() {
            let log = inner.fact_logs.entry(id).or_default();
            let base = log.len() as u64;
            let recorded_at = Utc::now();
            for (offset, fact) in facts.into_iter().enumerate() {
                tracing::info!(
                    policy_id = %id,
                    fact = fact.fact_type(),
                    state = %state,
                    "Recorded policy fact"
                );
                log.push(RecordedFact {
                    policy_id: id,
                    sequence: base + offset as u64,
                    fact,
                    recorded_at,
                });
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl PolicyRegistry for InMemoryPolicyRegistry {
    async fn create(&self, insurant: PartyId, oracle: PartyId) -> Result<PolicyId, RegistryError> {
        let policy = Policy::new(insurant, oracle);
        let id = policy.id();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.policies.insert(id, policy);
        tracing::info!(policy_id = %id, %insurant, %oracle, "Created policy");
        Ok(id)
    }

    async fn get(&self, id: PolicyId) -> Result<Policy, RegistryError> {
        self.read_policy(id, |policy| Ok(policy.clone()))
    }

    async fn state(&self, id: PolicyId) -> Result<PolicyState, RegistryError> {
        self.read_policy(id, |policy| Ok(policy.state()))
    }

    async fn measured_value(
        &self,
        id: PolicyId,
        measure_index: u8,
    ) -> Result<MeasureThreshold, RegistryError> {
        self.read_policy(id, |policy| policy.measured_value(measure_index))
    }

    async fn set_measured_value(
        &self,
        id: PolicyId,
        caller: PartyId,
        measure_index: u8,
        min: i64,
        max: i64,
    ) -> Result<(), RegistryError> {
        self.mutate(id, |policy| {
            policy.set_measured_value(caller, measure_index, min, max)
        })
    }

    async fn submit(
        &self,
        id: PolicyId,
        caller: PartyId,
        lat: i64,
        lon: i64,
        period_start: Timestamp,
        period_end: Timestamp,
    ) -> Result<(), RegistryError> {
        self.mutate(id, |policy| {
            policy.submit(caller, lat, lon, period_start, period_end)
        })
    }

    async fn update_measured_conditions(
        &self,
        id: PolicyId,
        caller: PartyId,
        measure_index: u8,
        value: i64,
        observed_at: Timestamp,
    ) -> Result<(), RegistryError> {
        self.mutate(id, |policy| {
            policy.update_measured_conditions(caller, measure_index, value, observed_at)
        })
    }

    async fn facts(&self, id: PolicyId) -> Result<Vec<RecordedFact>, RegistryError> {
        self.facts_since(id, 0)
    }
}
