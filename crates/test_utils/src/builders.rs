//! Test Data Builders
//!
//! Provides builder patterns for constructing policies with sensible
//! defaults. Tests specify only the relevant fields while using defaults for
//! everything else.

use core_kernel::{PartyId, PolicyId};
use domain_policy::{MeasureType, Policy, PolicyRegistry};
use infra_store::InMemoryPolicyRegistry;

use crate::fixtures::{GeoFixtures, IdFixtures, TemporalFixtures};

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    id: PolicyId,
    insurant: PartyId,
    oracle: PartyId,
    thresholds: Vec<(MeasureType, i64, i64)>,
    submitted: bool,
    lat: i64,
    lon: i64,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a new builder with fixture identities and location
    pub fn new() -> Self {
        Self {
            id: IdFixtures::policy_id(),
            insurant: IdFixtures::insurant(),
            oracle: IdFixtures::oracle(),
            thresholds: Vec::new(),
            submitted: false,
            lat: GeoFixtures::LAT,
            lon: GeoFixtures::LON,
        }
    }

    /// Sets the policy ID
    pub fn with_id(mut self, id: PolicyId) -> Self {
        self.id = id;
        self
    }

    /// Sets the insurant identity
    pub fn with_insurant(mut self, insurant: PartyId) -> Self {
        self.insurant = insurant;
        self
    }

    /// Sets the oracle identity
    pub fn with_oracle(mut self, oracle: PartyId) -> Self {
        self.oracle = oracle;
        self
    }

    /// Adds a threshold configuration, applied before submission
    pub fn with_threshold(mut self, measure: MeasureType, min: i64, max: i64) -> Self {
        self.thresholds.push((measure, min, max));
        self
    }

    /// Sets the insured location
    pub fn with_location(mut self, lat: i64, lon: i64) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    /// Submits the policy over the standard one-day window during build
    pub fn submitted(mut self) -> Self {
        self.submitted = true;
        self
    }

    /// Builds the policy aggregate with buffered facts drained
    pub fn build(self) -> Policy {
        let mut policy = Policy::with_id(self.id, self.insurant, self.oracle);

        for (measure, min, max) in &self.thresholds {
            policy
                .set_measured_value(self.insurant, measure.index(), *min, *max)
                .expect("builder threshold configuration is valid");
        }

        if self.submitted {
            policy
                .submit(
                    self.insurant,
                    self.lat,
                    self.lon,
                    TemporalFixtures::period_start(),
                    TemporalFixtures::period_end(),
                )
                .expect("builder submission is valid");
        }

        policy.take_facts();
        policy
    }

    /// Replays the builder's operations against a registry and returns the
    /// new policy's identifier. Facts stay in the registry log.
    pub async fn seed(self, registry: &InMemoryPolicyRegistry) -> PolicyId {
        let id = registry
            .create(self.insurant, self.oracle)
            .await
            .expect("registry create succeeds");

        for (measure, min, max) in &self.thresholds {
            registry
                .set_measured_value(id, self.insurant, measure.index(), *min, *max)
                .await
                .expect("builder threshold configuration is valid");
        }

        if self.submitted {
            registry
                .submit(
                    id,
                    self.insurant,
                    self.lat,
                    self.lon,
                    TemporalFixtures::period_start(),
                    TemporalFixtures::period_end(),
                )
                .await
                .expect("builder submission is valid");
        }

        id
    }
}
