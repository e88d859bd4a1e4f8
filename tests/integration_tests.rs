//! Integration tests for Weathercover
//!
//! These tests verify end-to-end settlement workflows with the domain,
//! store, and shared test utilities working together.

use domain_policy::{MeasureType, PolicyError, PolicyRegistry, PolicyState, RegistryError};
use infra_store::InMemoryPolicyRegistry;
use test_utils::{
    assert_claim_declined, assert_claim_issued, assert_fact_types, assert_no_facts, assert_state,
    IdFixtures, TemporalFixtures, TestPolicyBuilder,
};

mod settlement_workflow {
    use super::*;

    /// A policy conditioned on temperature settles with a claim when the
    /// oracle reports a breach inside the coverage window.
    #[tokio::test]
    async fn breach_inside_the_window_issues_a_claim() {
        let registry = InMemoryPolicyRegistry::new();
        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        registry
            .update_measured_conditions(
                id,
                IdFixtures::oracle(),
                MeasureType::Temperature.index(),
                31,
                TemporalFixtures::mid_period(),
            )
            .await
            .unwrap();

        let policy = registry.get(id).await.unwrap();
        assert_state(&policy, PolicyState::ClaimIssued);

        let log = registry.facts(id).await.unwrap();
        let facts: Vec<_> = log.into_iter().map(|entry| entry.fact).collect();
        assert_fact_types(&facts, &["PolicySubmitted", "IssueClaim"]);
        assert_claim_issued(
            &facts[1..],
            IdFixtures::insurant(),
            "Temperature limits exceeded",
        );
    }

    /// In-range readings keep the policy live and record nothing.
    #[tokio::test]
    async fn in_range_readings_keep_the_policy_live() {
        let registry = InMemoryPolicyRegistry::new();
        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        for value in [15, 20, 30] {
            registry
                .update_measured_conditions(
                    id,
                    IdFixtures::oracle(),
                    MeasureType::Temperature.index(),
                    value,
                    TemporalFixtures::mid_period(),
                )
                .await
                .unwrap();
        }

        assert_eq!(registry.state(id).await.unwrap(), PolicyState::Submitted);
        let extra = registry.facts_since(id, 1).unwrap();
        assert_no_facts(&extra.into_iter().map(|entry| entry.fact).collect::<Vec<_>>());
    }

    /// An extreme reading of a measure the insurant never configured is a
    /// no-op while the window is open.
    #[tokio::test]
    async fn unconfigured_measures_never_settle() {
        let registry = InMemoryPolicyRegistry::new();
        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        registry
            .update_measured_conditions(
                id,
                IdFixtures::oracle(),
                MeasureType::Humidity.index(),
                1_000,
                TemporalFixtures::mid_period(),
            )
            .await
            .unwrap();

        assert_eq!(registry.state(id).await.unwrap(), PolicyState::Submitted);
    }

    /// A reading stamped after the window declines the claim even when its
    /// measure was never configured.
    #[tokio::test]
    async fn late_reading_declines_the_claim() {
        let registry = InMemoryPolicyRegistry::new();
        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        registry
            .update_measured_conditions(
                id,
                IdFixtures::oracle(),
                MeasureType::Pressure.index(),
                16,
                TemporalFixtures::after_period(),
            )
            .await
            .unwrap();

        let policy = registry.get(id).await.unwrap();
        assert_state(&policy, PolicyState::Declined);

        let tail = registry.facts_since(id, 1).unwrap();
        let facts: Vec<_> = tail.into_iter().map(|entry| entry.fact).collect();
        assert_claim_declined(&facts, IdFixtures::insurant());
    }

    /// Once settled, a policy rejects every further reading and records no
    /// further facts.
    #[tokio::test]
    async fn settled_policies_are_final() {
        let registry = InMemoryPolicyRegistry::new();
        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        registry
            .update_measured_conditions(
                id,
                IdFixtures::oracle(),
                MeasureType::Temperature.index(),
                31,
                TemporalFixtures::mid_period(),
            )
            .await
            .unwrap();

        let result = registry
            .update_measured_conditions(
                id,
                IdFixtures::oracle(),
                MeasureType::Temperature.index(),
                20,
                TemporalFixtures::mid_period(),
            )
            .await;
        assert_eq!(
            result,
            Err(RegistryError::Domain(PolicyError::InvalidState {
                state: PolicyState::ClaimIssued,
            }))
        );
        assert_eq!(registry.facts(id).await.unwrap().len(), 2);
    }
}

mod multi_policy_host {
    use super::*;
    use core_kernel::PartyId;

    /// Settling one policy leaves unrelated policies untouched.
    #[tokio::test]
    async fn policies_settle_independently() {
        let registry = InMemoryPolicyRegistry::new();

        let first = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        let other_insurant = PartyId::new();
        let other_oracle = PartyId::new();
        let second = TestPolicyBuilder::new()
            .with_insurant(other_insurant)
            .with_oracle(other_oracle)
            .with_threshold(MeasureType::WindSpeed, 0, 40)
            .submitted()
            .seed(&registry)
            .await;

        registry
            .update_measured_conditions(
                first,
                IdFixtures::oracle(),
                MeasureType::Temperature.index(),
                31,
                TemporalFixtures::mid_period(),
            )
            .await
            .unwrap();

        assert_eq!(registry.state(first).await.unwrap(), PolicyState::ClaimIssued);
        assert_eq!(registry.state(second).await.unwrap(), PolicyState::Submitted);
        assert_eq!(registry.facts(second).await.unwrap().len(), 1);
    }

    /// A party's authority is scoped to its own policy: one policy's oracle
    /// is a stranger to every other policy.
    #[tokio::test]
    async fn authority_does_not_cross_policies() {
        let registry = InMemoryPolicyRegistry::new();

        let id = TestPolicyBuilder::new()
            .with_threshold(MeasureType::Temperature, 15, 30)
            .submitted()
            .seed(&registry)
            .await;

        let foreign_oracle = PartyId::new();
        let result = registry
            .update_measured_conditions(
                id,
                foreign_oracle,
                MeasureType::Temperature.index(),
                31,
                TemporalFixtures::mid_period(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RegistryError::Domain(PolicyError::Unauthorized { .. }))
        ));
        assert_eq!(registry.state(id).await.unwrap(), PolicyState::Submitted);
    }
}

mod configuration_workflow {
    use super::*;

    /// The full pre-submission flow: configure, reconfigure, submit once.
    #[tokio::test]
    async fn configure_then_submit_exactly_once() {
        let registry = InMemoryPolicyRegistry::new();
        let id = registry
            .create(IdFixtures::insurant(), IdFixtures::oracle())
            .await
            .unwrap();

        registry
            .set_measured_value(id, IdFixtures::insurant(), MeasureType::Temperature.index(), 10, 30)
            .await
            .unwrap();
        registry
            .set_measured_value(id, IdFixtures::insurant(), MeasureType::Temperature.index(), 15, 30)
            .await
            .unwrap();

        let slot = registry
            .measured_value(id, MeasureType::Temperature.index())
            .await
            .unwrap();
        assert_eq!((slot.min, slot.max, slot.is_set), (15, 30, true));

        registry
            .submit(
                id,
                IdFixtures::insurant(),
                test_utils::GeoFixtures::LAT,
                test_utils::GeoFixtures::LON,
                TemporalFixtures::period_start(),
                TemporalFixtures::period_end(),
            )
            .await
            .unwrap();

        let result = registry
            .submit(
                id,
                IdFixtures::insurant(),
                test_utils::GeoFixtures::LAT,
                test_utils::GeoFixtures::LON,
                TemporalFixtures::period_start(),
                TemporalFixtures::period_end(),
            )
            .await;
        assert_eq!(
            result,
            Err(RegistryError::Domain(PolicyError::AlreadySubmitted))
        );

        // Thresholds freeze at submission.
        let result = registry
            .set_measured_value(id, IdFixtures::insurant(), MeasureType::Humidity.index(), 0, 90)
            .await;
        assert!(matches!(
            result,
            Err(RegistryError::Domain(PolicyError::InvalidState { .. }))
        ));
    }
}
