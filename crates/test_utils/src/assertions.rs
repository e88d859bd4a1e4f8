//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::PartyId;
use domain_policy::{Policy, PolicyFact, PolicyState};

/// Asserts the policy is in the expected lifecycle state
pub fn assert_state(policy: &Policy, expected: PolicyState) {
    assert_eq!(
        policy.state(),
        expected,
        "Expected state {} (code {}), got {} (code {})",
        expected,
        expected.code(),
        policy.state(),
        policy.state().code()
    );
}

/// Asserts the fact list carries exactly the given fact types, in order
pub fn assert_fact_types(facts: &[PolicyFact], expected: &[&str]) {
    let actual: Vec<&str> = facts.iter().map(PolicyFact::fact_type).collect();
    assert_eq!(
        actual, expected,
        "Fact sequence mismatch: got {actual:?}, expected {expected:?}"
    );
}

/// Asserts a single `IssueClaim` fact with the given reason
pub fn assert_claim_issued(facts: &[PolicyFact], insurant: PartyId, reason: &str) {
    assert_eq!(facts.len(), 1, "Expected one fact, got {facts:?}");
    assert_eq!(
        facts[0],
        PolicyFact::IssueClaim {
            insurant,
            reason: reason.to_string(),
        },
        "Expected IssueClaim for {insurant} with reason {reason:?}"
    );
}

/// Asserts a single `DeclineClaim` fact for the insurant
pub fn assert_claim_declined(facts: &[PolicyFact], insurant: PartyId) {
    assert_eq!(facts.len(), 1, "Expected one fact, got {facts:?}");
    assert_eq!(
        facts[0],
        PolicyFact::DeclineClaim { insurant },
        "Expected DeclineClaim for {insurant}"
    );
}

/// Asserts no facts were produced
pub fn assert_no_facts(facts: &[PolicyFact]) {
    assert!(facts.is_empty(), "Expected no facts, got {facts:?}");
}
