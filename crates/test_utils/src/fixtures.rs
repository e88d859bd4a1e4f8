//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common values across the settlement
//! engine. These fixtures are designed to be consistent and predictable for
//! unit tests.

use core_kernel::{GeoPoint, PartyId, PolicyId, PolicyPeriod, Timestamp};
use once_cell::sync::Lazy;
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard coverage start (2023-11-14T22:13:20Z)
    pub fn period_start() -> Timestamp {
        Timestamp::from_millis(1_700_000_000_000)
    }

    /// Standard coverage end, one day after the start
    pub fn period_end() -> Timestamp {
        Timestamp::from_millis(1_700_086_400_000)
    }

    /// A timestamp inside the standard coverage window
    pub fn mid_period() -> Timestamp {
        Timestamp::from_millis(1_700_040_000_000)
    }

    /// A timestamp just after the coverage window
    pub fn after_period() -> Timestamp {
        Self::period_end().offset(1)
    }

    /// The standard one-day coverage window
    pub fn one_day_period() -> PolicyPeriod {
        PolicyPeriod::new(Self::period_start(), Self::period_end())
            .expect("fixture period is ordered")
    }
}

/// Fixture for location test data
pub struct GeoFixtures;

impl GeoFixtures {
    /// Latitude of the reference insured location, degrees x 10^7
    pub const LAT: i64 = 504_637_582;

    /// Longitude of the reference insured location, degrees x 10^7
    pub const LON: i64 = 305_071_673;

    /// The reference insured location
    pub fn insured_location() -> GeoPoint {
        GeoPoint::new(Self::LAT, Self::LON)
    }
}

static INSURANT_ID: Lazy<PartyId> = Lazy::new(|| {
    PartyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").expect("valid uuid"))
});

static ORACLE_ID: Lazy<PartyId> = Lazy::new(|| {
    PartyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").expect("valid uuid"))
});

static POLICY_ID: Lazy<PolicyId> = Lazy::new(|| {
    PolicyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").expect("valid uuid"))
});

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic insurant identity
    pub fn insurant() -> PartyId {
        *INSURANT_ID
    }

    /// Deterministic oracle identity
    pub fn oracle() -> PartyId {
        *ORACLE_ID
    }

    /// Deterministic policy identifier
    pub fn policy_id() -> PolicyId {
        *POLICY_ID
    }

    /// A party unrelated to any fixture policy
    pub fn stranger() -> PartyId {
        PartyId::new()
    }
}
