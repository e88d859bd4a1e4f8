//! Domain facts emitted by the policy aggregate
//!
//! Facts are the observable outcomes of policy operations: an explicit,
//! typed list that external collaborators poll. Each fact carries exactly
//! the fields of its wire contract.

use core_kernel::{PartyId, Timestamp};
use serde::{Deserialize, Serialize};

/// Observable domain facts produced by policy operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyFact {
    /// The insurant locked in location and period; the policy is live
    PolicySubmitted {
        /// Latitude, degrees x 10^7
        lat: i64,
        /// Longitude, degrees x 10^7
        lon: i64,
        period_start: Timestamp,
        period_end: Timestamp,
        insurant: PartyId,
    },

    /// A configured measure breached its acceptance range within the period
    IssueClaim {
        insurant: PartyId,
        /// Human-readable breach description, e.g. "Temperature limits exceeded"
        reason: String,
    },

    /// A reading arrived after the period ended; the claim is declined
    DeclineClaim { insurant: PartyId },
}

impl PolicyFact {
    /// Returns the fact type name
    pub fn fact_type(&self) -> &'static str {
        match self {
            PolicyFact::PolicySubmitted { .. } => "PolicySubmitted",
            PolicyFact::IssueClaim { .. } => "IssueClaim",
            PolicyFact::DeclineClaim { .. } => "DeclineClaim",
        }
    }

    /// Returns the insurant this fact concerns
    pub fn insurant(&self) -> PartyId {
        match self {
            PolicyFact::PolicySubmitted { insurant, .. } => *insurant,
            PolicyFact::IssueClaim { insurant, .. } => *insurant,
            PolicyFact::DeclineClaim { insurant } => *insurant,
        }
    }
}
