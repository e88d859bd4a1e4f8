//! Access control for policy operations
//!
//! Every mutating operation declares a required caller role. The policy
//! knows exactly two identities - the insurant and the oracle - and callers
//! are compared for equality against the holder of the required role. A call
//! from any other identifier fails before any state is touched.

use core_kernel::PartyId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PolicyError;

/// The two roles a caller can hold on a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The policyholder: configures thresholds and submits the policy
    Insurant,
    /// The trusted data source: reports measured weather conditions
    Oracle,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Insurant => f.write_str("insurant"),
            Role::Oracle => f.write_str("oracle"),
        }
    }
}

/// The fixed two-party access list of a policy.
///
/// Both identifiers are set at creation and immutable for the life of the
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParties {
    pub insurant: PartyId,
    pub oracle: PartyId,
}

impl PolicyParties {
    /// Creates the access list
    pub fn new(insurant: PartyId, oracle: PartyId) -> Self {
        Self { insurant, oracle }
    }

    /// Returns the identity holding the given role
    pub fn holder_of(&self, role: Role) -> PartyId {
        match role {
            Role::Insurant => self.insurant,
            Role::Oracle => self.oracle,
        }
    }

    /// Checks that the caller holds the required role
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the caller is any other identifier,
    /// including the holder of the opposite role.
    pub fn require(&self, caller: PartyId, role: Role) -> Result<(), PolicyError> {
        if self.holder_of(role) == caller {
            Ok(())
        } else {
            Err(PolicyError::Unauthorized { required: role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_role_holder() {
        let parties = PolicyParties::new(PartyId::new(), PartyId::new());
        assert!(parties.require(parties.insurant, Role::Insurant).is_ok());
        assert!(parties.require(parties.oracle, Role::Oracle).is_ok());
    }

    #[test]
    fn test_require_rejects_opposite_role() {
        let parties = PolicyParties::new(PartyId::new(), PartyId::new());
        assert_eq!(
            parties.require(parties.oracle, Role::Insurant),
            Err(PolicyError::Unauthorized { required: Role::Insurant })
        );
        assert_eq!(
            parties.require(parties.insurant, Role::Oracle),
            Err(PolicyError::Unauthorized { required: Role::Oracle })
        );
    }

    #[test]
    fn test_require_rejects_strangers() {
        let parties = PolicyParties::new(PartyId::new(), PartyId::new());
        let stranger = PartyId::new();
        assert!(parties.require(stranger, Role::Insurant).is_err());
        assert!(parties.require(stranger, Role::Oracle).is_err());
    }
}
