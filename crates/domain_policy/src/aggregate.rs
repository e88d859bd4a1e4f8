//! Policy Aggregate Root
//!
//! The Policy aggregate is the consistency boundary for one insurance
//! contract. Every operation runs to completion as a single atomic step:
//! it either fully succeeds (with any associated facts buffered) or fails
//! with no observable side effect.
//!
//! # Invariants
//!
//! - `insurant` and `oracle` are fixed at creation and never change
//! - Location and period are write-once; only `submit` sets them, and only
//!   while the policy is in `Created`
//! - Threshold slots may be overwritten arbitrarily often in `Created`;
//!   each overwrite replaces both bounds and marks the slot configured
//! - The state machine is monotonically forward-only; terminal states are
//!   permanent records of outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{GeoPoint, PartyId, PolicyId, PolicyPeriod, Timestamp};

use crate::access::{PolicyParties, Role};
use crate::error::PolicyError;
use crate::evaluation::{self, Verdict};
use crate::events::PolicyFact;
use crate::measure::{MeasureThreshold, MeasureType, ThresholdTable};

/// Policy lifecycle states
///
/// Exposed on the wire as integer codes `0..=3`. Valid transitions:
/// - Created -> Submitted (via `submit`)
/// - Submitted -> ClaimIssued (breach within the period)
/// - Submitted -> Declined (reading after the period end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyState {
    /// Thresholds may be configured; location and period are not yet fixed
    Created,
    /// Live: oracle readings drive the outcome
    Submitted,
    /// Terminal: a configured measure breached its range within the period
    ClaimIssued,
    /// Terminal: a reading arrived after the period ended
    Declined,
}

impl PolicyState {
    /// Returns the wire code of this state
    pub const fn code(self) -> u8 {
        match self {
            PolicyState::Created => 0,
            PolicyState::Submitted => 1,
            PolicyState::ClaimIssued => 2,
            PolicyState::Declined => 3,
        }
    }

    /// Resolves a wire code into a state, if valid
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PolicyState::Created),
            1 => Some(PolicyState::Submitted),
            2 => Some(PolicyState::ClaimIssued),
            3 => Some(PolicyState::Declined),
            _ => None,
        }
    }

    /// Returns true once the outcome is fixed
    pub const fn is_terminal(self) -> bool {
        matches!(self, PolicyState::ClaimIssued | PolicyState::Declined)
    }
}

impl fmt::Display for PolicyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyState::Created => "Created",
            PolicyState::Submitted => "Submitted",
            PolicyState::ClaimIssued => "ClaimIssued",
            PolicyState::Declined => "Declined",
        };
        f.write_str(name)
    }
}

/// The Policy aggregate root
///
/// One instance per contract. The aggregate is never deleted; once a
/// terminal state is reached it stands as the permanent record of the
/// outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Aggregate key in the multi-policy host
    id: PolicyId,
    /// Fixed two-party access list
    parties: PolicyParties,
    /// Insured location, set exactly once at submission
    location: Option<GeoPoint>,
    /// Coverage window, set exactly once at submission
    period: Option<PolicyPeriod>,
    /// Per-measure acceptance thresholds
    thresholds: ThresholdTable,
    /// Current lifecycle state
    state: PolicyState,
    /// Facts buffered since the last drain
    #[serde(skip)]
    facts: Vec<PolicyFact>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last mutation timestamp
    updated_at: DateTime<Utc>,
}

impl Policy {
    /// Creates a fresh policy with a time-ordered identifier
    pub fn new(insurant: PartyId, oracle: PartyId) -> Self {
        Self::with_id(PolicyId::new_v7(), insurant, oracle)
    }

    /// Creates a fresh policy under a caller-chosen identifier
    pub fn with_id(id: PolicyId, insurant: PartyId, oracle: PartyId) -> Self {
        let now = Utc::now();
        Self {
            id,
            parties: PolicyParties::new(insurant, oracle),
            location: None,
            period: None,
            thresholds: ThresholdTable::new(),
            state: PolicyState::Created,
            facts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the policy identifier
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the insurant identity
    pub fn insurant(&self) -> PartyId {
        self.parties.insurant
    }

    /// Returns the oracle identity
    pub fn oracle(&self) -> PartyId {
        self.parties.oracle
    }

    /// Returns the access list
    pub fn parties(&self) -> &PolicyParties {
        &self.parties
    }

    /// Returns the current lifecycle state
    pub fn state(&self) -> PolicyState {
        self.state
    }

    /// Returns the insured location, if submitted
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Returns the coverage window, if submitted
    pub fn period(&self) -> Option<PolicyPeriod> {
        self.period
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last mutation timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Drains and returns the facts buffered since the last call
    pub fn take_facts(&mut self) -> Vec<PolicyFact> {
        std::mem::take(&mut self.facts)
    }

    /// Configures the acceptance range for one measure
    ///
    /// Insurant only. Repeated calls replace the prior configuration; the
    /// latest call wins.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not the insurant
    /// - `InvalidMeasure` if the index is outside `0..=5`
    /// - `InvalidState` once the policy has left `Created`
    pub fn set_measured_value(
        &mut self,
        caller: PartyId,
        measure_index: u8,
        min: i64,
        max: i64,
    ) -> Result<(), PolicyError> {
        self.parties.require(caller, Role::Insurant)?;
        let measure = Self::resolve_measure(measure_index)?;

        if self.state != PolicyState::Created {
            return Err(PolicyError::InvalidState { state: self.state });
        }

        self.thresholds.set(measure, min, max);
        self.touch();
        Ok(())
    }

    /// Reads the acceptance range for one measure
    ///
    /// Callable by anyone. Unset slots report `is_set = false` with zero
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasure` if the index is outside `0..=5`.
    pub fn measured_value(&self, measure_index: u8) -> Result<MeasureThreshold, PolicyError> {
        let measure = Self::resolve_measure(measure_index)?;
        Ok(self.thresholds.get(measure))
    }

    /// Locks in location and period and makes the policy live
    ///
    /// Insurant only; exactly one successful submission is possible per
    /// policy. Emits `PolicySubmitted`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not the insurant
    /// - `AlreadySubmitted` for every call after the first success,
    ///   including retries with identical arguments
    /// - `InvalidPeriod` if `period_start >= period_end`
    pub fn submit(
        &mut self,
        caller: PartyId,
        lat: i64,
        lon: i64,
        period_start: Timestamp,
        period_end: Timestamp,
    ) -> Result<(), PolicyError> {
        self.parties.require(caller, Role::Insurant)?;

        if self.state != PolicyState::Created {
            return Err(PolicyError::AlreadySubmitted);
        }

        let period = PolicyPeriod::new(period_start, period_end)?;

        self.location = Some(GeoPoint::new(lat, lon));
        self.period = Some(period);
        self.state = PolicyState::Submitted;
        self.facts.push(PolicyFact::PolicySubmitted {
            lat,
            lon,
            period_start,
            period_end,
            insurant: self.parties.insurant,
        });
        self.touch();
        Ok(())
    }

    /// Applies one oracle reading to the policy
    ///
    /// Oracle only. The measure index is validated regardless of the current
    /// state; evaluation itself only runs while the policy is `Submitted`.
    /// A late reading declines the claim before thresholds are consulted; a
    /// breach of a configured measure issues the claim; anything else is a
    /// successful no-op.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not the oracle
    /// - `InvalidMeasure` if the index is outside `0..=5`
    /// - `InvalidState` while the policy is `Created` or once it is terminal
    pub fn update_measured_conditions(
        &mut self,
        caller: PartyId,
        measure_index: u8,
        value: i64,
        observed_at: Timestamp,
    ) -> Result<(), PolicyError> {
        self.parties.require(caller, Role::Oracle)?;
        let measure = Self::resolve_measure(measure_index)?;

        if self.state != PolicyState::Submitted {
            return Err(PolicyError::InvalidState { state: self.state });
        }
        let Some(period) = self.period else {
            // Submitted implies a period; reject rather than panic if the
            // invariant is ever violated by a corrupted record.
            return Err(PolicyError::InvalidState { state: self.state });
        };

        match evaluation::assess(&self.thresholds, &period, measure, value, observed_at) {
            Verdict::AfterPeriod => {
                self.state = PolicyState::Declined;
                self.facts.push(PolicyFact::DeclineClaim {
                    insurant: self.parties.insurant,
                });
                self.touch();
            }
            Verdict::OutOfRange(breached) => {
                self.state = PolicyState::ClaimIssued;
                self.facts.push(PolicyFact::IssueClaim {
                    insurant: self.parties.insurant,
                    reason: evaluation::breach_reason(breached),
                });
                self.touch();
            }
            Verdict::InRange => {
                // Within bounds or unconfigured: the call succeeds with no
                // transition and no fact.
            }
        }

        Ok(())
    }

    fn resolve_measure(measure_index: u8) -> Result<MeasureType, PolicyError> {
        MeasureType::from_index(measure_index)
            .ok_or(PolicyError::InvalidMeasure { index: measure_index })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
