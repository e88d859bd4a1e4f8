//! Policy domain errors
//!
//! Every operation is all-or-nothing: an error is raised synchronously at
//! the point of the call and leaves no partial state behind. There is no
//! recovery path inside the engine - a caller must fix the violated
//! precondition and retry as a fresh call.

use core_kernel::TemporalError;
use thiserror::Error;

use crate::access::Role;
use crate::aggregate::PolicyState;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Caller lacks the required role for the operation
    #[error("Caller is not the {required} of this policy")]
    Unauthorized { required: Role },

    /// Measure index outside the closed enumeration
    #[error("Invalid measure index {index}: supported indices are 0-5")]
    InvalidMeasure { index: u8 },

    /// Submission attempted outside the Created state
    #[error("Policy has already been submitted")]
    AlreadySubmitted,

    /// Operation not permitted in the current lifecycle state
    #[error("Operation not permitted in state {state}")]
    InvalidState { state: PolicyState },

    /// Submitted coverage period is malformed
    #[error("Invalid coverage period: {0}")]
    InvalidPeriod(#[from] TemporalError),
}
