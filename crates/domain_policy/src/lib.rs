//! Weather Policy Domain
//!
//! This crate implements the settlement logic for parametric weather
//! insurance: an insurant configures per-measure acceptance thresholds and
//! submits a policy for a location and time window, a trusted oracle reports
//! measured conditions, and the engine decides autonomously whether to issue
//! a claim, decline it, or keep waiting.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Aggregate**: [`Policy`] is the single aggregate root and consistency boundary
//! - **Value Objects**: [`MeasureType`], [`MeasureThreshold`], [`PolicyParties`]
//! - **Evaluator**: the ordered decline/breach decision in [`evaluation`]
//! - **Domain Facts**: [`PolicyFact`] - `PolicySubmitted`, `IssueClaim`, `DeclineClaim`
//!
//! # Policy Lifecycle
//!
//! ```text
//! Created -> Submitted -> ClaimIssued
//!                     \-> Declined
//! ```
//!
//! Terminal states are permanent records of outcome; no transition ever
//! moves backward.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{Policy, MeasureType};
//!
//! let mut policy = Policy::new(insurant, oracle);
//! policy.set_measured_value(insurant, MeasureType::Temperature.index(), 10, 30)?;
//! policy.submit(insurant, lat, lon, period_start, period_end)?;
//! policy.update_measured_conditions(oracle, MeasureType::Temperature.index(), 31, now)?;
//! assert_eq!(policy.state().code(), 2); // ClaimIssued
//! ```

pub mod access;
pub mod aggregate;
pub mod error;
pub mod evaluation;
pub mod events;
pub mod measure;
pub mod ports;

pub use access::{PolicyParties, Role};
pub use aggregate::{Policy, PolicyState};
pub use error::PolicyError;
pub use evaluation::Verdict;
pub use events::PolicyFact;
pub use measure::{MeasureThreshold, MeasureType, ThresholdTable};
pub use ports::{PolicyRegistry, RecordedFact, RegistryError};
