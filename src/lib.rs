//! Parametric weather-insurance settlement engine.
//!
//! This facade crate re-exports the workspace layers for consumers that
//! want the whole engine behind a single dependency:
//!
//! - [`core_kernel`] - identifiers, timestamps, fixed-point coordinates
//! - [`domain_policy`] - the policy aggregate and its settlement logic
//! - [`infra_store`] - the in-memory policy registry and fact log

pub use core_kernel;
pub use domain_policy;
pub use infra_store;
