//! Core Kernel - Foundational types for the weather settlement engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for policies and parties
//! - Epoch-based timestamps and coverage periods
//! - Fixed-point geographic coordinates

pub mod identifiers;
pub mod temporal;
pub mod geo;
pub mod error;

pub use identifiers::{PolicyId, PartyId};
pub use temporal::{Timestamp, PolicyPeriod, TemporalError};
pub use geo::{GeoPoint, COORD_SCALE};
pub use error::CoreError;
