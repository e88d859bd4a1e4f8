//! Storage infrastructure for the settlement engine
//!
//! Provides the in-memory adapter for the [`domain_policy::PolicyRegistry`]
//! port. The store is the only shared mutable resource in the system: a
//! single lock serializes mutations so that every operation is one atomic,
//! all-or-nothing step, and every committed mutation is immediately visible
//! to subsequent reads.

pub mod store;

pub use store::InMemoryPolicyRegistry;
