//! Services
//!
//! Orchestration over the stores and calculators. Services borrow their
//! collaborators from the caller rather than owning them, so the same
//! stores can back several services in turn.

pub mod rebates;
pub mod transactions;
