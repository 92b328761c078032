//! Pure domain logic for the GymPro console.
//!
//! This crate has zero internal dependencies and no I/O so it can be shared
//! by the store layer, the console wiring, and any future CLI or reporting
//! tooling. It contains:
//!
//! - shared type aliases ([`types`])
//! - the closed operator-role set ([`roles`])
//! - the domain error taxonomy ([`error`])
//! - case-insensitive search helpers ([`search`])
//! - the declarative validation rule engine ([`validation`])

pub mod error;
pub mod roles;
pub mod search;
pub mod types;
pub mod validation;
