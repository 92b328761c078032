//! Staff-facing admin console engine.
//!
//! Wires the entity collections from `gympro-store` together with
//! authentication, role-based view authorization, form workflows, and a
//! persisted session, behind a single [`state::App`] facade any frontend
//! can drive.

pub mod auth;
pub mod authorizer;
pub mod config;
pub mod form;
pub mod state;

pub use auth::session::Session;
pub use authorizer::{Access, View};
pub use config::ConsoleConfig;
pub use state::App;
