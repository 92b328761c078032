//! In-memory entity collections for the GymPro console.
//!
//! Each entity kind (members, staff, classes, equipment, payments,
//! attendance) lives in its own [`EntityStore`], a typed collection with
//! sequential id assignment, patch-style updates, declarative validation,
//! and substring filtering. The crate also ships the demo fixtures the
//! console seeds on first run and the aggregate counters the dashboard and
//! reports views render.

pub mod entity;
pub mod fixtures;
pub mod models;
pub mod stats;
pub mod store;

pub use entity::Entity;
pub use store::EntityStore;
