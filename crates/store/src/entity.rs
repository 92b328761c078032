//! The [`Entity`] trait: per-kind schema metadata for the generic store.

use gympro_core::types::EntityId;
use gympro_core::validation::ValidationRule;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Schema descriptor implemented by every record kind held in an
/// [`EntityStore`](crate::EntityStore).
///
/// Records round-trip through their JSON wire form inside the store, so the
/// serde representation (camelCase field names) is the canonical one: rule
/// tables and default maps both speak it.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Singular kind name used in error messages and log lines.
    const ENTITY: &'static str;

    /// The record's assigned id.
    fn id(&self) -> EntityId;

    /// Overwrite the assigned id. Only the owning store calls this.
    fn set_id(&mut self, id: EntityId);

    /// The declarative rule table every create and update must satisfy.
    fn rules() -> &'static [ValidationRule];

    /// Wire-form defaults merged under any create draft.
    fn create_defaults() -> serde_json::Map<String, Value>;

    /// The fields substring filtering looks at, in wire form.
    fn searchable(&self) -> Vec<&str>;
}

/// Coerce a serialized value into its object form.
///
/// Entity records and DTOs always serialize to objects; anything else is a
/// caller bug surfaced by the store as an internal error.
pub(crate) fn object(value: Value) -> Option<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Like [`object`], but for statically known object literals such as the
/// `create_defaults` tables, where a non-object is unreachable.
pub(crate) fn object_or_empty(value: Value) -> serde_json::Map<String, Value> {
    object(value).unwrap_or_default()
}
