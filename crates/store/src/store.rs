//! Generic in-memory entity collection.
//!
//! Every mutation goes through the record's JSON wire form: drafts and
//! patches are merged field-by-field over the current (or default) state,
//! validated against the entity's rule table, and only then decoded back
//! into the typed record. One code path therefore serves typed DTOs, form
//! drafts, and single-field patches alike.

use gympro_core::error::CoreError;
use gympro_core::search;
use gympro_core::types::EntityId;
use gympro_core::validation::{FieldViolation, evaluate_rules};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::entity::{Entity, object};

/// A typed in-memory collection with sequential id assignment.
///
/// Iteration order is insertion order, which the console relies on for
/// stable list views. Updates keep a record's position.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    rows: IndexMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        EntityStore {
            rows: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with fixture records.
    ///
    /// Fixture ids are kept as-is; fresh ids continue above the highest
    /// seeded one.
    pub fn seed(records: Vec<T>) -> Self {
        let mut next_id = 1;
        let mut rows = IndexMap::with_capacity(records.len());
        for record in records {
            next_id = next_id.max(record.id() + 1);
            rows.insert(record.id(), record);
        }
        EntityStore { rows, next_id }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Look up a record by id.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Insert a new record built from `draft` merged over the entity's
    /// defaults.
    ///
    /// Null fields in the draft are skipped, so partially filled DTOs fall
    /// back to the default table. Any id the draft carries is ignored; the
    /// store assigns the next sequential one.
    pub fn create(&mut self, draft: &impl Serialize) -> Result<T, CoreError> {
        let mut merged = T::create_defaults();
        merge_non_null(&mut merged, self.to_map(draft)?);
        // The id is store-assigned; a draft must not smuggle one in.
        merged.insert("id".to_string(), Value::from(0));

        let mut record = self.decode(&merged)?;
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.rows.insert(id, record.clone());
        tracing::debug!(entity = T::ENTITY, id, "record created");
        Ok(record)
    }

    /// Apply a patch to an existing record.
    ///
    /// Only non-null fields in `patch` are applied; everything else keeps
    /// its current value. The record's id and list position are preserved.
    pub fn update(&mut self, id: EntityId, patch: &impl Serialize) -> Result<T, CoreError> {
        let current = self.rows.get(&id).ok_or(CoreError::NotFound {
            entity: T::ENTITY,
            id,
        })?;

        let mut merged = self.to_map(current)?;
        let mut patch = self.to_map(patch)?;
        patch.remove("id");
        merge_non_null(&mut merged, patch);
        merged.insert("id".to_string(), Value::from(id));

        let record = self.decode(&merged)?;
        self.rows.insert(id, record.clone());
        tracing::debug!(entity = T::ENTITY, id, "record updated");
        Ok(record)
    }

    /// Overwrite a single wire-form field.
    ///
    /// Unlike [`update`](Self::update), a null value is applied rather than
    /// skipped, so this is the path that clears an optional field. The `id`
    /// field stays immutable here too.
    pub fn set_field(&mut self, id: EntityId, field: &str, value: Value) -> Result<T, CoreError> {
        let current = self.rows.get(&id).ok_or(CoreError::NotFound {
            entity: T::ENTITY,
            id,
        })?;

        let mut merged = self.to_map(current)?;
        if field != "id" {
            merged.insert(field.to_string(), value);
        }
        merged.insert("id".to_string(), Value::from(id));

        let record = self.decode(&merged)?;
        self.rows.insert(id, record.clone());
        tracing::debug!(entity = T::ENTITY, id, field, "field set");
        Ok(record)
    }

    /// Remove a record. Returns `false` if no record with `id` exists.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let removed = self.rows.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(entity = T::ENTITY, id, "record removed");
        }
        removed
    }

    /// Records whose searchable fields contain `query`, ignoring case.
    ///
    /// An empty or whitespace-only query returns every record.
    pub fn filter(&self, query: &str) -> Vec<&T> {
        self.list()
            .filter(|record| search::matches_any(record.searchable(), query))
            .collect()
    }

    // -- internals -----------------------------------------------------------

    fn to_map(&self, value: &impl Serialize) -> Result<serde_json::Map<String, Value>, CoreError> {
        let value = serde_json::to_value(value)
            .map_err(|err| CoreError::Internal(format!("{} encode failed: {err}", T::ENTITY)))?;
        object(value).ok_or_else(|| {
            CoreError::Internal(format!("{} draft is not a JSON object", T::ENTITY))
        })
    }

    /// Validate a merged wire-form record and decode it into `T`.
    fn decode(&self, merged: &serde_json::Map<String, Value>) -> Result<T, CoreError> {
        let result = evaluate_rules(T::rules(), merged);
        if !result.is_valid {
            return Err(CoreError::validation(T::ENTITY, result.violations));
        }
        serde_json::from_value(Value::Object(merged.clone())).map_err(|err| {
            CoreError::validation(
                T::ENTITY,
                vec![FieldViolation {
                    field: "record".to_string(),
                    message: format!("malformed record: {err}"),
                    value: None,
                }],
            )
        })
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge `patch` into `base`, skipping null fields (COALESCE semantics).
fn merge_non_null(
    base: &mut serde_json::Map<String, Value>,
    patch: serde_json::Map<String, Value>,
) {
    for (key, value) in patch {
        if !value.is_null() {
            base.insert(key, value);
        }
    }
}
