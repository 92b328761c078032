//! Entity form workflow.
//!
//! A form drafts field edits as wire-form JSON and only touches the owning
//! store on submit, so cancelling never leaks a half-edited record. The
//! same workflow serves both the create modal (draft starts from the
//! entity's defaults) and the edit modal (draft starts from the current
//! record).

use gympro_core::error::CoreError;
use gympro_core::types::EntityId;
use serde_json::Value;

use gympro_store::entity::Entity;
use gympro_store::store::EntityStore;

/// Whether a submit inserts a new record or patches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No modal open.
    Idle,
    /// Modal open, collecting edits.
    Drafting(FormMode),
    /// Commit in flight.
    Submitting(FormMode),
}

/// Draft state for one entity kind's create/edit modal.
#[derive(Debug, Clone)]
pub struct EntityForm<T: Entity> {
    phase: FormPhase,
    draft: serde_json::Map<String, Value>,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Entity> EntityForm<T> {
    pub fn new() -> Self {
        EntityForm {
            phase: FormPhase::Idle,
            draft: serde_json::Map::new(),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Open the create modal with the entity's defaults pre-filled.
    pub fn open_create(&mut self) {
        self.draft = T::create_defaults();
        self.phase = FormPhase::Drafting(FormMode::Create);
    }

    /// Open the edit modal pre-filled from an existing record.
    pub fn open_edit(&mut self, record: &T) -> Result<(), CoreError> {
        let value = serde_json::to_value(record)
            .map_err(|err| CoreError::Internal(format!("{} encode failed: {err}", T::ENTITY)))?;
        let Value::Object(mut draft) = value else {
            return Err(CoreError::Internal(format!(
                "{} record is not a JSON object",
                T::ENTITY
            )));
        };
        draft.remove("id");
        self.draft = draft;
        self.phase = FormPhase::Drafting(FormMode::Edit(record.id()));
        Ok(())
    }

    /// Stage one field edit. Ignored unless the form is drafting.
    pub fn set_field(&mut self, field: &str, value: Value) {
        if matches!(self.phase, FormPhase::Drafting(_)) {
            self.draft.insert(field.to_string(), value);
        }
    }

    /// Read a staged field back, for rendering the modal.
    pub fn field(&self, field: &str) -> Option<&Value> {
        self.draft.get(field)
    }

    /// Close the modal, discarding the draft.
    pub fn cancel(&mut self) {
        self.phase = FormPhase::Idle;
        self.draft.clear();
    }

    /// Commit the draft to the owning store.
    ///
    /// On success the form returns to idle with the draft cleared. On a
    /// validation failure the form returns to drafting with the draft
    /// intact so the operator can correct it.
    pub fn submit(&mut self, store: &mut EntityStore<T>) -> Result<T, CoreError> {
        let mode = match self.phase {
            FormPhase::Drafting(mode) => mode,
            FormPhase::Idle | FormPhase::Submitting(_) => {
                return Err(CoreError::Internal(format!(
                    "{} form submitted while not drafting",
                    T::ENTITY
                )));
            }
        };
        self.phase = FormPhase::Submitting(mode);

        let result = match mode {
            FormMode::Create => store.create(&self.draft),
            FormMode::Edit(id) => store.update(id, &self.draft),
        };

        match result {
            Ok(record) => {
                self.phase = FormPhase::Idle;
                self.draft.clear();
                Ok(record)
            }
            Err(err) => {
                self.phase = FormPhase::Drafting(mode);
                Err(err)
            }
        }
    }
}

impl<T: Entity> Default for EntityForm<T> {
    fn default() -> Self {
        Self::new()
    }
}
