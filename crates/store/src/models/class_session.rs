//! Scheduled class entity model and DTOs.

use gympro_core::types::EntityId;
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::{ClassCategory, ClassStatus, DayOfWeek};

/// A weekly scheduled class on the timetable.
///
/// `start_time` and `end_time` are display strings ("07:00"), not parsed
/// clock values; the console only ever renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub trainer: String,
    pub trainer_avatar: String,
    pub category: ClassCategory,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub max_participants: u32,
    pub current_participants: u32,
    pub status: ClassStatus,
    pub room: String,
    pub price: f64,
}

/// Draft for adding a class to the timetable.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassSession {
    pub name: String,
    pub description: Option<String>,
    pub trainer: String,
    pub trainer_avatar: Option<String>,
    pub category: Option<ClassCategory>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_participants: Option<u32>,
    pub current_participants: Option<u32>,
    pub status: Option<ClassStatus>,
    pub room: Option<String>,
    pub price: Option<f64>,
}

/// Patch for an existing class. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassSession {
    pub name: Option<String>,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub trainer_avatar: Option<String>,
    pub category: Option<ClassCategory>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_participants: Option<u32>,
    pub current_participants: Option<u32>,
    pub status: Option<ClassStatus>,
    pub room: Option<String>,
    pub price: Option<f64>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("name", RuleKind::Required, "Please enter class name"),
    ValidationRule::new("trainer", RuleKind::Required, "Please enter trainer name"),
    ValidationRule::new(
        "category",
        RuleKind::OneOf(ClassCategory::LABELS),
        "Please select category",
    ),
    ValidationRule::new(
        "dayOfWeek",
        RuleKind::OneOf(DayOfWeek::LABELS),
        "Please select day",
    ),
    ValidationRule::new("startTime", RuleKind::Required, "Please select start time"),
    ValidationRule::new("endTime", RuleKind::Required, "Please select end time"),
    ValidationRule::new(
        "maxParticipants",
        RuleKind::Required,
        "Please enter max participants",
    ),
    ValidationRule::new(
        "maxParticipants",
        RuleKind::NonNegative,
        "Capacity cannot be negative",
    ),
    ValidationRule::new(
        "currentParticipants",
        RuleKind::NonNegative,
        "Enrollment cannot be negative",
    ),
    ValidationRule::new(
        "currentParticipants",
        RuleKind::AtMostField("maxParticipants"),
        "Enrollment cannot exceed capacity",
    ),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(ClassStatus::LABELS),
        "Please select status",
    ),
    ValidationRule::new("room", RuleKind::Required, "Please enter room"),
    ValidationRule::new("price", RuleKind::NonNegative, "Price cannot be negative"),
];

impl Entity for ClassSession {
    const ENTITY: &'static str = "class";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn rules() -> &'static [ValidationRule] {
        RULES
    }

    fn create_defaults() -> serde_json::Map<String, serde_json::Value> {
        object_or_empty(json!({
            "description": "",
            "trainerAvatar": "👤",
            "category": "yoga",
            "dayOfWeek": "monday",
            "currentParticipants": 0,
            "status": "active",
            "price": 0,
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.name, &self.trainer, self.category.as_str()]
    }
}
