//! Equipment inventory entity model and DTOs.

use gympro_core::types::{Date, EntityId};
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::{EquipmentCategory, EquipmentStatus};

/// A piece of tracked gym equipment.
///
/// `condition` is a 0-100 health score entered by maintenance staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: EntityId,
    pub name: String,
    pub category: EquipmentCategory,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: Date,
    pub warranty_expiry: Date,
    pub status: EquipmentStatus,
    pub condition: u32,
    pub location: String,
    pub last_maintenance: Date,
    pub next_maintenance: Date,
    pub cost: f64,
    pub notes: String,
}

/// Draft for registering a new piece of equipment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentItem {
    pub name: String,
    pub category: Option<EquipmentCategory>,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: Option<Date>,
    pub warranty_expiry: Option<Date>,
    pub status: Option<EquipmentStatus>,
    pub condition: Option<u32>,
    pub location: Option<String>,
    pub last_maintenance: Option<Date>,
    pub next_maintenance: Option<Date>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// Patch for an existing piece of equipment. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentItem {
    pub name: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<Date>,
    pub warranty_expiry: Option<Date>,
    pub status: Option<EquipmentStatus>,
    pub condition: Option<u32>,
    pub location: Option<String>,
    pub last_maintenance: Option<Date>,
    pub next_maintenance: Option<Date>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("name", RuleKind::Required, "Please enter equipment name"),
    ValidationRule::new(
        "category",
        RuleKind::OneOf(EquipmentCategory::LABELS),
        "Please select category",
    ),
    ValidationRule::new("brand", RuleKind::Required, "Please enter brand"),
    ValidationRule::new("model", RuleKind::Required, "Please enter model"),
    ValidationRule::new(
        "serialNumber",
        RuleKind::Required,
        "Please enter serial number",
    ),
    ValidationRule::new(
        "purchaseDate",
        RuleKind::Required,
        "Please select purchase date",
    ),
    ValidationRule::new(
        "warrantyExpiry",
        RuleKind::Required,
        "Please select warranty expiry",
    ),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(EquipmentStatus::LABELS),
        "Please select status",
    ),
    ValidationRule::new(
        "condition",
        RuleKind::NonNegative,
        "Condition cannot be negative",
    ),
    ValidationRule::new("location", RuleKind::Required, "Please enter location"),
    ValidationRule::new(
        "lastMaintenance",
        RuleKind::Required,
        "Please select last maintenance date",
    ),
    ValidationRule::new(
        "nextMaintenance",
        RuleKind::Required,
        "Please select next maintenance date",
    ),
    ValidationRule::new("cost", RuleKind::NonNegative, "Cost cannot be negative"),
];

impl Entity for EquipmentItem {
    const ENTITY: &'static str = "equipment";

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
            "category": "cardio",
            "status": "operational",
            "condition": 100,
            "cost": 0,
            "notes": "",
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.name, &self.brand, &self.model, &self.serial_number]
    }
}
