//! Staff member entity model and DTOs.

use gympro_core::types::{Date, EntityId};
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::{Department, StaffRole, StaffStatus};
use crate::store::EntityStore;

/// An employee on the gym's payroll.
///
/// `is_active` mirrors `status`; the two are kept in sync by
/// [`EntityStore::set_active`] rather than edited independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    pub department: Department,
    pub status: StaffStatus,
    pub hire_date: Date,
    pub salary: f64,
    pub avatar: String,
    pub specializations: Vec<String>,
    pub is_active: bool,
}

/// Draft for hiring a new staff member.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<StaffRole>,
    pub department: Option<Department>,
    pub status: Option<StaffStatus>,
    pub hire_date: Option<Date>,
    pub salary: Option<f64>,
    pub avatar: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Patch for an existing staff member. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<StaffRole>,
    pub department: Option<Department>,
    pub status: Option<StaffStatus>,
    pub hire_date: Option<Date>,
    pub salary: Option<f64>,
    pub avatar: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("name", RuleKind::Required, "Please enter full name"),
    ValidationRule::new("email", RuleKind::Required, "Please enter email"),
    ValidationRule::new("email", RuleKind::Email, "Please enter valid email"),
    ValidationRule::new("phone", RuleKind::Required, "Please enter phone number"),
    ValidationRule::new(
        "role",
        RuleKind::OneOf(StaffRole::LABELS),
        "Please select role",
    ),
    ValidationRule::new(
        "department",
        RuleKind::OneOf(Department::LABELS),
        "Please select department",
    ),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(StaffStatus::LABELS),
        "Please select status",
    ),
    ValidationRule::new("hireDate", RuleKind::Required, "Please select hire date"),
    ValidationRule::new(
        "salary",
        RuleKind::NonNegative,
        "Salary cannot be negative",
    ),
];

impl Entity for StaffMember {
    const ENTITY: &'static str = "staff member";

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
            "role": "trainer",
            "department": "fitness",
            "status": "active",
            "isActive": true,
            "avatar": "👤",
            "specializations": [],
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.role.as_str()]
    }
}

impl EntityStore<StaffMember> {
    /// Toggle employment status, keeping `status` and `isActive` in sync.
    pub fn set_active(
        &mut self,
        id: EntityId,
        active: bool,
    ) -> Result<StaffMember, gympro_core::error::CoreError> {
        let status = if active { "active" } else { "inactive" };
        self.update(
            id,
            &json!({
                "isActive": active,
                "status": status,
            }),
        )
    }
}
