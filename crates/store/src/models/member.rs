//! Gym member entity model and DTOs.

use gympro_core::types::{Date, EntityId};
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::{MemberStatus, MembershipType};

/// A gym member with a membership and visit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
    pub join_date: Date,
    pub last_visit: Date,
    pub total_visits: u32,
    /// Emoji token the console renders as the member's avatar.
    pub avatar: String,
}

/// Draft for registering a new member. Omitted fields take the defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: Option<MembershipType>,
    pub status: Option<MemberStatus>,
    pub join_date: Option<Date>,
    pub last_visit: Option<Date>,
    pub total_visits: Option<u32>,
    pub avatar: Option<String>,
}

/// Patch for an existing member. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<MembershipType>,
    pub status: Option<MemberStatus>,
    pub join_date: Option<Date>,
    pub last_visit: Option<Date>,
    pub total_visits: Option<u32>,
    pub avatar: Option<String>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("name", RuleKind::Required, "Please enter full name"),
    ValidationRule::new("email", RuleKind::Required, "Please enter email"),
    ValidationRule::new("email", RuleKind::Email, "Please enter valid email"),
    ValidationRule::new("phone", RuleKind::Required, "Please enter phone number"),
    ValidationRule::new(
        "membershipType",
        RuleKind::OneOf(MembershipType::LABELS),
        "Please select membership type",
    ),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(MemberStatus::LABELS),
        "Please select status",
    ),
    ValidationRule::new("joinDate", RuleKind::Required, "Please select join date"),
    ValidationRule::new("lastVisit", RuleKind::Required, "Please select last visit"),
    ValidationRule::new(
        "totalVisits",
        RuleKind::NonNegative,
        "Total visits cannot be negative",
    ),
];

impl Entity for Member {
    const ENTITY: &'static str = "member";

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
            "membershipType": "basic",
            "status": "active",
            "totalVisits": 0,
            "avatar": "👤",
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }
}
