//! Attendance record entity model and DTOs.

use gympro_core::error::CoreError;
use gympro_core::types::EntityId;
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::AttendanceStatus;
use crate::store::EntityStore;

/// One member's attendance at one class occurrence.
///
/// Times and duration are display strings ("06:55 AM", "1h 10m") carried
/// from check-in hardware; absent members have all three as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: EntityId,
    pub member_id: EntityId,
    pub member_name: String,
    pub member_email: String,
    pub member_avatar: String,
    pub class_name: String,
    pub class_time: String,
    pub status: AttendanceStatus,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub duration: Option<String>,
}

/// Draft for logging a new attendance record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRecord {
    pub member_id: Option<EntityId>,
    pub member_name: String,
    pub member_email: Option<String>,
    pub member_avatar: Option<String>,
    pub class_name: String,
    pub class_time: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub duration: Option<String>,
}

/// Patch for an existing attendance record. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRecord {
    pub member_id: Option<EntityId>,
    pub member_name: Option<String>,
    pub member_email: Option<String>,
    pub member_avatar: Option<String>,
    pub class_name: Option<String>,
    pub class_time: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub duration: Option<String>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("memberName", RuleKind::Required, "Please enter member name"),
    ValidationRule::new("className", RuleKind::Required, "Please enter class name"),
    ValidationRule::new("classTime", RuleKind::Required, "Please enter class time"),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(AttendanceStatus::LABELS),
        "Please select status",
    ),
];

impl Entity for AttendanceRecord {
    const ENTITY: &'static str = "attendance record";

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
            "memberId": 0,
            "memberEmail": "",
            "memberAvatar": "👤",
            "status": "present",
            "checkInTime": null,
            "checkOutTime": null,
            "duration": null,
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.member_name, &self.member_email, &self.class_name]
    }
}

impl EntityStore<AttendanceRecord> {
    /// Re-mark a record's attendance status in place.
    pub fn mark(
        &mut self,
        id: EntityId,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, CoreError> {
        self.set_field(id, "status", json!(status.as_str()))
    }
}
