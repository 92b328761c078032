//! Payment entity model and DTOs.

use gympro_core::types::{Date, EntityId};
use gympro_core::validation::{RuleKind, ValidationRule};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entity::{Entity, object_or_empty};
use crate::models::status::{PaymentCategory, PaymentMethod, PaymentStatus};

/// A payment owed by or collected from a member.
///
/// Member identity fields are denormalized onto the record so the payments
/// view renders without a join. `payment_date` stays `None` until the
/// payment settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: EntityId,
    pub member_id: EntityId,
    pub member_name: String,
    pub member_email: String,
    pub member_avatar: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub payment_date: Option<Date>,
    pub due_date: Date,
    pub description: String,
    pub invoice_number: String,
    pub category: PaymentCategory,
}

/// Draft for recording a new payment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub member_id: Option<EntityId>,
    pub member_name: String,
    pub member_email: Option<String>,
    pub member_avatar: Option<String>,
    pub amount: Option<f64>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub payment_date: Option<Date>,
    pub due_date: Option<Date>,
    pub description: Option<String>,
    pub invoice_number: String,
    pub category: Option<PaymentCategory>,
}

/// Patch for an existing payment. All fields are optional.
///
/// `payment_date` cannot be cleared through a patch; null fields are
/// skipped, so clearing it goes through `set_field` with an explicit null.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    pub member_id: Option<EntityId>,
    pub member_name: Option<String>,
    pub member_email: Option<String>,
    pub member_avatar: Option<String>,
    pub amount: Option<f64>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub payment_date: Option<Date>,
    pub due_date: Option<Date>,
    pub description: Option<String>,
    pub invoice_number: Option<String>,
    pub category: Option<PaymentCategory>,
}

const RULES: &[ValidationRule] = &[
    ValidationRule::new("memberName", RuleKind::Required, "Please enter member name"),
    ValidationRule::new("amount", RuleKind::Required, "Please enter amount"),
    ValidationRule::new("amount", RuleKind::NonNegative, "Amount cannot be negative"),
    ValidationRule::new(
        "paymentMethod",
        RuleKind::OneOf(PaymentMethod::LABELS),
        "Please select payment method",
    ),
    ValidationRule::new(
        "status",
        RuleKind::OneOf(PaymentStatus::LABELS),
        "Please select status",
    ),
    ValidationRule::new("dueDate", RuleKind::Required, "Please select due date"),
    ValidationRule::new(
        "invoiceNumber",
        RuleKind::Required,
        "Please enter invoice number",
    ),
    ValidationRule::new(
        "category",
        RuleKind::OneOf(PaymentCategory::LABELS),
        "Please select category",
    ),
];

impl Entity for Payment {
    const ENTITY: &'static str = "payment";

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
            "paymentMethod": "credit_card",
            "status": "pending",
            "paymentDate": null,
            "description": "",
            "category": "membership",
        }))
    }

    fn searchable(&self) -> Vec<&str> {
        vec![
            &self.member_name,
            &self.member_email,
            &self.invoice_number,
        ]
    }
}
