//! Operator roles and their wire labels.
//!
//! These must match the demo identities seeded by the console and the labels
//! the persisted session blob uses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of operator roles.
///
/// A session carries exactly one role; the route table in the console crate
/// decides which views each role may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Member,
}

impl Role {
    /// Every role label, most privileged first.
    pub const LABELS: &'static [&'static str] = &["admin", "staff", "member"];

    /// Return the wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serde_representation() {
        for (role, label) in [
            (Role::Admin, "admin"),
            (Role::Staff, "staff"),
            (Role::Member, "member"),
        ] {
            let json = serde_json::to_string(&role).expect("serialize");
            assert_eq!(json, format!("\"{label}\""));
            assert_eq!(role.as_str(), label);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"owner\"");
        assert!(result.is_err());
    }
}
