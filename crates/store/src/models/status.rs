//! Closed label enums shared by the entity models.
//!
//! Each enum round-trips through the wire labels the rule tables reference,
//! so `LABELS` and the serde representation must stay in lockstep. The macro
//! keeps them generated from a single list.

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every wire label, in declaration order.
            pub const LABELS: &'static [&'static str] = &[ $( $label ),+ ];

            /// Return the wire label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_label_enum! {
    /// Member account lifecycle.
    MemberStatus {
        Active = "active",
        Inactive = "inactive",
        Pending = "pending",
    }
}

define_label_enum! {
    /// Membership tier a member pays for.
    MembershipType {
        Basic = "basic",
        Premium = "premium",
        Student = "student",
    }
}

define_label_enum! {
    /// Staff employment status.
    StaffStatus {
        Active = "active",
        Inactive = "inactive",
    }
}

define_label_enum! {
    /// Staff job role.
    StaffRole {
        Admin = "admin",
        Trainer = "trainer",
        Receptionist = "receptionist",
        Maintenance = "maintenance",
    }
}

define_label_enum! {
    /// Department a staff member belongs to.
    Department {
        Fitness = "fitness",
        Strength = "strength",
        Management = "management",
        FrontDesk = "front_desk",
        Facilities = "facilities",
    }
}

define_label_enum! {
    /// Scheduled class lifecycle.
    ClassStatus {
        Active = "active",
        Inactive = "inactive",
        Cancelled = "cancelled",
    }
}

define_label_enum! {
    /// Class programme category.
    ClassCategory {
        Yoga = "yoga",
        Cardio = "cardio",
        Strength = "strength",
        Pilates = "pilates",
        Dance = "dance",
    }
}

define_label_enum! {
    /// Weekday a class is scheduled on.
    DayOfWeek {
        Monday = "monday",
        Tuesday = "tuesday",
        Wednesday = "wednesday",
        Thursday = "thursday",
        Friday = "friday",
        Saturday = "saturday",
        Sunday = "sunday",
    }
}

define_label_enum! {
    /// Operational state of a piece of equipment.
    EquipmentStatus {
        Operational = "operational",
        Maintenance = "maintenance",
        OutOfOrder = "out_of_order",
        Retired = "retired",
    }
}

define_label_enum! {
    /// Equipment inventory category.
    EquipmentCategory {
        Cardio = "cardio",
        Strength = "strength",
        Accessories = "accessories",
        Machines = "machines",
    }
}

define_label_enum! {
    /// Payment settlement state.
    PaymentStatus {
        Pending = "pending",
        Completed = "completed",
        Failed = "failed",
        Cancelled = "cancelled",
    }
}

define_label_enum! {
    /// How a payment was (or will be) made.
    PaymentMethod {
        CreditCard = "credit_card",
        BankTransfer = "bank_transfer",
        Cash = "cash",
        Paypal = "paypal",
    }
}

define_label_enum! {
    /// What a payment is for.
    PaymentCategory {
        Membership = "membership",
        ClassFee = "class_fee",
        PersonalTraining = "personal_training",
        Equipment = "equipment",
    }
}

define_label_enum! {
    /// Whether a member showed up for a class.
    AttendanceStatus {
        Present = "present",
        Absent = "absent",
        Late = "late",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_serde() {
        for label in MemberStatus::LABELS {
            let json = format!("\"{label}\"");
            let status: MemberStatus = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(status.as_str(), *label);
            assert_eq!(serde_json::to_string(&status).expect("serialize"), json);
        }
    }

    #[test]
    fn multi_word_labels_use_snake_case() {
        assert_eq!(EquipmentStatus::OutOfOrder.as_str(), "out_of_order");
        assert_eq!(Department::FrontDesk.as_str(), "front_desk");
        assert_eq!(PaymentMethod::CreditCard.as_str(), "credit_card");
        assert_eq!(PaymentCategory::ClassFee.as_str(), "class_fee");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result: Result<PaymentStatus, _> = serde_json::from_str("\"refunded\"");
        assert!(result.is_err());
    }
}
