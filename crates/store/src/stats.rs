//! Aggregate counters for the dashboard and per-view stat cards.
//!
//! Every aggregate is recomputed from the live collections on demand; there
//! is no cached counter to drift out of sync.

use gympro_core::types::Date;
use serde::Serialize;

use crate::models::status::{
    AttendanceStatus, ClassStatus, EquipmentStatus, MemberStatus, MembershipType, PaymentStatus,
    StaffRole, StaffStatus,
};
use crate::models::{
    AttendanceRecord, ClassSession, EquipmentItem, Member, Payment, StaffMember,
};
use crate::store::EntityStore;

/// Stat cards on the members view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub premium: usize,
    pub new_this_month: usize,
}

impl MemberStats {
    /// `today` anchors the "new this month" window: same calendar year and
    /// month as the join date.
    pub fn aggregate<'a, I>(members: I, today: Date) -> Self
    where
        I: IntoIterator<Item = &'a Member>,
    {
        use chrono::Datelike;
        let mut stats = MemberStats::default();
        for member in members {
            stats.total += 1;
            if member.status == MemberStatus::Active {
                stats.active += 1;
            }
            if member.membership_type == MembershipType::Premium {
                stats.premium += 1;
            }
            if member.join_date.year() == today.year() && member.join_date.month() == today.month()
            {
                stats.new_this_month += 1;
            }
        }
        stats
    }
}

/// Stat cards on the staff view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffStats {
    pub total: usize,
    pub active: usize,
    pub trainers: usize,
    pub admins: usize,
}

impl StaffStats {
    pub fn aggregate<'a, I>(staff: I) -> Self
    where
        I: IntoIterator<Item = &'a StaffMember>,
    {
        let mut stats = StaffStats::default();
        for member in staff {
            stats.total += 1;
            if member.status == StaffStatus::Active {
                stats.active += 1;
            }
            match member.role {
                StaffRole::Trainer => stats.trainers += 1,
                StaffRole::Admin => stats.admins += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Stat cards on the classes view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub total: usize,
    pub active: usize,
    pub total_participants: u32,
    pub total_capacity: u32,
}

impl ClassStats {
    pub fn aggregate<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassSession>,
    {
        let mut stats = ClassStats::default();
        for class in classes {
            stats.total += 1;
            if class.status == ClassStatus::Active {
                stats.active += 1;
            }
            stats.total_participants += class.current_participants;
            stats.total_capacity += class.max_participants;
        }
        stats
    }
}

/// Stat cards on the equipment view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentStats {
    pub total: usize,
    pub operational: usize,
    pub in_maintenance: usize,
    pub total_value: f64,
    /// Mean condition score rounded to the nearest integer; 0 for an empty
    /// inventory.
    pub avg_condition: u32,
}

impl EquipmentStats {
    pub fn aggregate<'a, I>(equipment: I) -> Self
    where
        I: IntoIterator<Item = &'a EquipmentItem>,
    {
        let mut stats = EquipmentStats::default();
        let mut condition_sum: u64 = 0;
        for item in equipment {
            stats.total += 1;
            match item.status {
                EquipmentStatus::Operational => stats.operational += 1,
                EquipmentStatus::Maintenance => stats.in_maintenance += 1,
                _ => {}
            }
            stats.total_value += item.cost;
            condition_sum += u64::from(item.condition);
        }
        if stats.total > 0 {
            stats.avg_condition = (condition_sum as f64 / stats.total as f64).round() as u32;
        }
        stats
    }
}

/// Stat cards on the payments view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub total_amount: f64,
    /// Sum over completed payments only.
    pub collected_amount: f64,
}

impl PaymentStats {
    pub fn aggregate<'a, I>(payments: I) -> Self
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let mut stats = PaymentStats::default();
        for payment in payments {
            stats.total += 1;
            stats.total_amount += payment.amount;
            match payment.status {
                PaymentStatus::Completed => {
                    stats.completed += 1;
                    stats.collected_amount += payment.amount;
                }
                PaymentStatus::Pending => stats.pending += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Stat cards on the attendance view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    /// Present records as a rounded percentage of all records; 0 when there
    /// are none.
    pub attendance_rate: u32,
}

impl AttendanceStats {
    pub fn aggregate<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut stats = AttendanceStats::default();
        for record in records {
            stats.total += 1;
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Late => stats.late += 1,
            }
        }
        if stats.total > 0 {
            stats.attendance_rate =
                ((stats.present as f64 / stats.total as f64) * 100.0).round() as u32;
        }
        stats
    }
}

/// The six headline counters on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_members: usize,
    pub active_members: usize,
    pub total_classes: usize,
    /// Members who showed up at all, late arrivals included.
    pub today_attendance: usize,
    /// Collected payment volume.
    pub monthly_revenue: f64,
    pub equipment_count: usize,
}

impl DashboardSnapshot {
    pub fn aggregate(
        members: &EntityStore<Member>,
        classes: &EntityStore<ClassSession>,
        attendance: &EntityStore<AttendanceRecord>,
        payments: &EntityStore<Payment>,
        equipment: &EntityStore<EquipmentItem>,
    ) -> Self {
        let active_members = members
            .list()
            .filter(|m| m.status == MemberStatus::Active)
            .count();
        let attendance_totals = AttendanceStats::aggregate(attendance.list());
        let payment_totals = PaymentStats::aggregate(payments.list());
        DashboardSnapshot {
            total_members: members.len(),
            active_members,
            total_classes: classes.len(),
            today_attendance: attendance_totals.present + attendance_totals.late,
            monthly_revenue: payment_totals.collected_amount,
            equipment_count: equipment.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn member_stats_over_fixtures() {
        let members = fixtures::members();
        let stats = MemberStats::aggregate(&members, Date::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.premium, 3);
        // John Doe and Sarah Wilson joined in January 2024.
        assert_eq!(stats.new_this_month, 2);
    }

    #[test]
    fn staff_stats_over_fixtures() {
        let stats = StaffStats::aggregate(&fixtures::staff());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.trainers, 2);
        assert_eq!(stats.admins, 1);
    }

    #[test]
    fn class_stats_over_fixtures() {
        let stats = ClassStats::aggregate(&fixtures::classes());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.total_participants, 66);
        assert_eq!(stats.total_capacity, 82);
    }

    #[test]
    fn equipment_stats_over_fixtures() {
        let stats = EquipmentStats::aggregate(&fixtures::equipment());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.operational, 4);
        assert_eq!(stats.in_maintenance, 1);
        assert_eq!(stats.total_value, 6600.0);
        // (95 + 88 + 72 + 92 + 85) / 5 = 86.4, rounds to 86.
        assert_eq!(stats.avg_condition, 86);
    }

    #[test]
    fn payment_stats_over_fixtures() {
        let stats = PaymentStats::aggregate(&fixtures::payments());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.pending, 1);
        assert!((stats.total_amount - 539.99).abs() < 1e-9);
        assert_eq!(stats.collected_amount, 375.0);
    }

    #[test]
    fn attendance_stats_over_fixtures() {
        let stats = AttendanceStats::aggregate(&fixtures::attendance());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.present, 3);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.attendance_rate, 60);
    }

    #[test]
    fn empty_collections_aggregate_to_zero() {
        let stats = AttendanceStats::aggregate(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.attendance_rate, 0);
        let stats = EquipmentStats::aggregate(std::iter::empty());
        assert_eq!(stats.avg_condition, 0);
    }

    #[test]
    fn dashboard_snapshot_over_fixtures() {
        let snapshot = DashboardSnapshot::aggregate(
            &crate::EntityStore::seed(fixtures::members()),
            &crate::EntityStore::seed(fixtures::classes()),
            &crate::EntityStore::seed(fixtures::attendance()),
            &crate::EntityStore::seed(fixtures::payments()),
            &crate::EntityStore::seed(fixtures::equipment()),
        );
        assert_eq!(snapshot.total_members, 5);
        assert_eq!(snapshot.active_members, 4);
        assert_eq!(snapshot.total_classes, 5);
        assert_eq!(snapshot.today_attendance, 4);
        assert_eq!(snapshot.monthly_revenue, 375.0);
        assert_eq!(snapshot.equipment_count, 5);
    }
}
