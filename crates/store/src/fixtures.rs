//! Demo records seeded on first run.
//!
//! The console has no backing database; these collections give a fresh
//! install something to show on every view. Ids are 1-based and contiguous
//! per entity kind so freshly created records continue at 6.

use gympro_core::types::Date;

use crate::models::status::{
    AttendanceStatus, ClassCategory, ClassStatus, DayOfWeek, Department, EquipmentCategory,
    EquipmentStatus, MemberStatus, MembershipType, PaymentCategory, PaymentMethod, PaymentStatus,
    StaffRole, StaffStatus,
};
use crate::models::{
    AttendanceRecord, ClassSession, EquipmentItem, Member, Payment, StaffMember,
};

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The five demo members.
pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: 1,
            name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            phone: "+1 (555) 123-4567".into(),
            membership_type: MembershipType::Premium,
            status: MemberStatus::Active,
            join_date: date(2024, 1, 15),
            last_visit: date(2024, 3, 20),
            total_visits: 45,
            avatar: "👨‍💼".into(),
        },
        Member {
            id: 2,
            name: "Jane Smith".into(),
            email: "jane.smith@email.com".into(),
            phone: "+1 (555) 234-5678".into(),
            membership_type: MembershipType::Basic,
            status: MemberStatus::Active,
            join_date: date(2024, 2, 1),
            last_visit: date(2024, 3, 19),
            total_visits: 32,
            avatar: "👩‍💼".into(),
        },
        Member {
            id: 3,
            name: "Mike Johnson".into(),
            email: "mike.johnson@email.com".into(),
            phone: "+1 (555) 345-6789".into(),
            membership_type: MembershipType::Premium,
            status: MemberStatus::Inactive,
            join_date: date(2023, 11, 20),
            last_visit: date(2024, 2, 15),
            total_visits: 28,
            avatar: "👨‍💼".into(),
        },
        Member {
            id: 4,
            name: "Sarah Wilson".into(),
            email: "sarah.wilson@email.com".into(),
            phone: "+1 (555) 456-7890".into(),
            membership_type: MembershipType::Basic,
            status: MemberStatus::Active,
            join_date: date(2024, 1, 10),
            last_visit: date(2024, 3, 21),
            total_visits: 38,
            avatar: "👩‍💼".into(),
        },
        Member {
            id: 5,
            name: "Alex Brown".into(),
            email: "alex.brown@email.com".into(),
            phone: "+1 (555) 567-8901".into(),
            membership_type: MembershipType::Premium,
            status: MemberStatus::Active,
            join_date: date(2023, 12, 5),
            last_visit: date(2024, 3, 18),
            total_visits: 52,
            avatar: "👨‍💼".into(),
        },
    ]
}

/// The five demo staff members.
pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: 1,
            name: "Sanghdeep Gedam".into(),
            email: "sarah.johnson@gym.com".into(),
            phone: "+1 (555) 111-2222".into(),
            role: StaffRole::Trainer,
            department: Department::Fitness,
            status: StaffStatus::Active,
            hire_date: date(2023, 6, 15),
            salary: 45000.0,
            avatar: "👩‍💼".into(),
            specializations: vec!["Yoga".into(), "Pilates".into()],
            is_active: true,
        },
        StaffMember {
            id: 2,
            name: "Mike Wilson".into(),
            email: "mike.wilson@gym.com".into(),
            phone: "+1 (555) 222-3333".into(),
            role: StaffRole::Trainer,
            department: Department::Strength,
            status: StaffStatus::Active,
            hire_date: date(2023, 8, 20),
            salary: 48000.0,
            avatar: "👨‍💼".into(),
            specializations: vec!["Weight Training".into(), "CrossFit".into()],
            is_active: true,
        },
        StaffMember {
            id: 3,
            name: "Alex Brown".into(),
            email: "alex.brown@gym.com".into(),
            phone: "+1 (555) 333-4444".into(),
            role: StaffRole::Admin,
            department: Department::Management,
            status: StaffStatus::Active,
            hire_date: date(2023, 1, 10),
            salary: 65000.0,
            avatar: "👨‍💼".into(),
            specializations: vec!["Operations".into(), "Finance".into()],
            is_active: true,
        },
        StaffMember {
            id: 4,
            name: "Lisa Davis".into(),
            email: "lisa.davis@gym.com".into(),
            phone: "+1 (555) 444-5555".into(),
            role: StaffRole::Receptionist,
            department: Department::FrontDesk,
            status: StaffStatus::Active,
            hire_date: date(2023, 9, 5),
            salary: 35000.0,
            avatar: "👩‍💼".into(),
            specializations: vec!["Customer Service".into()],
            is_active: true,
        },
        StaffMember {
            id: 5,
            name: "Pratik".into(),
            email: "pratik@gym.com".into(),
            phone: "+1 (555) 555-6666".into(),
            role: StaffRole::Maintenance,
            department: Department::Facilities,
            status: StaffStatus::Inactive,
            hire_date: date(2023, 3, 12),
            salary: 4000.0,
            avatar: "👨‍💼".into(),
            specializations: vec!["Equipment Maintenance".into()],
            is_active: false,
        },
    ]
}

/// The five demo classes on the timetable.
pub fn classes() -> Vec<ClassSession> {
    vec![
        ClassSession {
            id: 1,
            name: "Morning Yoga".into(),
            description: "Gentle yoga session to start your day".into(),
            trainer: "Sarah Johnson".into(),
            trainer_avatar: "👩‍💼".into(),
            category: ClassCategory::Yoga,
            day_of_week: DayOfWeek::Monday,
            start_time: "07:00".into(),
            end_time: "08:00".into(),
            max_participants: 15,
            current_participants: 12,
            status: ClassStatus::Active,
            room: "Studio A".into(),
            price: 15.0,
        },
        ClassSession {
            id: 2,
            name: "HIIT Training".into(),
            description: "High-intensity interval training for maximum results".into(),
            trainer: "Mike Wilson".into(),
            trainer_avatar: "👨‍💼".into(),
            category: ClassCategory::Cardio,
            day_of_week: DayOfWeek::Monday,
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            max_participants: 20,
            current_participants: 18,
            status: ClassStatus::Active,
            room: "Main Gym".into(),
            price: 20.0,
        },
        ClassSession {
            id: 3,
            name: "Strength Training".into(),
            description: "Build muscle and increase strength".into(),
            trainer: "Alex Brown".into(),
            trainer_avatar: "👨‍💼".into(),
            category: ClassCategory::Strength,
            day_of_week: DayOfWeek::Wednesday,
            start_time: "17:00".into(),
            end_time: "18:00".into(),
            max_participants: 12,
            current_participants: 8,
            status: ClassStatus::Active,
            room: "Weight Room".into(),
            price: 18.0,
        },
        ClassSession {
            id: 4,
            name: "Pilates".into(),
            description: "Core strengthening and flexibility".into(),
            trainer: "Lisa Davis".into(),
            trainer_avatar: "👩‍💼".into(),
            category: ClassCategory::Pilates,
            day_of_week: DayOfWeek::Friday,
            start_time: "16:00".into(),
            end_time: "17:00".into(),
            max_participants: 10,
            current_participants: 6,
            status: ClassStatus::Active,
            room: "Studio B".into(),
            price: 16.0,
        },
        ClassSession {
            id: 5,
            name: "Zumba".into(),
            description: "Dance fitness with Latin rhythms".into(),
            trainer: "Maria Garcia".into(),
            trainer_avatar: "👩‍💼".into(),
            category: ClassCategory::Dance,
            day_of_week: DayOfWeek::Saturday,
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            max_participants: 25,
            current_participants: 22,
            status: ClassStatus::Active,
            room: "Main Gym".into(),
            price: 12.0,
        },
    ]
}

/// The five demo equipment items.
pub fn equipment() -> Vec<EquipmentItem> {
    vec![
        EquipmentItem {
            id: 1,
            name: "Treadmill Pro X1".into(),
            category: EquipmentCategory::Cardio,
            brand: "FitnessTech".into(),
            model: "TX-1000".into(),
            serial_number: "TX1000-001".into(),
            purchase_date: date(2023, 1, 15),
            warranty_expiry: date(2026, 1, 15),
            status: EquipmentStatus::Operational,
            condition: 95,
            location: "Cardio Zone A".into(),
            last_maintenance: date(2024, 2, 15),
            next_maintenance: date(2024, 5, 15),
            cost: 2500.0,
            notes: "Excellent condition, regular maintenance performed".into(),
        },
        EquipmentItem {
            id: 2,
            name: "Weight Bench Deluxe".into(),
            category: EquipmentCategory::Strength,
            brand: "PowerLift".into(),
            model: "WB-200".into(),
            serial_number: "WB200-045".into(),
            purchase_date: date(2022, 8, 20),
            warranty_expiry: date(2025, 8, 20),
            status: EquipmentStatus::Operational,
            condition: 88,
            location: "Strength Zone B".into(),
            last_maintenance: date(2024, 1, 20),
            next_maintenance: date(2024, 4, 20),
            cost: 800.0,
            notes: "Minor wear on padding, still functional".into(),
        },
        EquipmentItem {
            id: 3,
            name: "Elliptical Trainer Elite".into(),
            category: EquipmentCategory::Cardio,
            brand: "CardioMax".into(),
            model: "ET-500".into(),
            serial_number: "ET500-023".into(),
            purchase_date: date(2023, 3, 10),
            warranty_expiry: date(2026, 3, 10),
            status: EquipmentStatus::Maintenance,
            condition: 72,
            location: "Cardio Zone B".into(),
            last_maintenance: date(2024, 2, 1),
            next_maintenance: date(2024, 3, 1),
            cost: 1800.0,
            notes: "Belt needs replacement, scheduled for repair".into(),
        },
        EquipmentItem {
            id: 4,
            name: "Dumbbell Set (5-50 lbs)".into(),
            category: EquipmentCategory::Strength,
            brand: "IronCore".into(),
            model: "DB-SET-01".into(),
            serial_number: "DBSET01-001".into(),
            purchase_date: date(2022, 12, 5),
            warranty_expiry: date(2025, 12, 5),
            status: EquipmentStatus::Operational,
            condition: 92,
            location: "Strength Zone A".into(),
            last_maintenance: date(2024, 2, 10),
            next_maintenance: date(2024, 5, 10),
            cost: 1200.0,
            notes: "All weights in good condition".into(),
        },
        EquipmentItem {
            id: 5,
            name: "Yoga Mat Set".into(),
            category: EquipmentCategory::Accessories,
            brand: "FlexiMat".into(),
            model: "YM-100".into(),
            serial_number: "YM100-156".into(),
            purchase_date: date(2023, 6, 15),
            warranty_expiry: date(2026, 6, 15),
            status: EquipmentStatus::Operational,
            condition: 85,
            location: "Studio A".into(),
            last_maintenance: date(2024, 1, 15),
            next_maintenance: date(2024, 4, 15),
            cost: 300.0,
            notes: "Some mats showing wear, consider replacement soon".into(),
        },
    ]
}

/// The five demo payments.
pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            member_id: 1,
            member_name: "John Doe".into(),
            member_email: "john.doe@email.com".into(),
            member_avatar: "👨‍💼".into(),
            amount: 150.0,
            payment_method: PaymentMethod::CreditCard,
            status: PaymentStatus::Completed,
            payment_date: Some(date(2024, 3, 20)),
            due_date: date(2024, 3, 15),
            description: "Premium Membership - March 2024".into(),
            invoice_number: "INV-001".into(),
            category: PaymentCategory::Membership,
        },
        Payment {
            id: 2,
            member_id: 2,
            member_name: "Jane Smith".into(),
            member_email: "jane.smith@email.com".into(),
            member_avatar: "👩‍💼".into(),
            amount: 89.99,
            payment_method: PaymentMethod::BankTransfer,
            status: PaymentStatus::Pending,
            payment_date: None,
            due_date: date(2024, 3, 25),
            description: "Basic Membership - March 2024".into(),
            invoice_number: "INV-002".into(),
            category: PaymentCategory::Membership,
        },
        Payment {
            id: 3,
            member_id: 3,
            member_name: "Mike Johnson".into(),
            member_email: "mike.johnson@email.com".into(),
            member_avatar: "👨‍💼".into(),
            amount: 25.0,
            payment_method: PaymentMethod::Cash,
            status: PaymentStatus::Completed,
            payment_date: Some(date(2024, 3, 19)),
            due_date: date(2024, 3, 19),
            description: "Drop-in Class Fee".into(),
            invoice_number: "INV-003".into(),
            category: PaymentCategory::ClassFee,
        },
        Payment {
            id: 4,
            member_id: 4,
            member_name: "Sarah Wilson".into(),
            member_email: "sarah.wilson@email.com".into(),
            member_avatar: "👩‍💼".into(),
            amount: 200.0,
            payment_method: PaymentMethod::CreditCard,
            status: PaymentStatus::Completed,
            payment_date: Some(date(2024, 3, 18)),
            due_date: date(2024, 3, 10),
            description: "Premium Membership - March 2024".into(),
            invoice_number: "INV-004".into(),
            category: PaymentCategory::Membership,
        },
        Payment {
            id: 5,
            member_id: 5,
            member_name: "Alex Brown".into(),
            member_email: "alex.brown@email.com".into(),
            member_avatar: "👨‍💼".into(),
            amount: 75.0,
            payment_method: PaymentMethod::Paypal,
            status: PaymentStatus::Failed,
            payment_date: None,
            due_date: date(2024, 3, 20),
            description: "Personal Training Session".into(),
            invoice_number: "INV-005".into(),
            category: PaymentCategory::PersonalTraining,
        },
    ]
}

/// The five demo attendance records.
pub fn attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            id: 1,
            member_id: 1,
            member_name: "John Doe".into(),
            member_email: "john.doe@email.com".into(),
            member_avatar: "👨‍💼".into(),
            class_name: "Morning Yoga".into(),
            class_time: "07:00 AM".into(),
            status: AttendanceStatus::Present,
            check_in_time: Some("06:55 AM".into()),
            check_out_time: Some("08:05 AM".into()),
            duration: Some("1h 10m".into()),
        },
        AttendanceRecord {
            id: 2,
            member_id: 2,
            member_name: "Jane Smith".into(),
            member_email: "jane.smith@email.com".into(),
            member_avatar: "👩‍💼".into(),
            class_name: "HIIT Training".into(),
            class_time: "09:00 AM".into(),
            status: AttendanceStatus::Present,
            check_in_time: Some("08:58 AM".into()),
            check_out_time: Some("10:02 AM".into()),
            duration: Some("1h 4m".into()),
        },
        AttendanceRecord {
            id: 3,
            member_id: 3,
            member_name: "Mike Johnson".into(),
            member_email: "mike.johnson@email.com".into(),
            member_avatar: "👨‍💼".into(),
            class_name: "Morning Yoga".into(),
            class_time: "07:00 AM".into(),
            status: AttendanceStatus::Absent,
            check_in_time: None,
            check_out_time: None,
            duration: None,
        },
        AttendanceRecord {
            id: 4,
            member_id: 4,
            member_name: "Sarah Wilson".into(),
            member_email: "sarah.wilson@email.com".into(),
            member_avatar: "👩‍💼".into(),
            class_name: "HIIT Training".into(),
            class_time: "09:00 AM".into(),
            status: AttendanceStatus::Late,
            check_in_time: Some("09:15 AM".into()),
            check_out_time: Some("10:00 AM".into()),
            duration: Some("45m".into()),
        },
        AttendanceRecord {
            id: 5,
            member_id: 5,
            member_name: "Alex Brown".into(),
            member_email: "alex.brown@email.com".into(),
            member_avatar: "👨‍💼".into(),
            class_name: "Strength Training".into(),
            class_time: "05:00 PM".into(),
            status: AttendanceStatus::Present,
            check_in_time: Some("04:58 PM".into()),
            check_out_time: Some("06:02 PM".into()),
            duration: Some("1h 4m".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    #[test]
    fn every_collection_seeds_five_records() {
        assert_eq!(EntityStore::seed(members()).len(), 5);
        assert_eq!(EntityStore::seed(staff()).len(), 5);
        assert_eq!(EntityStore::seed(classes()).len(), 5);
        assert_eq!(EntityStore::seed(equipment()).len(), 5);
        assert_eq!(EntityStore::seed(payments()).len(), 5);
        assert_eq!(EntityStore::seed(attendance()).len(), 5);
    }

    #[test]
    fn fixture_ids_are_one_through_five() {
        let store = EntityStore::seed(members());
        let ids: Vec<_> = store.list().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
