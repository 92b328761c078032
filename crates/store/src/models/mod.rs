//! Entity models and DTOs.
//!
//! Each module defines the entity struct, a `CreateX` draft DTO, an
//! all-optional `UpdateX` patch DTO, and the entity's rule table. Everything
//! serializes in camelCase; the store treats that wire form as canonical.

pub mod attendance;
pub mod class_session;
pub mod equipment;
pub mod member;
pub mod payment;
pub mod staff;
pub mod status;

pub use attendance::{AttendanceRecord, CreateAttendanceRecord, UpdateAttendanceRecord};
pub use class_session::{ClassSession, CreateClassSession, UpdateClassSession};
pub use equipment::{CreateEquipmentItem, EquipmentItem, UpdateEquipmentItem};
pub use member::{CreateMember, Member, UpdateMember};
pub use payment::{CreatePayment, Payment, UpdatePayment};
pub use staff::{CreateStaffMember, StaffMember, UpdateStaffMember};
