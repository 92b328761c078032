//! The application facade a frontend drives.

use gympro_core::error::CoreError;
use gympro_store::models::{
    AttendanceRecord, ClassSession, EquipmentItem, Member, Payment, StaffMember,
};
use gympro_store::stats::DashboardSnapshot;
use gympro_store::{EntityStore, fixtures};

use crate::auth;
use crate::auth::session::{Session, SessionStore};
use crate::authorizer::{Access, View, authorize};
use crate::config::ConsoleConfig;

/// Owns every entity collection plus the current session.
///
/// All console operations go through here so there is exactly one place
/// holding mutable state.
pub struct App {
    pub members: EntityStore<Member>,
    pub staff: EntityStore<StaffMember>,
    pub classes: EntityStore<ClassSession>,
    pub equipment: EntityStore<EquipmentItem>,
    pub payments: EntityStore<Payment>,
    pub attendance: EntityStore<AttendanceRecord>,
    sessions: SessionStore,
    current: Option<Session>,
}

impl App {
    /// An app with empty collections.
    pub fn new(config: &ConsoleConfig) -> Self {
        App {
            members: EntityStore::new(),
            staff: EntityStore::new(),
            classes: EntityStore::new(),
            equipment: EntityStore::new(),
            payments: EntityStore::new(),
            attendance: EntityStore::new(),
            sessions: SessionStore::new(config.session_file.clone()),
            current: None,
        }
    }

    /// An app seeded with the demo fixtures, as on first run.
    pub fn with_fixtures(config: &ConsoleConfig) -> Self {
        App {
            members: EntityStore::seed(fixtures::members()),
            staff: EntityStore::seed(fixtures::staff()),
            classes: EntityStore::seed(fixtures::classes()),
            equipment: EntityStore::seed(fixtures::equipment()),
            payments: EntityStore::seed(fixtures::payments()),
            attendance: EntityStore::seed(fixtures::attendance()),
            sessions: SessionStore::new(config.session_file.clone()),
            current: None,
        }
    }

    // -- session -------------------------------------------------------------

    /// Pick up a session persisted by an earlier run.
    pub fn restore_session(&mut self) -> Option<&Session> {
        self.current = self.sessions.load();
        self.current.as_ref()
    }

    /// The signed-in operator, if any.
    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Authenticate and persist the resulting session.
    ///
    /// A persistence failure is logged but does not fail the login; the
    /// session simply will not survive a restart.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&Session, CoreError> {
        let session = auth::authenticate(username, password)?;
        if let Err(err) = self.sessions.save(&session) {
            tracing::warn!(%err, "failed to persist session");
        }
        tracing::info!(username = %session.username, role = %session.role, "signed in");
        Ok(self.current.insert(session))
    }

    /// Drop the current session and its persisted blob.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(username = %session.username, "signed out");
        }
        if let Err(err) = self.sessions.clear() {
            tracing::warn!(%err, "failed to clear persisted session");
        }
    }

    /// Replace and re-persist the current session, as when the operator
    /// edits their profile.
    pub fn update_session(&mut self, session: Session) {
        if let Err(err) = self.sessions.save(&session) {
            tracing::warn!(%err, "failed to persist session");
        }
        self.current = Some(session);
    }

    // -- views ---------------------------------------------------------------

    /// Check whether the current operator may see a view.
    pub fn authorize(&self, view: View) -> Access {
        authorize(self.current.as_ref(), view)
    }

    /// Recompute the dashboard counters from the live collections.
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot::aggregate(
            &self.members,
            &self.classes,
            &self.attendance,
            &self.payments,
            &self.equipment,
        )
    }
}
