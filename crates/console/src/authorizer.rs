//! Role-based view authorization.
//!
//! A static route table maps each view to the roles allowed through.
//! Authorization decides between rendering the view and redirecting, so the
//! result is an [`Access`] value rather than an error.

use gympro_core::roles::Role;

use crate::auth::session::Session;

/// Every navigable view in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Members,
    Staff,
    Classes,
    Attendance,
    Payments,
    Equipment,
    Reports,
}

impl View {
    /// Every view that requires a session.
    pub const PROTECTED: &'static [View] = &[
        View::Dashboard,
        View::Members,
        View::Staff,
        View::Classes,
        View::Attendance,
        View::Payments,
        View::Equipment,
        View::Reports,
    ];

    /// Roles allowed into this view. An empty slice means any signed-in
    /// role.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            View::Login | View::Dashboard | View::Classes | View::Attendance => &[],
            View::Members | View::Payments | View::Equipment => &[Role::Admin, Role::Staff],
            View::Staff | View::Reports => &[Role::Admin],
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Render this view instead.
    Redirect(View),
}

/// Two-tier check: a session gate, then the role gate.
///
/// - The login view is always reachable.
/// - Without a session, every other view redirects to login.
/// - With a session but the wrong role, the view redirects to the
///   dashboard, which every role may see.
pub fn authorize(session: Option<&Session>, view: View) -> Access {
    if view == View::Login {
        return Access::Granted;
    }
    let Some(session) = session else {
        return Access::Redirect(View::Login);
    };
    let allowed = view.allowed_roles();
    if allowed.is_empty() || allowed.contains(&session.role) {
        Access::Granted
    } else {
        Access::Redirect(View::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DEMO_PASSWORD, authenticate};

    #[test]
    fn login_is_reachable_without_a_session() {
        assert_eq!(authorize(None, View::Login), Access::Granted);
    }

    #[test]
    fn protected_views_redirect_to_login_when_signed_out() {
        for view in View::PROTECTED {
            assert_eq!(authorize(None, *view), Access::Redirect(View::Login));
        }
    }

    #[test]
    fn admin_reaches_every_view() {
        let session = authenticate("admin", DEMO_PASSWORD).expect("login");
        for view in View::PROTECTED {
            assert_eq!(authorize(Some(&session), *view), Access::Granted);
        }
    }

    #[test]
    fn staff_is_redirected_from_admin_only_views() {
        let session = authenticate("staff", DEMO_PASSWORD).expect("login");
        assert_eq!(
            authorize(Some(&session), View::Staff),
            Access::Redirect(View::Dashboard)
        );
        assert_eq!(
            authorize(Some(&session), View::Reports),
            Access::Redirect(View::Dashboard)
        );
        assert_eq!(authorize(Some(&session), View::Members), Access::Granted);
        assert_eq!(authorize(Some(&session), View::Payments), Access::Granted);
    }

    #[test]
    fn member_only_reaches_open_views() {
        let session = authenticate("member", DEMO_PASSWORD).expect("login");
        for view in [View::Dashboard, View::Classes, View::Attendance] {
            assert_eq!(authorize(Some(&session), view), Access::Granted);
        }
        for view in [
            View::Members,
            View::Staff,
            View::Payments,
            View::Equipment,
            View::Reports,
        ] {
            assert_eq!(
                authorize(Some(&session), view),
                Access::Redirect(View::Dashboard)
            );
        }
    }
}
