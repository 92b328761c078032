//! Integration tests for login, session persistence, and view authorization.

use assert_matches::assert_matches;
use gympro_console::authorizer::{Access, View};
use gympro_console::config::ConsoleConfig;
use gympro_console::state::App;
use gympro_core::error::CoreError;
use gympro_core::roles::Role;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_config(dir: &TempDir) -> ConsoleConfig {
    ConsoleConfig {
        session_file: dir.path().join("session.json"),
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[test]
fn login_with_demo_credentials_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::with_fixtures(&test_config(&dir));

    let session = app.login("admin", "password").expect("login");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.display_name, "Admin User");
    assert!(app.session().is_some());
}

#[test]
fn login_with_wrong_password_leaves_no_session() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::with_fixtures(&test_config(&dir));

    let err = app.login("admin", "hunter2").expect_err("bad password");
    assert_matches!(err, CoreError::Unauthorized(_));
    assert!(app.session().is_none());
    // Nothing was persisted either.
    assert!(!dir.path().join("session.json").exists());
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn session_survives_a_restart() {
    let dir = TempDir::new().expect("tempdir");
    let config = test_config(&dir);

    let mut app = App::with_fixtures(&config);
    app.login("staff", "password").expect("login");
    drop(app);

    // A fresh app over the same config picks the session back up.
    let mut app = App::with_fixtures(&config);
    assert!(app.session().is_none());
    let restored = app.restore_session().expect("restored session");
    assert_eq!(restored.username, "staff");
    assert_eq!(restored.role, Role::Staff);
}

#[test]
fn logout_clears_memory_and_disk() {
    let dir = TempDir::new().expect("tempdir");
    let config = test_config(&dir);

    let mut app = App::with_fixtures(&config);
    app.login("admin", "password").expect("login");
    assert!(config.session_file.exists());

    app.logout();
    assert!(app.session().is_none());
    assert!(!config.session_file.exists());

    // Restart finds nothing.
    let mut app = App::with_fixtures(&config);
    assert!(app.restore_session().is_none());
}

#[test]
fn malformed_session_blob_is_discarded() {
    let dir = TempDir::new().expect("tempdir");
    let config = test_config(&dir);
    std::fs::write(&config.session_file, "{not json").expect("write blob");

    let mut app = App::with_fixtures(&config);
    assert!(app.restore_session().is_none());
    // The broken blob was removed so the next run starts clean.
    assert!(!config.session_file.exists());
}

#[test]
fn update_session_re_persists_the_blob() {
    let dir = TempDir::new().expect("tempdir");
    let config = test_config(&dir);

    let mut app = App::with_fixtures(&config);
    let mut session = app.login("admin", "password").expect("login").clone();
    session.display_name = "Front Desk".to_string();
    app.update_session(session);

    let mut app = App::with_fixtures(&config);
    let restored = app.restore_session().expect("restored session");
    assert_eq!(restored.display_name, "Front Desk");
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[test]
fn signed_out_operator_is_sent_to_login_everywhere() {
    let dir = TempDir::new().expect("tempdir");
    let app = App::with_fixtures(&test_config(&dir));

    for view in View::PROTECTED {
        assert_eq!(app.authorize(*view), Access::Redirect(View::Login));
    }
    assert_eq!(app.authorize(View::Login), Access::Granted);
}

#[test]
fn staff_role_is_redirected_from_admin_views() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::with_fixtures(&test_config(&dir));
    app.login("staff", "password").expect("login");

    assert_eq!(app.authorize(View::Members), Access::Granted);
    assert_eq!(app.authorize(View::Equipment), Access::Granted);
    assert_eq!(app.authorize(View::Staff), Access::Redirect(View::Dashboard));
    assert_eq!(
        app.authorize(View::Reports),
        Access::Redirect(View::Dashboard)
    );
}

#[test]
fn member_role_only_reaches_open_views() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::with_fixtures(&test_config(&dir));
    app.login("member", "password").expect("login");

    for view in [View::Dashboard, View::Classes, View::Attendance] {
        assert_eq!(app.authorize(view), Access::Granted);
    }
    for view in [
        View::Members,
        View::Staff,
        View::Payments,
        View::Equipment,
        View::Reports,
    ] {
        assert_eq!(app.authorize(view), Access::Redirect(View::Dashboard));
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[test]
fn dashboard_tracks_collection_changes() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::with_fixtures(&test_config(&dir));

    let before = app.dashboard();
    assert_eq!(before.total_members, 5);
    assert_eq!(before.monthly_revenue, 375.0);

    assert!(app.members.remove(5));
    let after = app.dashboard();
    assert_eq!(after.total_members, 4);
}
