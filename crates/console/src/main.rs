use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gympro_console::authorizer::View;
use gympro_console::config::ConsoleConfig;
use gympro_console::state::App;

fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gympro_console=info,gympro_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ConsoleConfig::from_env();
    tracing::info!(session_file = %config.session_file.display(), "Loaded console configuration");

    // --- Application state ---
    let mut app = App::with_fixtures(&config);
    tracing::info!(
        members = app.members.len(),
        staff = app.staff.len(),
        classes = app.classes.len(),
        equipment = app.equipment.len(),
        payments = app.payments.len(),
        attendance = app.attendance.len(),
        "Demo collections seeded"
    );

    // --- Session restore ---
    match app.restore_session() {
        Some(session) => {
            tracing::info!(username = %session.username, role = %session.role, "Session restored");
        }
        None => {
            tracing::info!("No persisted session; console starts at the login view");
        }
    }

    // --- Dashboard ---
    if let gympro_console::authorizer::Access::Granted = app.authorize(View::Dashboard) {
        let snapshot = app.dashboard();
        tracing::info!(
            total_members = snapshot.total_members,
            active_members = snapshot.active_members,
            total_classes = snapshot.total_classes,
            today_attendance = snapshot.today_attendance,
            monthly_revenue = snapshot.monthly_revenue,
            equipment_count = snapshot.equipment_count,
            "Dashboard snapshot"
        );
    }
}
