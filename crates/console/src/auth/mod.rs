//! Authentication against the built-in demo accounts.
//!
//! - [`session`] -- persisted session blob and its on-disk store.
//!
//! There is no user database; three fixed demo identities share one
//! password, matching what the login view advertises.

pub mod session;

use gympro_core::error::CoreError;
use gympro_core::roles::Role;

use session::Session;

/// The password every demo account accepts.
pub const DEMO_PASSWORD: &str = "password";

/// A demo account advertised on the login view.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub username: &'static str,
    pub role: Role,
}

/// The three built-in identities.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        username: "admin",
        role: Role::Admin,
    },
    DemoAccount {
        username: "staff",
        role: Role::Staff,
    },
    DemoAccount {
        username: "member",
        role: Role::Member,
    },
];

/// Username and password as typed into the login view.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Fill both fields from a demo account shortcut.
    pub fn select_demo(&mut self, account: &DemoAccount) {
        self.username = account.username.to_string();
        self.password = DEMO_PASSWORD.to_string();
    }
}

/// Validate credentials and mint a session.
///
/// Unknown usernames and wrong passwords produce the same error so the
/// login view never confirms which usernames exist.
pub fn authenticate(username: &str, password: &str) -> Result<Session, CoreError> {
    // 1. Look up the demo identity.
    let identity = demo_identity(username);

    // 2. Check the shared password. Both failures collapse into one message.
    match identity {
        Some(session) if password == DEMO_PASSWORD => Ok(session),
        _ => Err(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )),
    }
}

fn demo_identity(username: &str) -> Option<Session> {
    match username {
        "admin" => Some(Session {
            id: 1,
            username: "admin".into(),
            email: "admin@gym.com".into(),
            role: Role::Admin,
            display_name: "Admin User".into(),
            avatar: "👨‍💼".into(),
        }),
        "staff" => Some(Session {
            id: 2,
            username: "staff".into(),
            email: "staff@gym.com".into(),
            role: Role::Staff,
            display_name: "Staff User".into(),
            avatar: "👩‍💼".into(),
        }),
        "member" => Some(Session {
            id: 3,
            username: "member".into(),
            email: "member@gym.com".into(),
            role: Role::Member,
            display_name: "Member User".into(),
            avatar: "🏃‍♂️".into(),
        }),
        _ => None,
    }
}
