//! Persisted session blob and its on-disk store.

use std::io;
use std::path::PathBuf;

use gympro_core::roles::Role;
use serde::{Deserialize, Serialize};

/// The signed-in operator, as persisted between runs.
///
/// Serialized in camelCase so the blob matches what the console's views
/// render and what older installs already have on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "name")]
    pub display_name: String,
    pub avatar: String,
}

/// Loads, saves, and clears the session blob at a configured path.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Load the persisted session, if any.
    ///
    /// A malformed blob is treated as signed-out: it is logged, removed,
    /// and `None` is returned.
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "discarding malformed session blob");
                if let Err(err) = self.clear() {
                    tracing::warn!(%err, "failed to remove malformed session blob");
                }
                None
            }
        }
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string_pretty(session).map_err(io::Error::other)?;
        std::fs::write(&self.path, blob)
    }

    /// Remove the persisted session. Missing file counts as cleared.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_in_camel_case() {
        let session = Session {
            id: 1,
            username: "admin".into(),
            email: "admin@gym.com".into(),
            role: Role::Admin,
            display_name: "Admin User".into(),
            avatar: "👨‍💼".into(),
        };
        let blob = serde_json::to_value(&session).expect("serialize");
        assert_eq!(blob["name"], "Admin User");
        assert_eq!(blob["role"], "admin");
        let back: Session = serde_json::from_value(blob).expect("deserialize");
        assert_eq!(back, session);
    }
}
