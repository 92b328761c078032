use std::path::PathBuf;

/// Console configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use; override via
/// environment variables where the console should keep its state elsewhere.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Where the signed-in session blob is persisted
    /// (default: `.gympro/session.json`).
    pub session_file: PathBuf,
}

impl ConsoleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                |
    /// |-----------------------|------------------------|
    /// | `GYMPRO_SESSION_FILE` | `.gympro/session.json` |
    pub fn from_env() -> Self {
        let session_file = std::env::var("GYMPRO_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".gympro/session.json"));

        Self { session_file }
    }
}
