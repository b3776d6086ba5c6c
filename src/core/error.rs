use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the entire launcher backend.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Records ─────────────────────────────────────────
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Corrupt record at {path:?}: {reason}")]
    CorruptRecord { path: PathBuf, reason: String },

    // ── Input validation ────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    // ── Launch ──────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to launch {executable:?}: {reason}")]
    Launch { executable: PathBuf, reason: String },
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        LauncherError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

// ── Serialization for the command layer ─────────────────
// Api responses travel to the UI host as JSON, so the error type
// must be `Serialize`; the string form is what the UI shows.
impl serde::Serialize for LauncherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
