//! Error types for todo
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad ID, not initialized, bad config)
//! - 4: Operation failed (database read/write/decode, I/O)

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Stable error code space shared by the store, the task manager and the
/// config layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigDir = 1,
    ConfigFile = 2,
    DbRead = 3,
    DbWrite = 4,
    Decode = 5,
    InvalidId = 6,
    Other = 7,
}

impl ErrorKind {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    // Config initialization
    #[error("Config directory error: {path}: {source}")]
    ConfigDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file error: {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file not found: {0}")]
    NotInitialized(PathBuf),

    #[error("Database not found: {0}")]
    DatabaseMissing(PathBuf),

    // Record store
    #[error("Database read error: {path}: {source}")]
    DbRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database write error: {path}: {reason}")]
    DbWrite { path: PathBuf, reason: String },

    #[error("Database decode error: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Task manager
    #[error("To-Do ID error: no task #{0}")]
    InvalidId(usize),

    // Plumbing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidId(_)
            | Error::InvalidConfig(_)
            | Error::NotInitialized(_)
            | Error::DatabaseMissing(_) => exit_codes::USER_ERROR,

            Error::ConfigDir { .. }
            | Error::ConfigFile { .. }
            | Error::DbRead { .. }
            | Error::DbWrite { .. }
            | Error::Decode { .. }
            | Error::Io(_)
            | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Get the error kind used to pick a user-facing message
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigDir { .. } => ErrorKind::ConfigDir,
            Error::ConfigFile { .. } | Error::InvalidConfig(_) | Error::NotInitialized(_) => {
                ErrorKind::ConfigFile
            }
            Error::DbRead { .. } | Error::DatabaseMissing(_) => ErrorKind::DbRead,
            Error::DbWrite { .. } => ErrorKind::DbWrite,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::InvalidId(_) => ErrorKind::InvalidId,
            Error::Io(_) | Error::Json(_) => ErrorKind::Other,
        }
    }

    /// Structured details for JSON output, when the variant carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::ConfigDir { path, .. }
            | Error::ConfigFile { path, .. }
            | Error::NotInitialized(path)
            | Error::DatabaseMissing(path)
            | Error::DbRead { path, .. }
            | Error::DbWrite { path, .. }
            | Error::Decode { path, .. } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            Error::InvalidId(id) => Some(serde_json::json!({ "id": id })),
            Error::InvalidConfig(message) => Some(serde_json::json!({ "message": message })),
            Error::Io(_) | Error::Json(_) => None,
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

/// A value that could not be persisted, handed back with the reason.
///
/// The store returns the collection it attempted to write, and the task
/// manager returns the task it built, so callers can inspect or retry
/// without re-deriving either.
#[derive(Debug)]
pub struct Unsaved<T> {
    pub attempted: T,
    pub error: Error,
}

impl<T> Unsaved<T> {
    pub fn new(attempted: T, error: Error) -> Self {
        Self { attempted, error }
    }

    pub fn into_error(self) -> Error {
        self.error
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Unsaved<U> {
        Unsaved {
            attempted: f(self.attempted),
            error: self.error,
        }
    }
}

impl<T> fmt::Display for Unsaved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> std::error::Error for Unsaved<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Unsaved<T>> for Error {
    fn from(unsaved: Unsaved<T>) -> Self {
        unsaved.error
    }
}

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub message: String,
    pub code: i32,
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            message: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
            details: err.details(),
        }
    }
}
