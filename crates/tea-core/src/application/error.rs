//! Application layer errors.
//!
//! These errors represent failures in I/O and orchestration, not invalid
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the pipeline or touching the config store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Generic filesystem failure.
    #[error("I/O error at {path}: {reason}")]
    IoFailure { path: PathBuf, reason: String },

    /// The project directory could not be created.
    #[error("Cannot create project directory {path}: {reason}")]
    PathUnwritable { path: PathBuf, reason: String },

    #[error("Failed to write manifest {path}: {reason}")]
    ManifestWriteFailure { path: PathBuf, reason: String },

    #[error("Failed to read manifest {path}: {reason}")]
    ManifestReadFailure { path: PathBuf, reason: String },

    /// External tool could not be spawned or exited non-zero.
    #[error("`{command}` failed: {reason}")]
    ExternalToolFailure { command: String, reason: String },

    /// The persisted configuration could not be parsed.
    #[error("Configuration file {path} is corrupt: {reason}")]
    ConfigCorrupt { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned or file lock unavailable).
    #[error("Configuration store is locked: {reason}")]
    StoreLockError { reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PathUnwritable { path, .. } => vec![
                format!("Cannot create: {}", path.display()),
                "Check that no file exists with the same name".into(),
                "Check that you have write permissions on the parent directory".into(),
            ],
            Self::ManifestWriteFailure { .. } => {
                vec!["Check that the project directory is writable".into()]
            }
            Self::ManifestReadFailure { .. } => vec![
                "Make sure you are inside a tea project".into(),
                "Create one with: tea new".into(),
            ],
            Self::ExternalToolFailure { command, .. } => vec![
                format!("Run `{}` manually in the project directory to see its output", command),
                "Re-run with -vv to log the tool's stderr".into(),
            ],
            Self::ConfigCorrupt { path, .. } => vec![
                format!("Fix or delete {}", path.display()),
                "Or reset it with: tea config reset".into(),
            ],
            Self::StoreLockError { .. } => vec![
                "Another tea process is updating the configuration".into(),
                "Try again in a moment".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![format!(
                "Remove {} manually before retrying",
                path.display()
            )],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoFailure { .. }
            | Self::PathUnwritable { .. }
            | Self::ManifestWriteFailure { .. }
            | Self::RollbackFailed { .. }
            | Self::StoreLockError { .. } => ErrorCategory::Internal,
            Self::ManifestReadFailure { .. } => ErrorCategory::NotFound,
            Self::ExternalToolFailure { .. } => ErrorCategory::External,
            Self::ConfigCorrupt { .. } => ErrorCategory::Configuration,
        }
    }
}
