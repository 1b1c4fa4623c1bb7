// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Everything here is raised before any filesystem work happens: a
/// `DomainError` means the caller handed the pipeline something it cannot
/// accept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unsupported project type '{value}'")]
    UnsupportedProjectType { value: String },

    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: demo, my-site, data_tools".into(),
            ],
            Self::UnsupportedProjectType { value } => vec![
                format!("'{}' is not a supported project type", value),
                "Supported types: empty, python, web".into(),
                "Try: tea types".into(),
            ],
            Self::UnknownConfigKey { key } => vec![
                format!("'{}' is not a configuration key", key),
                "Known keys: LANGUAGE, PROJECTS_DIRECTORY".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
            Self::InvalidManifest(_) => vec![
                "The .teaproject file does not describe a valid project".into(),
                "Re-run `tea new` in this directory to rewrite it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidManifest(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}
