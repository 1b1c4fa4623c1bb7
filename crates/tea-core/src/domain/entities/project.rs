//! Project identity: the validated name, the persisted manifest, and the
//! request that drives one run of the initialization pipeline.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ProjectType};

/// Reserved file name of the manifest inside a project root.
pub const MANIFEST_FILE_NAME: &str = ".teaproject";

/// Description stored when the user leaves it blank.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A project name that is safe to use as a single directory component.
///
/// Invariant: non-empty, no path separators, no leading dot, no control
/// characters. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw name. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let name = raw.trim();
        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── ProjectManifest ───────────────────────────────────────────────────────────

/// Metadata persisted into every project root as `.teaproject`.
///
/// Written once at initialization time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub readme: bool,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl ProjectManifest {
    pub fn new(
        name: &ProjectName,
        project_type: ProjectType,
        description: impl Into<String>,
        readme: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            project_type,
            description: description.into(),
            readme,
        }
    }

    pub fn from_request(request: &ProjectRequest) -> Self {
        Self::new(
            request.name(),
            request.project_type(),
            request.description(),
            request.readme(),
        )
    }

    /// Re-check invariants after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        ProjectName::parse(&self.name)
            .map(|_| ())
            .map_err(|e| DomainError::InvalidManifest(e.to_string()))
    }
}

// ── ProjectRequest ────────────────────────────────────────────────────────────

/// Fully-validated input for one pipeline run.
///
/// Every field is checked by [`ProjectRequestBuilder`]; once a request exists
/// no stage needs to re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: ProjectName,
    description: String,
    project_type: ProjectType,
    readme: bool,
    base_dir: PathBuf,
    create_subdirectory: bool,
}

impl ProjectRequest {
    pub fn builder() -> ProjectRequestBuilder {
        ProjectRequestBuilder::default()
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }
    pub const fn readme(&self) -> bool {
        self.readme
    }
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
    pub const fn create_subdirectory(&self) -> bool {
        self.create_subdirectory
    }
}

/// Builder for [`ProjectRequest`].
///
/// Setters that take raw strings are fallible so that an invalid name or an
/// unknown type is rejected before anything touches the disk.
#[derive(Debug, Default)]
pub struct ProjectRequestBuilder {
    name: Option<ProjectName>,
    description: Option<String>,
    project_type: Option<ProjectType>,
    readme: Option<bool>,
    base_dir: Option<PathBuf>,
    create_subdirectory: bool,
}

impl ProjectRequestBuilder {
    pub fn name(mut self, raw: &str) -> Result<Self, DomainError> {
        self.name = Some(ProjectName::parse(raw)?);
        Ok(self)
    }

    /// Use a name that was already validated.
    pub fn project_name(mut self, name: ProjectName) -> Self {
        self.name = Some(name);
        self
    }

    /// Blank descriptions are replaced by [`DEFAULT_DESCRIPTION`] at build time.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn project_type_str(mut self, raw: &str) -> Result<Self, DomainError> {
        self.project_type = Some(raw.parse()?);
        Ok(self)
    }

    /// Defaults to `true` when never called.
    pub fn readme(mut self, readme: bool) -> Self {
        self.readme = Some(readme);
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn create_subdirectory(mut self, create: bool) -> Self {
        self.create_subdirectory = create;
        self
    }

    pub fn build(self) -> Result<ProjectRequest, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let project_type = self
            .project_type
            .ok_or(DomainError::MissingRequiredField { field: "type" })?;
        let base_dir = self
            .base_dir
            .ok_or(DomainError::MissingRequiredField { field: "base_dir" })?;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(default_description);

        Ok(ProjectRequest {
            name,
            description,
            project_type,
            readme: self.readme.unwrap_or(true),
            base_dir,
            create_subdirectory: self.create_subdirectory,
        })
    }
}
