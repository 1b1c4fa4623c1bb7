//! Domain value objects: `ProjectType` and `ConfigKey`.
//!
//! Both are closed enumerations. Adding a variant is a compile error
//! everywhere it is matched, which is the point: a new project type must get
//! its own initialization strategy in the template dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of project to initialize.
///
/// Each variant is bound to exactly one initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Empty,
    Python,
    Web,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Empty, Self::Python, Self::Web];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Python => "python",
            Self::Web => "web",
        }
    }

    /// One-line summary shown by `tea types` and the type prompt.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Empty => "Empty project (manifest only)",
            Self::Python => "Python project initialized with uv",
            Self::Web => "Static web project copied from the web template",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "python" | "py" => Ok(Self::Python),
            "web" => Ok(Self::Web),
            _ => Err(DomainError::UnsupportedProjectType {
                value: s.to_string(),
            }),
        }
    }
}

// ── ConfigKey ─────────────────────────────────────────────────────────────────

/// A recognised configuration key.
///
/// The on-disk spelling is `SCREAMING_SNAKE_CASE`; parsing also accepts
/// lowercase and dotted forms (`language`, `projects.directory`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// UI language; `"AUTO"` defers to system locale detection.
    Language,
    /// Root directory new projects are created under when no path is given.
    ProjectsDirectory,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [Self::Language, Self::ProjectsDirectory];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "LANGUAGE",
            Self::ProjectsDirectory => "PROJECTS_DIRECTORY",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['.', '-'], "_");
        match normalized.as_str() {
            "LANGUAGE" | "LANG" => Ok(Self::Language),
            "PROJECTS_DIRECTORY" | "PROJECTS_DIR" => Ok(Self::ProjectsDirectory),
            _ => Err(DomainError::UnknownConfigKey { key: s.to_string() }),
        }
    }
}
