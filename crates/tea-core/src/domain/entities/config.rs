//! Typed user configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigKey;

/// Value of `LANGUAGE` written on first use; defers to locale detection.
pub const AUTO_LANGUAGE: &str = "AUTO";

/// User preferences persisted by a `ConfigStore`.
///
/// Every field is optional so that a hand-edited file with a key removed still
/// loads. Keys the program does not know are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "LANGUAGE", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        rename = "PROJECTS_DIRECTORY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub projects_directory: Option<PathBuf>,
}

impl Config {
    /// The mapping written when no configuration exists yet.
    pub fn seeded(projects_directory: impl Into<PathBuf>) -> Self {
        Self {
            language: Some(AUTO_LANGUAGE.to_string()),
            projects_directory: Some(projects_directory.into()),
        }
    }

    /// Stored value for `key`, or `default` when the key is unset.
    pub fn get(&self, key: ConfigKey, default: &str) -> String {
        match key {
            ConfigKey::Language => self.language.clone(),
            ConfigKey::ProjectsDirectory => self
                .projects_directory
                .as_deref()
                .map(|p| p.display().to_string()),
        }
        .unwrap_or_else(|| default.to_string())
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            ConfigKey::Language => self.language = Some(value),
            ConfigKey::ProjectsDirectory => self.projects_directory = Some(PathBuf::from(value)),
        }
    }

    pub fn projects_directory(&self) -> Option<&Path> {
        self.projects_directory.as_deref()
    }

    /// All set keys with their values, in `ConfigKey::ALL` order.
    pub fn entries(&self) -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .iter()
            .filter_map(|key| {
                let value = match key {
                    ConfigKey::Language => self.language.clone(),
                    ConfigKey::ProjectsDirectory => self
                        .projects_directory
                        .as_deref()
                        .map(|p| p.display().to_string()),
                };
                value.map(|v| (*key, v))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_config_has_both_keys() {
        let config = Config::seeded("/home/user/Projects");
        assert_eq!(config.get(ConfigKey::Language, ""), "AUTO");
        assert_eq!(
            config.projects_directory(),
            Some(Path::new("/home/user/Projects"))
        );
    }

    #[test]
    fn get_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.get(ConfigKey::Language, "en"), "en");
    }

    #[test]
    fn set_replaces_a_single_entry() {
        let mut config = Config::seeded("/p");
        config.set(ConfigKey::Language, "fr");
        assert_eq!(config.get(ConfigKey::Language, ""), "fr");
        assert_eq!(config.get(ConfigKey::ProjectsDirectory, ""), "/p");
    }

    #[test]
    fn entries_skip_unset_keys() {
        let mut config = Config::default();
        config.set(ConfigKey::ProjectsDirectory, "/work");
        let entries = config.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, ConfigKey::ProjectsDirectory);
    }
}
