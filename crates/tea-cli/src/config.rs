//! Configuration file location.
//!
//! The CLI owns *where* the configuration lives; reading and writing it is
//! the job of [`TomlConfigStore`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config FILE` or `$TEA_CONFIG`
//! 2. `config.toml` next to the executable, if it exists
//! 3. the platform config directory (`~/.config/tea/config.toml` on Linux)

use std::path::{Path, PathBuf};

use tracing::debug;

use tea_adapters::{TomlConfigStore, config_store::CONFIG_FILE_NAME};

/// Build the store for this invocation.  Nothing is read until a command
/// asks for a value.
pub fn open_store(explicit: Option<&Path>) -> TomlConfigStore {
    let path = config_path(explicit);
    debug!(path = %path.display(), "configuration file");
    TomlConfigStore::new(path)
}

pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = exe_sibling_config().filter(|p| p.is_file()) {
        return path;
    }
    platform_config_path()
}

fn exe_sibling_config() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
}

/// Uses `directories::ProjectDirs` for cross-platform correctness, falling
/// back to `config.toml` in the current directory.
fn platform_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "tea", "tea")
        .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
