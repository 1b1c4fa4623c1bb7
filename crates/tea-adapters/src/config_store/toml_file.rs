//! TOML-file configuration store.
//!
//! # File format
//!
//! ```toml
//! LANGUAGE = "AUTO"
//! PROJECTS_DIRECTORY = "/home/user/Projects"
//! ```
//!
//! A missing file is seeded with the defaults on first `load`. Writes go
//! through a temp file and a rename. `set` additionally holds an exclusive
//! lock on `<file>.lock` for the whole read-modify-write.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::{debug, info, instrument};

use tea_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{Config, ConfigKey},
    error::TeaResult,
};

use crate::filesystem::write_atomic;

/// Name of the configuration file inside its directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration: `LANGUAGE = "AUTO"`, projects under `<home>/Projects`.
pub fn default_config() -> Config {
    let home = directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    Config::seeded(home.join("Projects"))
}

#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
    defaults: Config,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_defaults(path, default_config())
    }

    /// Store seeded with `defaults` instead of [`default_config`].
    pub fn with_defaults(path: impl Into<PathBuf>, defaults: Config) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".lock");
        PathBuf::from(name)
    }

    fn io_error(&self, e: io::Error) -> ApplicationError {
        ApplicationError::IoFailure {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }

    fn ensure_parent(&self) -> TeaResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        Ok(())
    }

    /// Exclusive advisory lock, released when the returned file is dropped.
    fn lock(&self) -> TeaResult<File> {
        self.ensure_parent()?;
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| ApplicationError::StoreLockError {
                reason: format!("cannot open {}: {}", lock_path.display(), e),
            })?;
        file.lock_exclusive()
            .map_err(|e| ApplicationError::StoreLockError {
                reason: format!("cannot lock {}: {}", lock_path.display(), e),
            })?;
        Ok(file)
    }
}

impl ConfigStore for TomlConfigStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> TeaResult<Config> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No configuration found, writing defaults");
                self.save(&self.defaults)?;
                return Ok(self.defaults.clone());
            }
            Err(e) => return Err(self.io_error(e).into()),
        };

        let config: Config =
            toml::from_str(&content).map_err(|e| ApplicationError::ConfigCorrupt {
                path: self.path.clone(),
                reason: e.message().to_string(),
            })?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, config: &Config) -> TeaResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| ApplicationError::IoFailure {
            path: self.path.clone(),
            reason: format!("cannot serialize configuration: {}", e),
        })?;

        self.ensure_parent()?;
        write_atomic(&self.path, content.as_bytes()).map_err(|e| self.io_error(e))?;

        debug!("Configuration saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self, value), fields(path = %self.path.display(), key = %key))]
    fn set(&self, key: ConfigKey, value: &str) -> TeaResult<()> {
        let _guard = self.lock()?;

        let mut config = self.load()?;
        config.set(key, value);
        self.save(&config)?;

        info!(value, "Configuration updated");
        Ok(())
    }
}
