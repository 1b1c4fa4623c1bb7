//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tea-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{Config, ConfigKey};
use crate::error::TeaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tea_adapters::filesystem::LocalFilesystem` (production)
/// - `tea_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TeaResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> TeaResult<()>;

    /// Write content so that readers see either the old or the new file,
    /// never a partial one.
    fn write_file_atomic(&self, path: &Path, content: &str) -> TeaResult<()>;

    fn read_to_string(&self, path: &Path) -> TeaResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively copy the contents of `from` into `to`, overwriting files
    /// that already exist. Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> TeaResult<usize>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> TeaResult<()>;
}

/// A program plus arguments, run in a working directory by a [`ToolRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Port for external programs (package managers and similar).
///
/// Implemented by:
/// - `tea_adapters::process::SystemToolRunner` (production)
/// - a `mockall` mock in tests
#[cfg_attr(test, mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Absolute path of `program` if it can be found, `None` otherwise.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run `command` to completion in `working_dir` and return its exit code.
    ///
    /// A process killed by a signal reports `-1`. Failure to spawn is an
    /// `ExternalToolFailure` error, not an exit code.
    fn run(&self, command: &ExternalCommand, working_dir: &Path) -> TeaResult<i32>;
}

/// Port for persistent user configuration.
///
/// Implemented by:
/// - `tea_adapters::config_store::TomlConfigStore` (production)
/// - `tea_adapters::config_store::InMemoryConfigStore` (testing)
pub trait ConfigStore: Send + Sync {
    /// Return the persisted configuration, seeding and persisting the
    /// default mapping when none exists yet.
    fn load(&self) -> TeaResult<Config>;

    /// Persist the whole configuration, overwriting prior content.
    fn save(&self, config: &Config) -> TeaResult<()>;

    /// Where the configuration lives, for display.
    fn location(&self) -> String;

    fn get(&self, key: ConfigKey, default: &str) -> TeaResult<String> {
        Ok(self.load()?.get(key, default))
    }

    /// Read-modify-write of a single key.
    fn set(&self, key: ConfigKey, value: &str) -> TeaResult<()> {
        let mut config = self.load()?;
        config.set(key, value);
        self.save(&config)
    }
}
