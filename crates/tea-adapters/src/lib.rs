//! Infrastructure adapters for tea.
//!
//! This crate implements the ports defined in `tea-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;
pub mod process;
pub mod templates;

// Re-export commonly used adapters
pub use config_store::{InMemoryConfigStore, TomlConfigStore, default_config};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemToolRunner;
pub use templates::{TEMPLATES_DIR_ENV, resolve_templates_dir};
