//! Configuration store adapters.

mod memory;
mod toml_file;

pub use memory::InMemoryConfigStore;
pub use toml_file::{CONFIG_FILE_NAME, TomlConfigStore, default_config};
