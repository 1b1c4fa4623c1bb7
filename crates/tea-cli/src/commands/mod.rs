//! Subcommand handlers.  Each module exposes a single `execute`.

pub mod completions;
pub mod config;
pub mod info;
pub mod new;
pub mod types;
