//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tea-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File and directory operations
//!   - `ToolRunner`: Locating and running external programs
//!   - `ConfigStore`: Persistent user configuration

pub mod output;

pub use output::{ConfigStore, ExternalCommand, Filesystem, ToolRunner};
