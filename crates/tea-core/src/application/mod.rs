//! Application layer for tea.
//!
//! This layer contains:
//! - **Services**: The pipeline stages and the `ProjectInitializer` orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Events**: Structured per-stage outcomes handed back to the caller
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no validation
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod events;
pub mod ports;
pub mod services;

pub use services::{
    FailurePolicy, ManifestWriter, PathResolver, ProjectInitializer, ReadmeGenerator,
    ResolvedPath, TemplateDispatcher, TemplateOutcome,
};

pub use events::{InitReport, Stage, StageEvent, StageStatus, StageWarning};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, ExternalCommand, Filesystem, ToolRunner};

pub use error::ApplicationError;
