//! tea Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tea project
//! initialization tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              tea-cli (CLI)              │
//! │   prompts, output, exit codes, logging  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ ProjectInitializer → PathResolver,      │
//! │ ManifestWriter, TemplateDispatcher,     │
//! │ ReadmeGenerator                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │   Filesystem, ToolRunner, ConfigStore   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tea-adapters (Infrastructure)       │
//! │ LocalFilesystem, TomlConfigStore, ...   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tea_core::prelude::*;
//!
//! # fn run(fs: Arc<dyn Filesystem>, tools: Arc<dyn ToolRunner>) -> TeaResult<()> {
//! let request = ProjectRequest::builder()
//!     .name("demo")?
//!     .project_type(ProjectType::Empty)
//!     .base_dir("/tmp/x")
//!     .create_subdirectory(true)
//!     .build()?;
//!
//! let initializer = ProjectInitializer::new(fs, tools, "./templates");
//! let report = initializer.initialize(&request);
//! assert!(!report.has_failures());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FailurePolicy, InitReport, ManifestWriter, PathResolver, ProjectInitializer,
        ReadmeGenerator, ResolvedPath, Stage, StageEvent, StageStatus, StageWarning,
        TemplateDispatcher, TemplateOutcome,
        ports::{ConfigStore, ExternalCommand, Filesystem, ToolRunner},
    };
    pub use crate::domain::{
        Config, ConfigKey, ProjectManifest, ProjectName, ProjectRequest, ProjectType,
    };
    pub use crate::error::{TeaError, TeaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
