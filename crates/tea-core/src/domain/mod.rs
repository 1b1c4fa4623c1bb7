//! Core domain layer for tea.
//!
//! Pure types and rules: project names, project types, the manifest, the
//! typed configuration and the README template. No I/O happens here; all
//! filesystem and process access goes through the ports in
//! `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or process calls
//! - **No logging**: `tracing` is used from the application layer outward
//! - **Validated on construction**: `ProjectName` and `ProjectRequest` cannot
//!   exist in an invalid state

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    AUTO_LANGUAGE, Config, DEFAULT_DESCRIPTION, MANIFEST_FILE_NAME, ProjectManifest, ProjectName,
    ProjectRequest, ProjectRequestBuilder, README_FILE_NAME, README_TEMPLATE, RenderContext,
};
pub use error::DomainError;
pub use validation::DomainValidator;
pub use value_objects::{ConfigKey, ProjectType};
