pub mod config;
pub mod project;
pub mod readme;

pub use crate::domain::DomainError;
pub use config::{AUTO_LANGUAGE, Config};
pub use project::{
    DEFAULT_DESCRIPTION, MANIFEST_FILE_NAME, ProjectManifest, ProjectName, ProjectRequest,
    ProjectRequestBuilder,
};
pub use readme::{README_FILE_NAME, README_TEMPLATE, RenderContext};
