//! Application services - orchestrate use cases.
//!
//! Each pipeline stage is its own service; `ProjectInitializer` composes them
//! into the "initialize a project" use case.

pub mod manifest_writer;
pub mod path_resolver;
pub mod project_initializer;
pub mod readme_generator;
pub mod template_dispatcher;

pub use manifest_writer::ManifestWriter;
pub use path_resolver::{PathResolver, ResolvedPath};
pub use project_initializer::{FailurePolicy, ProjectInitializer};
pub use readme_generator::ReadmeGenerator;
pub use template_dispatcher::{
    PYTHON_FALLBACK_CONTENT, PYTHON_FALLBACK_FILE, TemplateDispatcher, TemplateOutcome, UV,
    WEB_TEMPLATE_DIR,
};
