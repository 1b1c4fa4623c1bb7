//! Renders `README.md` from the built-in template.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{README_FILE_NAME, README_TEMPLATE, RenderContext},
    error::TeaResult,
};

pub struct ReadmeGenerator {
    filesystem: Arc<dyn Filesystem>,
}

impl ReadmeGenerator {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `<project_root>/README.md`, overwriting an existing one.
    #[instrument(skip_all, fields(root = %project_root.display(), project = name))]
    pub fn generate(
        &self,
        project_root: &Path,
        name: &str,
        description: &str,
    ) -> TeaResult<PathBuf> {
        let content = RenderContext::new(name, description).render(README_TEMPLATE);
        let path = project_root.join(README_FILE_NAME);

        self.filesystem.write_file(&path, &content)?;
        debug!(path = %path.display(), "README written");

        Ok(path)
    }
}
