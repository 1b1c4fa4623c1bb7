//! Persists and reads back the `.teaproject` manifest.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, DomainValidator, MANIFEST_FILE_NAME, ProjectManifest},
    error::TeaResult,
};

pub struct ManifestWriter {
    filesystem: Arc<dyn Filesystem>,
}

impl ManifestWriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    pub fn manifest_path(project_root: &Path) -> PathBuf {
        project_root.join(MANIFEST_FILE_NAME)
    }

    /// Serialize `manifest` as YAML into `<project_root>/.teaproject`,
    /// replacing any previous manifest atomically.
    #[instrument(skip_all, fields(root = %project_root.display(), project = %manifest.name))]
    pub fn write(&self, project_root: &Path, manifest: &ProjectManifest) -> TeaResult<PathBuf> {
        let path = Self::manifest_path(project_root);

        let yaml =
            serde_yaml::to_string(manifest).map_err(|e| ApplicationError::ManifestWriteFailure {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        self.filesystem
            .write_file_atomic(&path, &yaml)
            .map_err(|e| ApplicationError::ManifestWriteFailure {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), bytes = yaml.len(), "Manifest written");
        Ok(path)
    }

    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn read(&self, project_root: &Path) -> TeaResult<ProjectManifest> {
        let path = Self::manifest_path(project_root);

        let content = self.filesystem.read_to_string(&path).map_err(|e| {
            ApplicationError::ManifestReadFailure {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;

        let manifest: ProjectManifest = serde_yaml::from_str(&content)
            .map_err(|e| DomainError::InvalidManifest(e.to_string()))?;
        DomainValidator::validate_manifest(&manifest)?;

        Ok(manifest)
    }
}
