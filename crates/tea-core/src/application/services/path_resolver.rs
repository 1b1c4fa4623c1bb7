//! Computes and creates the project directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ProjectName,
    error::TeaResult,
};

/// The directory a project will be initialized in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    /// `true` when this call created the directory; `false` if it existed.
    pub created: bool,
}

pub struct PathResolver {
    filesystem: Arc<dyn Filesystem>,
}

impl PathResolver {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// `base/name` when `create_subdirectory` is set, `base` otherwise.
    ///
    /// Missing intermediate directories are created. Idempotent: resolving an
    /// existing directory succeeds with `created = false`.
    #[instrument(
        skip_all,
        fields(base = %base.display(), name = %name, create_subdirectory = create_subdirectory)
    )]
    pub fn resolve(
        &self,
        base: &Path,
        name: &ProjectName,
        create_subdirectory: bool,
    ) -> TeaResult<ResolvedPath> {
        let path = if create_subdirectory {
            base.join(name)
        } else {
            base.to_path_buf()
        };

        if self.filesystem.exists(&path) {
            if !self.filesystem.is_dir(&path) {
                return Err(ApplicationError::PathUnwritable {
                    path,
                    reason: "path exists and is not a directory".into(),
                }
                .into());
            }
            debug!(path = %path.display(), "Project directory already exists");
            return Ok(ResolvedPath {
                path,
                created: false,
            });
        }

        self.filesystem
            .create_dir_all(&path)
            .map_err(|e| ApplicationError::PathUnwritable {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "Created project directory");
        Ok(ResolvedPath {
            path,
            created: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::TeaError;

    fn name(raw: &str) -> ProjectName {
        ProjectName::parse(raw).unwrap()
    }

    #[test]
    fn joins_name_when_subdirectory_requested() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/base/proj"))
            .times(1)
            .returning(|_| Ok(()));

        let resolved = PathResolver::new(Arc::new(fs))
            .resolve(Path::new("/base"), &name("proj"), true)
            .unwrap();

        assert_eq!(resolved.path, PathBuf::from("/base/proj"));
        assert!(resolved.created);
    }

    #[test]
    fn uses_base_as_is_without_subdirectory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir_all().never();

        let resolved = PathResolver::new(Arc::new(fs))
            .resolve(Path::new("/base"), &name("proj"), false)
            .unwrap();

        assert_eq!(resolved.path, PathBuf::from("/base"));
        assert!(!resolved.created);
    }

    #[test]
    fn existing_file_is_unwritable() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);

        let err = PathResolver::new(Arc::new(fs))
            .resolve(Path::new("/base"), &name("proj"), true)
            .unwrap_err();

        assert!(matches!(
            err,
            TeaError::Application(ApplicationError::PathUnwritable { .. })
        ));
    }

    #[test]
    fn creation_failure_is_unwritable() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::IoFailure {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let err = PathResolver::new(Arc::new(fs))
            .resolve(Path::new("/root-owned"), &name("proj"), true)
            .unwrap_err();

        match err {
            TeaError::Application(ApplicationError::PathUnwritable { path, reason }) => {
                assert_eq!(path, PathBuf::from("/root-owned/proj"));
                assert!(reason.contains("permission denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
