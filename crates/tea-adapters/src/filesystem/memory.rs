//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tea_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TeaResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can keep one handle for assertions
/// and give another to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_parent(&self, path: &Path) -> TeaResult<()> {
        match path.parent() {
            Some(parent)
                if !parent.as_os_str().is_empty() && !self.directories.contains(parent) =>
            {
                Err(ApplicationError::IoFailure {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

fn poisoned() -> ApplicationError {
    ApplicationError::StoreLockError {
        reason: "memory filesystem lock poisoned".into(),
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Create a file and all of its parent directories (testing helper).
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) -> TeaResult<()> {
        let path = path.as_ref();
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if let Some(parent) = path.parent() {
            inner.add_dir_all(parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    /// All files below `root`, sorted.
    pub fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| {
                inner
                    .files
                    .keys()
                    .filter(|p| p.starts_with(root))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TeaResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::IoFailure {
                    path: current,
                    reason: "A file exists where a directory is expected".into(),
                }
                .into());
            }
        }

        inner.add_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TeaResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn write_file_atomic(&self, path: &Path, content: &str) -> TeaResult<()> {
        // A single map insert under the write lock is already atomic.
        self.write_file(path, content)
    }

    fn read_to_string(&self, path: &Path) -> TeaResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::IoFailure {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> TeaResult<usize> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        for dir in &dirs {
            inner.add_dir_all(dir);
        }
        let copied = files.len();
        for (path, content) in files {
            inner.files.insert(path, content);
        }

        Ok(copied)
    }

    fn remove_dir_all(&self, path: &Path) -> TeaResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
