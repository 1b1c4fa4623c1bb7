//! Local filesystem adapter using std::fs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, trace};
use walkdir::WalkDir;

use tea_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{TeaError, TeaResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TeaResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TeaResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_file_atomic(&self, path: &Path, content: &str) -> TeaResult<()> {
        write_atomic(path, content.as_bytes()).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> TeaResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> TeaResult<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(from).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::IoFailure {
                path: e.path().unwrap_or(from).to_path_buf(),
                reason: format!("Failed to walk template directory: {}", e),
            })?;

            let relative = entry.path().strip_prefix(from).map_err(|_| TeaError::Internal {
                message: format!(
                    "walked path {} is outside {}",
                    entry.path().display(),
                    from.display()
                ),
            })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                self.create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| map_io_error(&target, e, "copy file"))?;
            trace!(file = %relative.display(), "Copied");
            copied += 1;
        }

        debug!(from = %from.display(), to = %to.display(), copied, "Tree copied");
        Ok(copied)
    }

    fn remove_dir_all(&self, path: &Path) -> TeaResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

/// Write through a temp file in the destination directory, then rename over
/// `path`. Readers never observe a half-written file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> TeaError {
    ApplicationError::IoFailure {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
