//! Tool runner backed by `std::process::Command`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument, warn};

use tea_core::{
    application::{
        ApplicationError,
        ports::{ExternalCommand, ToolRunner},
    },
    error::TeaResult,
};

/// Runs programs found on `PATH`, or on an explicit search path.
#[derive(Debug, Clone, Default)]
pub struct SystemToolRunner {
    search_path: Option<OsString>,
}

impl SystemToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look programs up in `paths` (a `PATH`-style list) instead of `$PATH`.
    pub fn with_search_path(paths: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }

    fn program_for(&self, command: &ExternalCommand) -> PathBuf {
        match &self.search_path {
            Some(_) => self
                .locate(&command.program)
                .unwrap_or_else(|| PathBuf::from(&command.program)),
            None => PathBuf::from(&command.program),
        }
    }
}

impl ToolRunner for SystemToolRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(program, Some(paths), cwd)
            }
            None => which::which(program),
        };

        match found {
            Ok(path) => {
                debug!(program, path = %path.display(), "Located program");
                Some(path)
            }
            Err(e) => {
                debug!(program, error = %e, "Program not found");
                None
            }
        }
    }

    #[instrument(skip_all, fields(command = %command, dir = %working_dir.display()))]
    fn run(&self, command: &ExternalCommand, working_dir: &Path) -> TeaResult<i32> {
        let output = Command::new(self.program_for(command))
            .args(&command.args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| ApplicationError::ExternalToolFailure {
                command: command.to_string(),
                reason: format!("failed to start: {}", e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(stdout = %stdout.trim_end(), "Command output");

        // Killed by a signal: no exit code.
        let code = output.status.code().unwrap_or(-1);
        if output.status.success() {
            debug!(code, "Command finished");
        } else {
            warn!(code, stderr = %stderr.trim_end(), "Command failed");
        }

        Ok(code)
    }
}
