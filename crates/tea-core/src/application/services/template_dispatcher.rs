//! Type-specific project initialization.
//!
//! Each [`ProjectType`] maps to exactly one strategy:
//!
//! | type     | strategy                                              |
//! |----------|-------------------------------------------------------|
//! | `empty`  | nothing                                               |
//! | `python` | `uv init` + `uv sync`, or a `main.py` stub without uv |
//! | `web`    | copy `<templates>/web` into the project root          |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        events::{StageStatus, StageWarning},
        ports::{ExternalCommand, Filesystem, ToolRunner},
    },
    domain::ProjectType,
    error::TeaResult,
};

/// Package manager used for Python projects.
pub const UV: &str = "uv";

/// Stub written when `uv` is unavailable.
pub const PYTHON_FALLBACK_FILE: &str = "main.py";
pub const PYTHON_FALLBACK_CONTENT: &str = "# Your Python code goes here\n";

/// Subdirectory of the templates root holding the web skeleton.
pub const WEB_TEMPLATE_DIR: &str = "web";

/// What a strategy did to the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    Unchanged,
    ToolsRan { commands: Vec<String> },
    Copied { files: usize, from: PathBuf },
    Degraded(StageWarning),
}

impl TemplateOutcome {
    pub fn into_status(self) -> StageStatus {
        match self {
            Self::Unchanged => StageStatus::succeeded("no template files"),
            Self::ToolsRan { commands } => {
                StageStatus::succeeded(format!("ran {}", commands.join(", ")))
            }
            Self::Copied { files, from } => {
                StageStatus::succeeded(format!("copied {} files from {}", files, from.display()))
            }
            Self::Degraded(warning) => StageStatus::Warning(warning),
        }
    }
}

pub struct TemplateDispatcher {
    filesystem: Arc<dyn Filesystem>,
    tools: Arc<dyn ToolRunner>,
    templates_dir: PathBuf,
}

impl TemplateDispatcher {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        tools: Arc<dyn ToolRunner>,
        templates_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            tools,
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Apply the strategy for `project_type` and fold the result into a status.
    pub fn dispatch(&self, project_root: &Path, project_type: ProjectType) -> StageStatus {
        match self.apply(project_root, project_type) {
            Ok(outcome) => outcome.into_status(),
            Err(e) => StageStatus::Failed(e),
        }
    }

    /// Like [`dispatch`](Self::dispatch) for an unparsed type string. An unknown
    /// type fails before the directory is touched.
    pub fn dispatch_named(&self, project_root: &Path, raw_type: &str) -> StageStatus {
        match self.apply_named(project_root, raw_type) {
            Ok(outcome) => outcome.into_status(),
            Err(e) => StageStatus::Failed(e),
        }
    }

    pub fn apply_named(&self, project_root: &Path, raw_type: &str) -> TeaResult<TemplateOutcome> {
        let project_type: ProjectType = raw_type.parse()?;
        self.apply(project_root, project_type)
    }

    #[instrument(skip_all, fields(root = %project_root.display(), project_type = %project_type))]
    pub fn apply(
        &self,
        project_root: &Path,
        project_type: ProjectType,
    ) -> TeaResult<TemplateOutcome> {
        match project_type {
            ProjectType::Empty => {
                debug!("Empty project, nothing to apply");
                Ok(TemplateOutcome::Unchanged)
            }
            ProjectType::Python => self.init_python(project_root),
            ProjectType::Web => self.copy_web(project_root),
        }
    }

    // -------------------------------------------------------------------------
    // Strategies
    // -------------------------------------------------------------------------

    fn init_python(&self, project_root: &Path) -> TeaResult<TemplateOutcome> {
        let Some(uv_path) = self.tools.locate(UV) else {
            let fallback = project_root.join(PYTHON_FALLBACK_FILE);
            warn!(
                tool = UV,
                fallback = %fallback.display(),
                "Package manager not found, writing stub file"
            );
            self.filesystem.write_file(&fallback, PYTHON_FALLBACK_CONTENT)?;
            return Ok(TemplateOutcome::Degraded(StageWarning::ToolMissing {
                tool: UV.to_string(),
                fallback_file: fallback,
            }));
        };
        debug!(uv = %uv_path.display(), "Found package manager");

        let commands = [
            ExternalCommand::new(UV, ["init"]),
            ExternalCommand::new(UV, ["sync"]),
        ];

        for command in &commands {
            info!(command = %command, "Running");
            let code = self.tools.run(command, project_root)?;
            if code != 0 {
                return Err(ApplicationError::ExternalToolFailure {
                    command: command.to_string(),
                    reason: format!("exited with status {}", code),
                }
                .into());
            }
        }

        Ok(TemplateOutcome::ToolsRan {
            commands: commands.iter().map(ToString::to_string).collect(),
        })
    }

    fn copy_web(&self, project_root: &Path) -> TeaResult<TemplateOutcome> {
        let source = self.templates_dir.join(WEB_TEMPLATE_DIR);

        if !self.filesystem.is_dir(&source) {
            warn!(template = %source.display(), "Web template not found, skipping copy");
            return Ok(TemplateOutcome::Degraded(StageWarning::TemplateMissing {
                path: source,
            }));
        }

        let files = self.filesystem.copy_tree(&source, project_root)?;
        info!(files, from = %source.display(), "Copied web template");

        Ok(TemplateOutcome::Copied {
            files,
            from: source,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockToolRunner};
    use crate::domain::DomainError;
    use crate::error::TeaError;

    fn dispatcher(fs: MockFilesystem, tools: MockToolRunner) -> TemplateDispatcher {
        TemplateDispatcher::new(Arc::new(fs), Arc::new(tools), "/templates")
    }

    #[test]
    fn empty_touches_nothing() {
        let fs = MockFilesystem::new();
        let tools = MockToolRunner::new();

        let status = dispatcher(fs, tools).dispatch(Path::new("/p"), ProjectType::Empty);
        assert!(matches!(status, StageStatus::Succeeded { .. }));
    }

    #[test]
    fn python_without_uv_writes_stub() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/main.py") && c == PYTHON_FALLBACK_CONTENT)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut tools = MockToolRunner::new();
        tools.expect_locate().with(eq(UV)).returning(|_| None);
        tools.expect_run().never();

        let status = dispatcher(fs, tools).dispatch(Path::new("/p"), ProjectType::Python);
        assert_eq!(
            status,
            StageStatus::Warning(StageWarning::ToolMissing {
                tool: "uv".into(),
                fallback_file: PathBuf::from("/p/main.py"),
            })
        );
    }

    #[test]
    fn python_runs_init_then_sync() {
        let fs = MockFilesystem::new();
        let mut tools = MockToolRunner::new();
        tools
            .expect_locate()
            .returning(|_| Some(PathBuf::from("/usr/bin/uv")));

        let mut seq = mockall::Sequence::new();
        tools
            .expect_run()
            .withf(|c, dir| c.to_string() == "uv init" && dir == Path::new("/p"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(0));
        tools
            .expect_run()
            .withf(|c, _| c.to_string() == "uv sync")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(0));

        let outcome = dispatcher(fs, tools)
            .apply(Path::new("/p"), ProjectType::Python)
            .unwrap();
        assert_eq!(
            outcome,
            TemplateOutcome::ToolsRan {
                commands: vec!["uv init".into(), "uv sync".into()],
            }
        );
    }

    #[test]
    fn failing_init_skips_sync() {
        let fs = MockFilesystem::new();
        let mut tools = MockToolRunner::new();
        tools
            .expect_locate()
            .returning(|_| Some(PathBuf::from("/usr/bin/uv")));
        tools
            .expect_run()
            .withf(|c, _| c.to_string() == "uv init")
            .times(1)
            .returning(|_, _| Ok(2));
        tools
            .expect_run()
            .withf(|c, _| c.to_string() == "uv sync")
            .never();

        let status = dispatcher(fs, tools).dispatch(Path::new("/p"), ProjectType::Python);
        match status {
            StageStatus::Failed(TeaError::Application(ApplicationError::ExternalToolFailure {
                command,
                reason,
            })) => {
                assert_eq!(command, "uv init");
                assert!(reason.contains('2'));
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn web_copies_template_tree() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(Path::new("/templates/web")))
            .returning(|_| true);
        fs.expect_copy_tree()
            .withf(|from, to| from == Path::new("/templates/web") && to == Path::new("/p"))
            .times(1)
            .returning(|_, _| Ok(3));

        let outcome = dispatcher(fs, MockToolRunner::new())
            .apply(Path::new("/p"), ProjectType::Web)
            .unwrap();
        assert!(matches!(outcome, TemplateOutcome::Copied { files: 3, .. }));
    }

    #[test]
    fn web_without_template_is_a_warning() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_tree().never();

        let status =
            dispatcher(fs, MockToolRunner::new()).dispatch(Path::new("/p"), ProjectType::Web);
        assert!(matches!(
            status,
            StageStatus::Warning(StageWarning::TemplateMissing { .. })
        ));
    }

    #[test]
    fn unknown_type_name_fails_without_mutation() {
        // Any call on either mock would panic.
        let status = dispatcher(MockFilesystem::new(), MockToolRunner::new())
            .dispatch_named(Path::new("/p"), "haskell");
        assert_eq!(
            status,
            StageStatus::Failed(TeaError::Domain(DomainError::UnsupportedProjectType {
                value: "haskell".into(),
            }))
        );
    }
}
