//! Structured stage outcomes returned to the presentation layer.
//!
//! The pipeline never prints. Each stage produces exactly one [`StageEvent`]
//! and the caller decides how to render the resulting [`InitReport`].

use std::fmt;
use std::path::PathBuf;

use crate::error::TeaError;

/// One step of the initialization pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ResolvePath,
    WriteManifest,
    ApplyTemplate,
    GenerateReadme,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Self::ResolvePath,
        Self::WriteManifest,
        Self::ApplyTemplate,
        Self::GenerateReadme,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResolvePath => "resolve-path",
            Self::WriteManifest => "write-manifest",
            Self::ApplyTemplate => "apply-template",
            Self::GenerateReadme => "generate-readme",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ResolvePath => "Project directory",
            Self::WriteManifest => "Manifest",
            Self::ApplyTemplate => "Template",
            Self::GenerateReadme => "README",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal degradation. The stage still produced something usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageWarning {
    /// A required external tool was not found; a fallback file was written.
    ToolMissing { tool: String, fallback_file: PathBuf },
    /// The template source directory does not exist; nothing was copied.
    TemplateMissing { path: PathBuf },
}

impl fmt::Display for StageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolMissing {
                tool,
                fallback_file,
            } => write!(
                f,
                "`{}` not found, created {} instead",
                tool,
                fallback_file.display()
            ),
            Self::TemplateMissing { path } => {
                write!(f, "template directory {} not found", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    Succeeded { detail: String },
    Warning(StageWarning),
    Failed(TeaError),
    Skipped { reason: String },
}

impl StageStatus {
    pub fn succeeded(detail: impl Into<String>) -> Self {
        Self::Succeeded {
            detail: detail.into(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded { .. } => "succeeded",
            Self::Warning(_) => "warning",
            Self::Failed(_) => "failed",
            Self::Skipped { .. } => "skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEvent {
    pub stage: Stage,
    pub status: StageStatus,
}

impl StageEvent {
    pub const fn new(stage: Stage, status: StageStatus) -> Self {
        Self { stage, status }
    }
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// `None` only when path resolution failed.
    pub project_root: Option<PathBuf>,
    pub events: Vec<StageEvent>,
    /// Set when the rollback policy removed the directory.
    pub rolled_back: bool,
}

impl InitReport {
    pub fn has_failures(&self) -> bool {
        self.events.iter().any(|e| e.status.is_failure())
    }

    pub fn failures(&self) -> Vec<(Stage, &TeaError)> {
        self.events
            .iter()
            .filter_map(|e| match &e.status {
                StageStatus::Failed(err) => Some((e.stage, err)),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<(Stage, &StageWarning)> {
        self.events
            .iter()
            .filter_map(|e| match &e.status {
                StageStatus::Warning(w) => Some((e.stage, w)),
                _ => None,
            })
            .collect()
    }

    pub fn event(&self, stage: Stage) -> Option<&StageEvent> {
        self.events.iter().find(|e| e.stage == stage)
    }

    pub(crate) fn record(&mut self, stage: Stage, status: StageStatus) {
        self.events.push(StageEvent::new(stage, status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;

    #[test]
    fn report_collects_failures_and_warnings() {
        let mut report = InitReport::default();
        report.record(Stage::ResolvePath, StageStatus::succeeded("/tmp/x"));
        report.record(
            Stage::ApplyTemplate,
            StageStatus::Warning(StageWarning::TemplateMissing {
                path: "/t/web".into(),
            }),
        );
        report.record(
            Stage::GenerateReadme,
            StageStatus::Failed(
                ApplicationError::IoFailure {
                    path: "/tmp/x/README.md".into(),
                    reason: "denied".into(),
                }
                .into(),
            ),
        );

        assert!(report.has_failures());
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].0, Stage::GenerateReadme);
        assert_eq!(report.warnings().len(), 1);
        assert!(report.event(Stage::WriteManifest).is_none());
    }

    #[test]
    fn warning_display_names_the_tool() {
        let warning = StageWarning::ToolMissing {
            tool: "uv".into(),
            fallback_file: "/p/main.py".into(),
        };
        assert_eq!(warning.to_string(), "`uv` not found, created /p/main.py instead");
    }
}
