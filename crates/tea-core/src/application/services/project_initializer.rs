//! Project Initializer - main application orchestrator.
//!
//! Runs the pipeline stages in order:
//! 1. Resolve (and create) the project directory
//! 2. Write the `.teaproject` manifest
//! 3. Apply the type-specific template strategy
//! 4. Generate `README.md` when requested
//!
//! Every stage yields exactly one [`StageEvent`](crate::application::StageEvent);
//! nothing is printed.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        events::{InitReport, Stage, StageStatus},
        ports::{Filesystem, ToolRunner},
        services::{
            ManifestWriter, PathResolver, ReadmeGenerator, ResolvedPath, TemplateDispatcher,
        },
    },
    domain::{ProjectManifest, ProjectRequest},
};

/// What happens after a stage fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and keep going with the next stage.
    #[default]
    BestEffort,
    /// Stop at the first failure and remove the project directory if this run
    /// created it.
    Rollback,
}

pub struct ProjectInitializer {
    filesystem: Arc<dyn Filesystem>,
    resolver: PathResolver,
    manifest_writer: ManifestWriter,
    dispatcher: TemplateDispatcher,
    readme_generator: ReadmeGenerator,
    policy: FailurePolicy,
}

impl ProjectInitializer {
    /// Create an initializer over the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use tea_core::application::{FailurePolicy, ProjectInitializer, ports::*};
    ///
    /// # fn build(fs: Arc<dyn Filesystem>, tools: Arc<dyn ToolRunner>) {
    /// let initializer = ProjectInitializer::new(fs, tools, "./templates")
    ///     .with_policy(FailurePolicy::Rollback);
    /// # }
    /// ```
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        tools: Arc<dyn ToolRunner>,
        templates_dir: impl Into<std::path::PathBuf>,
    ) -> Self {
        Self {
            resolver: PathResolver::new(Arc::clone(&filesystem)),
            manifest_writer: ManifestWriter::new(Arc::clone(&filesystem)),
            dispatcher: TemplateDispatcher::new(Arc::clone(&filesystem), tools, templates_dir),
            readme_generator: ReadmeGenerator::new(Arc::clone(&filesystem)),
            filesystem,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn templates_dir(&self) -> &Path {
        self.dispatcher.templates_dir()
    }

    /// Run the whole pipeline for `request`.
    ///
    /// Never returns an error: failures are recorded as stage events and the
    /// caller inspects [`InitReport::has_failures`].
    #[instrument(
        skip_all,
        fields(
            project = %request.name(),
            project_type = %request.project_type(),
            base = %request.base_dir().display(),
            policy = ?self.policy
        )
    )]
    pub fn initialize(&self, request: &ProjectRequest) -> InitReport {
        info!("Initializing project");
        let mut report = InitReport::default();

        let resolved = match self.resolver.resolve(
            request.base_dir(),
            request.name(),
            request.create_subdirectory(),
        ) {
            Ok(resolved) => {
                report.record(
                    Stage::ResolvePath,
                    StageStatus::succeeded(resolved.path.display().to_string()),
                );
                resolved
            }
            Err(e) => {
                error!(error = %e, "Could not resolve project directory");
                report.record(Stage::ResolvePath, StageStatus::Failed(e));
                skip_after(&mut report, Stage::ResolvePath, "no project directory");
                return report;
            }
        };
        report.project_root = Some(resolved.path.clone());
        let root = resolved.path.as_path();

        let manifest = ProjectManifest::from_request(request);
        let status = match self.manifest_writer.write(root, &manifest) {
            Ok(path) => StageStatus::succeeded(path.display().to_string()),
            Err(e) => StageStatus::Failed(e),
        };
        if self.advance(&mut report, Stage::WriteManifest, status, &resolved) {
            return report;
        }

        let status = self.dispatcher.dispatch(root, request.project_type());
        if self.advance(&mut report, Stage::ApplyTemplate, status, &resolved) {
            return report;
        }

        let status = if request.readme() {
            match self.readme_generator.generate(
                root,
                request.name().as_str(),
                request.description(),
            ) {
                Ok(path) => StageStatus::succeeded(path.display().to_string()),
                Err(e) => StageStatus::Failed(e),
            }
        } else {
            StageStatus::skipped("README not requested")
        };
        self.advance(&mut report, Stage::GenerateReadme, status, &resolved);

        if report.has_failures() {
            warn!(failures = report.failures().len(), "Project initialized with failures");
        } else {
            info!(root = %root.display(), "Project initialized");
        }
        report
    }

    /// Record `status` for `stage`. Returns `true` when the pipeline must stop.
    fn advance(
        &self,
        report: &mut InitReport,
        stage: Stage,
        status: StageStatus,
        resolved: &ResolvedPath,
    ) -> bool {
        if let StageStatus::Failed(e) = &status {
            error!(stage = %stage, error = %e, "Stage failed");
        }
        let failed = status.is_failure();
        report.record(stage, status);

        if !failed || self.policy == FailurePolicy::BestEffort {
            return false;
        }

        skip_after(report, stage, "an earlier stage failed");
        report.rolled_back = self.rollback(resolved);
        true
    }

    /// Best-effort removal of a directory this run created.
    fn rollback(&self, resolved: &ResolvedPath) -> bool {
        if !resolved.created {
            info!(
                path = %resolved.path.display(),
                "Directory existed before initialization, leaving it in place"
            );
            return false;
        }

        match self.filesystem.remove_dir_all(&resolved.path) {
            Ok(()) => {
                info!(path = %resolved.path.display(), "Rollback successful");
                true
            }
            Err(e) => {
                let e = ApplicationError::RollbackFailed {
                    path: resolved.path.clone(),
                    reason: e.to_string(),
                };
                warn!(error = %e, "Rollback failed");
                false
            }
        }
    }
}

fn skip_after(report: &mut InitReport, failed: Stage, reason: &str) {
    for stage in Stage::ALL.into_iter().skip_while(|s| *s != failed).skip(1) {
        report.record(stage, StageStatus::skipped(reason));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockToolRunner};
    use crate::domain::ProjectType;

    fn request(readme: bool) -> ProjectRequest {
        ProjectRequest::builder()
            .name("demo")
            .unwrap()
            .project_type(ProjectType::Empty)
            .readme(readme)
            .base_dir("/base")
            .create_subdirectory(true)
            .build()
            .unwrap()
    }

    #[test]
    fn resolution_failure_skips_every_other_stage() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);

        let report = ProjectInitializer::new(Arc::new(fs), Arc::new(MockToolRunner::new()), "/t")
            .initialize(&request(true));

        assert!(report.project_root.is_none());
        assert_eq!(report.events.len(), 4);
        assert!(report.events[0].status.is_failure());
        assert!(
            report.events[1..]
                .iter()
                .all(|e| matches!(e.status, StageStatus::Skipped { .. }))
        );
    }

    #[test]
    fn rollback_removes_created_directory_after_manifest_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file_atomic().returning(|p, _| {
            Err(ApplicationError::IoFailure {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/base/demo"))
            .times(1)
            .returning(|_| Ok(()));

        let report = ProjectInitializer::new(Arc::new(fs), Arc::new(MockToolRunner::new()), "/t")
            .with_policy(FailurePolicy::Rollback)
            .initialize(&request(true));

        assert!(report.rolled_back);
        assert_eq!(report.project_root, Some(PathBuf::from("/base/demo")));
        assert_eq!(report.failures()[0].0, Stage::WriteManifest);
        assert!(matches!(
            report.event(Stage::ApplyTemplate).unwrap().status,
            StageStatus::Skipped { .. }
        ));
        assert!(matches!(
            report.event(Stage::GenerateReadme).unwrap().status,
            StageStatus::Skipped { .. }
        ));
    }

    #[test]
    fn disabled_readme_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file_atomic().returning(|_, _| Ok(()));
        fs.expect_write_file().never();

        let report = ProjectInitializer::new(Arc::new(fs), Arc::new(MockToolRunner::new()), "/t")
            .initialize(&request(false));

        assert!(!report.has_failures());
        assert!(matches!(
            report.event(Stage::GenerateReadme).unwrap().status,
            StageStatus::Skipped { .. }
        ));
    }
}
