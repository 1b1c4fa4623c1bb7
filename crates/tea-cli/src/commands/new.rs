//! Implementation of the `tea new` command.
//!
//! Responsibility: gather the request (flags first, prompts second), call
//! the core pipeline, and display the report. No business logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use tea_adapters::{LocalFilesystem, SystemToolRunner, default_config, resolve_templates_dir};
use tea_core::{
    application::{FailurePolicy, ProjectInitializer, ports::ConfigStore},
    domain::{Config, DomainValidator, ProjectRequest, ProjectType},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

/// Execute the `tea new` command.
///
/// 1. Load the configuration; a corrupt file stops the run here
/// 2. Fill in name, type, description and README choice
/// 3. Decide the base directory and whether to create a subdirectory
/// 4. Run the pipeline behind a spinner
/// 5. Render the report and next steps
#[instrument(skip_all, fields(path = ?args.path, new = args.new))]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    store: &dyn ConfigStore,
    output: &OutputManager,
) -> CliResult<()> {
    let config = store.load()?;
    let prompter = Prompter::new(args.yes || global.quiet || output.is_json());

    // 2. Gather inputs. A bad --name fails before any prompt runs.
    let raw_name = match args.name.clone() {
        Some(name) => name,
        None => prompter.project_name()?.ok_or(CliError::MissingArgument {
            field: "project name",
            flag: "--name",
        })?,
    };
    let name = DomainValidator::validate_name(&raw_name)?;

    let project_type = match args.project_type.as_deref() {
        Some(raw) => raw.parse::<ProjectType>()?,
        None => prompter.project_type()?.ok_or(CliError::MissingArgument {
            field: "project type",
            flag: "--type",
        })?,
    };

    let description = match args.description.clone() {
        Some(description) => description,
        None => prompter.description()?.unwrap_or_default(),
    };

    let readme = match args.readme_choice() {
        Some(readme) => readme,
        None => prompter.readme()?.unwrap_or(true),
    };

    // 3. Resolve location
    let (base_dir, create_subdirectory) = match &args.path {
        Some(path) => (absolute(path)?, args.new),
        None => (absolute(&projects_directory(&config)?)?, true),
    };

    let request = ProjectRequest::builder()
        .project_name(name)
        .project_type(project_type)
        .description(description)
        .readme(readme)
        .base_dir(base_dir)
        .create_subdirectory(create_subdirectory)
        .build()?;

    let policy = if args.rollback {
        FailurePolicy::Rollback
    } else {
        FailurePolicy::BestEffort
    };

    debug!(
        name = %request.name(),
        project_type = %request.project_type(),
        base_dir = %request.base_dir().display(),
        create_subdirectory,
        readme,
        ?policy,
        "request resolved"
    );

    // 4. Run the pipeline
    let initializer = ProjectInitializer::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemToolRunner::new()),
        resolve_templates_dir(),
    )
    .with_policy(policy);

    output.header(&format!("Creating '{}' ({})", request.name(), request.project_type()))?;
    let spinner = output.spinner(&format!("Initializing {}...", request.name()));
    let report = initializer.initialize(&request);
    spinner.finish_and_clear();

    // 5. Report
    output.report(&report)?;

    if report.has_failures() {
        let failures = report.failures();
        let stages = failures
            .iter()
            .map(|(stage, _)| stage.label())
            .collect::<Vec<_>>()
            .join(", ");
        let suggestions = failures
            .iter()
            .flat_map(|(_, err)| err.suggestions())
            .collect();
        return Err(CliError::PipelineFailed {
            stages,
            suggestions,
        });
    }

    info!(project = %request.name(), "project initialized");

    if let Some(root) = &report.project_root {
        output.success(&format!("Project '{}' is ready", request.name()))?;
        output.next_steps(root)?;
    }

    Ok(())
}

/// Configured `PROJECTS_DIRECTORY`, or the built-in default when the key is
/// absent from the file.
fn projects_directory(config: &Config) -> CliResult<PathBuf> {
    let fallback = default_config();
    config
        .projects_directory()
        .or(fallback.projects_directory())
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::InvalidInput {
            message: "PROJECTS_DIRECTORY is not configured".into(),
        })
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    std::path::absolute(path).with_cli_context(|| format!("resolving {}", path.display()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
