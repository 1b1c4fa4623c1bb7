//! Implementation of the `tea info` command.

use std::sync::Arc;

use tracing::instrument;

use tea_adapters::LocalFilesystem;
use tea_core::application::ManifestWriter;

use crate::{cli::InfoArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: InfoArgs, output: &OutputManager) -> CliResult<()> {
    let reader = ManifestWriter::new(Arc::new(LocalFilesystem::new()));
    let manifest = reader.read(&args.path)?;

    if output.is_json() {
        return output.json(&manifest);
    }

    output.header(&format!("Project '{}'", manifest.name))?;
    output.print(&format!("  Type:        {}", manifest.project_type))?;
    output.print(&format!("  Description: {}", manifest.description))?;
    output.print(&format!(
        "  README:      {}",
        if manifest.readme { "yes" } else { "no" }
    ))?;
    Ok(())
}
