//! Implementation of the `tea types` command.

use serde::Serialize;

use tea_core::domain::ProjectType;

use crate::{error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct TypeView {
    name: &'static str,
    description: &'static str,
}

pub fn execute(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let views: Vec<TypeView> = ProjectType::ALL
            .iter()
            .map(|t| TypeView {
                name: t.as_str(),
                description: t.description(),
            })
            .collect();
        return output.json(&views);
    }

    output.header("Project types:")?;
    for project_type in ProjectType::ALL {
        output.print(&format!(
            "  {:<8} {}",
            project_type.as_str(),
            project_type.description()
        ))?;
    }
    Ok(())
}
