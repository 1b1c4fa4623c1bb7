//! Interactive prompts for values missing from the command line.
//!
//! Prompts only run with the `interactive` feature and when stdin is a
//! terminal; otherwise every prompt returns `None` and callers fall back to
//! errors or defaults.

use tea_core::domain::ProjectType;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    enabled: bool,
}

impl Prompter {
    /// `disabled` comes from `-y` / `--quiet` / JSON output.
    pub fn new(disabled: bool) -> Self {
        Self {
            enabled: !disabled && terminal_attached(),
        }
    }

    pub fn project_name(&self) -> CliResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::project_name().map(Some)
    }

    pub fn description(&self) -> CliResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::description().map(Some)
    }

    pub fn project_type(&self) -> CliResult<Option<ProjectType>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::project_type().map(Some)
    }

    pub fn readme(&self) -> CliResult<Option<bool>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::readme().map(Some)
    }
}

#[cfg(feature = "interactive")]
fn terminal_attached() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

#[cfg(not(feature = "interactive"))]
fn terminal_attached() -> bool {
    false
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, Input, Select};

    use tea_core::domain::{ProjectName, ProjectType};

    use crate::error::CliResult;

    pub fn project_name() -> CliResult<String> {
        let name = Input::<String>::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| -> Result<(), String> {
                ProjectName::parse(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(name)
    }

    pub fn description() -> CliResult<String> {
        let description = Input::<String>::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;
        Ok(description)
    }

    pub fn project_type() -> CliResult<ProjectType> {
        let items: Vec<String> = ProjectType::ALL
            .iter()
            .map(|t| format!("{:<8} {}", t.as_str(), t.description()))
            .collect();

        let selection = Select::new()
            .with_prompt("Project type")
            .items(&items)
            .default(0)
            .interact()?;

        Ok(ProjectType::ALL[selection])
    }

    pub fn readme() -> CliResult<bool> {
        let confirmed = Confirm::new()
            .with_prompt("Generate a README?")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use tea_core::domain::ProjectType;

    use crate::error::{CliError, CliResult};

    fn unavailable<T>() -> CliResult<T> {
        Err(CliError::InvalidInput {
            message: "interactive prompts are not available in this build".into(),
        })
    }

    pub fn project_name() -> CliResult<String> {
        unavailable()
    }

    pub fn description() -> CliResult<String> {
        unavailable()
    }

    pub fn project_type() -> CliResult<ProjectType> {
        unavailable()
    }

    pub fn readme() -> CliResult<bool> {
        unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_prompter_returns_nothing() {
        let prompter = Prompter::new(true);
        assert!(!prompter.enabled);
        assert!(prompter.project_name().unwrap().is_none());
        assert!(prompter.description().unwrap().is_none());
        assert!(prompter.project_type().unwrap().is_none());
        assert!(prompter.readme().unwrap().is_none());
    }
}
