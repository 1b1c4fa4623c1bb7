//! `tea config`: read and write configuration values.
//!
//! `path` and `reset` never parse the existing file, so both still work when
//! it is corrupt.

use std::collections::BTreeMap;

use tracing::instrument;

use tea_adapters::default_config;
use tea_core::{application::ports::ConfigStore, domain::ConfigKey};

use crate::{cli::ConfigCommands, error::CliResult, output::OutputManager};

/// Dispatch to the correct config subcommand.
#[instrument(skip_all, fields(location = %store.location()))]
pub fn execute(
    cmd: ConfigCommands,
    store: &dyn ConfigStore,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let key: ConfigKey = key.parse()?;
            let value = store.get(key, "")?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key.as_str(), value)]))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            store.set(key, &value)?;
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            let config = store.load()?;
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header(&format!("Configuration ({})", store.location()))?;
                for (key, value) in config.entries() {
                    output.print(&format!("  {key} = {value}"))?;
                }
            }
        }

        ConfigCommands::Path => {
            if output.is_json() {
                output.json(&store.location())?;
            } else {
                output.print(&store.location())?;
            }
        }

        ConfigCommands::Reset => {
            store.save(&default_config())?;
            output.success(&format!("Configuration reset at {}", store.location()))?;
        }
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
