//! Flags accepted by every `tea` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show pipeline progress on stderr (-v stages, -vv adapter calls, -vvv timings)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only and never prompt
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read and write settings in FILE instead of the platform config directory
    #[arg(short, long, global = true, env = "TEA_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How reports and listings are printed on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Colours and a spinner while stages run
    Human,
    /// Undecorated lines, safe to grep
    Plain,
    /// One JSON document per command, nothing else on stdout
    Json,
}
