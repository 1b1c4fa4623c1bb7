//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tea",
    bin_name = "tea",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2615} Project initialization made simple",
    long_about = "tea creates a project directory, records a .teaproject manifest, \
                  applies a type-specific template and writes a README.",
    after_help = "EXAMPLES:\n\
        \x20 tea new -n demo -t empty\n\
        \x20 tea new ./work --new -n api -t python -d \"My API\"\n\
        \x20 tea config set PROJECTS_DIRECTORY ~/code\n\
        \x20 tea completions bash > /usr/share/bash-completion/completions/tea",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new project.
    #[command(
        visible_alias = "n",
        about = "Initialize a new project",
        after_help = "EXAMPLES:\n\
            \x20 tea new -n demo -t empty              # under PROJECTS_DIRECTORY/demo\n\
            \x20 tea new . -n demo -t web              # in the current directory\n\
            \x20 tea new ../work --new -n api -t python  # in ../work/api"
    )]
    New(NewArgs),

    /// List supported project types.
    #[command(visible_alias = "ls", about = "List supported project types")]
    Types,

    /// Show the manifest of an existing project.
    #[command(
        about = "Show project information",
        after_help = "EXAMPLES:\n\
            \x20 tea info\n\
            \x20 tea info ~/Projects/demo"
    )]
    Info(InfoArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tea completions bash > ~/.local/share/bash-completion/completions/tea\n\
            \x20 tea completions zsh  > ~/.zfunc/_tea\n\
            \x20 tea completions fish > ~/.config/fish/completions/tea.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the tea configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tea config get PROJECTS_DIRECTORY\n\
            \x20 tea config set LANGUAGE en\n\
            \x20 tea config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `tea new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Base directory.  Without it the configured `PROJECTS_DIRECTORY` is
    /// used and a subdirectory named after the project is always created.
    #[arg(value_name = "PATH", help = "Base directory for the project")]
    pub path: Option<PathBuf>,

    /// Create `<PATH>/<NAME>` instead of initializing `PATH` itself.
    #[arg(long = "new", help = "Create a subdirectory named after the project")]
    pub new: bool,

    /// Project name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Free-text description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Project type, checked by the core so aliases and suggestions live in
    /// one place.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type (empty, python, web)"
    )]
    pub project_type: Option<String>,

    #[arg(long = "readme", overrides_with = "no_readme", help = "Generate a README")]
    pub readme: bool,

    #[arg(long = "no-readme", overrides_with = "readme", help = "Skip the README")]
    pub no_readme: bool,

    /// Remove a freshly created project directory when a stage fails.
    #[arg(long = "rollback", help = "Undo the project directory on failure")]
    pub rollback: bool,

    /// Never prompt; missing values are errors or defaults.
    #[arg(short = 'y', long = "yes", help = "Do not prompt for missing values")]
    pub yes: bool,
}

impl NewArgs {
    /// `Some` only when `--readme` or `--no-readme` was given.
    pub fn readme_choice(&self) -> Option<bool> {
        match (self.readme, self.no_readme) {
            (_, true) => Some(false),
            (true, false) => Some(true),
            (false, false) => None,
        }
    }
}

// ── info ──────────────────────────────────────────────────────────────────────

/// Arguments for `tea info`.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Project root containing `.teaproject`.
    #[arg(value_name = "PATH", default_value = ".", help = "Project directory")]
    pub path: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tea completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tea config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Key name, e.g. `PROJECTS_DIRECTORY`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Key name.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Overwrite the configuration file with the defaults.
    Reset,
}

// ── tests ─────────────────────────────────────────────────────────────────────
