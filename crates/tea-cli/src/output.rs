//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use tea_core::application::{InitReport, StageStatus};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::error::CliResult;

/// Manages CLI output based on the global flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Undecorated message; suppressed in quiet mode only.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.muted() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.muted() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.muted() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.muted() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout.  Never suppressed: `--quiet` does not apply to
    /// machine-readable output.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Spinner on stderr while a long step runs.  Hidden unless the output
    /// is for a human on a terminal.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// One line per stage, in pipeline order.
    pub fn report(&self, report: &InitReport) -> CliResult<()> {
        if self.is_json() {
            return self.json(&ReportView::from(report));
        }

        for event in &report.events {
            let label = event.stage.label();
            match &event.status {
                StageStatus::Succeeded { detail } => self.success(&format!("{label}: {detail}"))?,
                StageStatus::Warning(warning) => self.warning(&format!("{label}: {warning}"))?,
                StageStatus::Failed(err) => self.error(&format!("{label}: {err}"))?,
                StageStatus::Skipped { reason } => {
                    self.info(&format!("{label}: skipped ({reason})"))?
                }
            }
        }

        if report.rolled_back {
            if let Some(root) = &report.project_root {
                self.warning(&format!("Removed {} after the failure", root.display()))?;
            }
        }
        Ok(())
    }

    /// Suggested follow-up commands after a successful run.
    pub fn next_steps(&self, project_root: &Path) -> io::Result<()> {
        if self.muted() {
            return Ok(());
        }
        self.print("")?;
        self.header("Next steps:")?;
        self.print(&format!("  cd {}", project_root.display()))?;
        self.print("  code .")
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// Decorated lines are dropped in quiet mode and when stdout carries JSON.
    fn muted(&self) -> bool {
        self.quiet || self.is_json()
    }
}

// ── JSON views ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    success: bool,
    project_root: Option<&'a Path>,
    rolled_back: bool,
    stages: Vec<StageView>,
}

#[derive(Debug, Serialize)]
struct StageView {
    stage: &'static str,
    status: &'static str,
    message: String,
}

impl<'a> From<&'a InitReport> for ReportView<'a> {
    fn from(report: &'a InitReport) -> Self {
        Self {
            success: !report.has_failures(),
            project_root: report.project_root.as_deref(),
            rolled_back: report.rolled_back,
            stages: report
                .events
                .iter()
                .map(|event| StageView {
                    stage: event.stage.as_str(),
                    status: event.status.as_str(),
                    message: match &event.status {
                        StageStatus::Succeeded { detail } => detail.clone(),
                        StageStatus::Warning(w) => w.to_string(),
                        StageStatus::Failed(e) => e.to_string(),
                        StageStatus::Skipped { reason } => reason.clone(),
                    },
                })
                .collect(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
