//! Diagnostics for `tea` runs, written to stderr.
//!
//! Stdout belongs to the command result (report, listing, JSON document), so
//! every event goes to stderr. `-v` shows the pipeline's stage progress,
//! `-vv` the adapter calls behind each stage (paths, `uv` invocations), and
//! `-vvv` adds a close event with timing for every instrumented stage.
//! `-q` keeps errors only. A valid, non-empty `RUST_LOG` replaces the
//! computed filter.
//!
//! With `--output-format json` the events are JSON lines too, so a script
//! that parses stdout can parse stderr the same way.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, global::OutputFormat};

/// Crates whose events `tea` shows; dependencies stay silent.
const TEA_CRATES: [&str; 3] = ["tea", "tea_core", "tea_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(filter_directives(level)));

    let span_events = if level >= LevelFilter::TRACE {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if args.output_format == OutputFormat::Json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(level >= LevelFilter::DEBUG)
                    .with_span_events(span_events)
                    .with_ansi(!args.no_color && std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.context("a tracing subscriber is already installed")
}

fn filter_directives(level: LevelFilter) -> String {
    TEA_CRATES
        .iter()
        .map(|krate| format!("{krate}={}", level.to_string().to_lowercase()))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
