//! # Command Line
//!
//! Arguments for running the suite in CI: the target base URL, the summary
//! format, and an optional JSON report file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Parser)]
#[command(name = "matchman", about = "Smoke-test the dating backend API", version)]
pub struct Cli {
    /// Base URL of the backend under test.
    #[arg(long, env = "MATCHMAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Rendering of the final summary.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the JSON run report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
