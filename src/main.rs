use std::fs;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchman::cli::{Cli, OutputFormat};
use matchman::SmokeSuite;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    println!("Test started at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let mut suite = match SmokeSuite::new(&cli.base_url) {
        Ok(suite) => suite,
        Err(err) => {
            eprintln!("Failed to initialize HTTP session: {err}");
            return ExitCode::FAILURE;
        }
    };

    let all_passed = suite.run_all();
    let report = suite.report();

    let json_document = if cli.format == OutputFormat::Json || cli.report.is_some() {
        match serde_json::to_string_pretty(&report) {
            Ok(document) => Some(document),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    match cli.format {
        OutputFormat::Text => {
            // Aborted runs end on the stop message; the summary block only
            // follows a full run.
            if suite.completed() {
                println!();
                print!("{}", report.render_text());
            }
        }
        OutputFormat::Json => {
            if let Some(document) = &json_document {
                println!("{document}");
            }
        }
    }

    if let Some(path) = &cli.report {
        if let Some(document) = &json_document {
            if let Err(err) = fs::write(path, document) {
                eprintln!("Failed to write report file `{}`: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Test completed at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
