//! Chaff: fake-test detector CLI

use anyhow::Result;
use chaff::config::load_config;
use chaff::reporter::{ConsoleReporter, JsonReporter};
use chaff::Confidence;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Chaff: flags test files that look like they verify nothing
#[derive(Parser, Debug)]
#[command(name = "chaff")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directories to scan (comma-separated). Default: src,api
    #[arg(long, value_delimiter = ',', value_name = "DIRS")]
    dirs: Option<Vec<PathBuf>>,

    /// Minimum confidence level to report
    #[arg(long, value_enum, value_name = "LEVEL")]
    min_confidence: Option<Confidence>,

    /// Output the raw result sequence as JSON
    #[arg(long, short)]
    json: bool,

    /// Path to config file (default: search .chaffrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = load_config(&work_dir, args.config.as_deref())?;

    // CLI flags take precedence over the config file.
    if let Some(dirs) = args.dirs {
        config.directories = dirs;
    }
    if let Some(level) = args.min_confidence {
        config.min_confidence = level;
    }

    let results = chaff::scan(&config);

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&results));
    } else {
        let reporter = if args.no_color {
            colored::control::set_override(false);
            ConsoleReporter::new().without_colors()
        } else {
            ConsoleReporter::new()
        };
        reporter.report(&results);
    }

    // Exit contract: findings present means failure, for CI gating.
    if results.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
