mod checks;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod score;
mod types;

use crate::error::ScorecardError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

fn run() -> Result<i32, ScorecardError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if !cli.path.exists() {
        return Err(ScorecardError::PathNotFound(cli.path.display().to_string()));
    }
    if !cli.path.is_dir() {
        return Err(ScorecardError::NotADirectory(
            cli.path.display().to_string(),
        ));
    }
    let root = cli.path.canonicalize()?;
    if std::fs::read_dir(&root).is_err() {
        return Err(ScorecardError::RootUnreadable(root.display().to_string()));
    }

    let loaded = config::load_config(&root)?;

    let format = match cli.out {
        Some(cli::OutputKind::Json) => report::OutputFormat::Json,
        Some(cli::OutputKind::Text) => report::OutputFormat::Text,
        None => match loaded.as_ref().and_then(|config| config.output_format()) {
            Some(types::config::ConfigFormat::Text) => report::OutputFormat::Text,
            _ => report::OutputFormat::Json,
        },
    };
    let min_score = cli
        .min_score
        .or_else(|| loaded.as_ref().and_then(|config| config.min_score()));

    tracing::debug!(root = %root.display(), "evaluating checks");
    let results = checks::run_all(&root);
    let report = score::build_report(&root, results);
    let rendered = report::render(&report, format)?;
    println!("{rendered}");

    // The gate runs strictly after rendering; the report is never suppressed.
    if let Some(threshold) = min_score {
        if report.score < threshold {
            eprintln!("Score {} below minimum {}.", report.score, threshold);
            return Ok(exit_code::FAILURE);
        }
    }

    Ok(exit_code::SUCCESS)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::FAILURE);
        }
    }
}
