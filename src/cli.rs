use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repo-scorecard",
    version,
    about = "Scores a local repository 0-100 with weighted hygiene checks"
)]
pub struct Cli {
    /// Repository root to evaluate
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output format (default json, overridable via scorecard.toml)
    #[arg(long, value_enum)]
    pub out: Option<OutputKind>,

    /// Fail with exit 1 when the score is below N
    #[arg(long, value_name = "N")]
    pub min_score: Option<u32>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostic logging (the report is still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputKind {
    Json,
    Text,
}
