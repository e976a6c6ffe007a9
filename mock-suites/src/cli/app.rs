use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mock-suites",
    version,
    about = "Mock Suites - Synthetic test-execution data for dashboard development",
    long_about = "Mock Suites generates fake test-suite runs with nested test cases, response payloads and validation rows, for populating a test dashboard while it is being built."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a corpus of mock suites
    #[command(about = "Generate mock test suites and print or write them")]
    Generate(GenerateArgs),

    /// Summarize a generated corpus
    #[command(about = "Print aggregate statistics for a generated corpus")]
    Summary(SummaryArgs),

    /// Check a dashboard document
    #[command(about = "Check a dashboard JSON document against the generator's invariants")]
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Seed for reproducible output
    #[arg(long, help = "Seed the random source for reproducible output")]
    pub seed: Option<u64>,

    /// Output file path
    #[arg(short, long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,

    /// Output format (json, csv, markdown)
    #[arg(short, long, help = "Output format: json, csv or markdown")]
    pub format: Option<String>,

    /// Emit compact JSON
    #[arg(long, help = "Emit JSON on a single line")]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Seed for reproducible output
    #[arg(long, help = "Seed the random source for reproducible output")]
    pub seed: Option<u64>,

    /// Print statistics as JSON
    #[arg(long, help = "Print the statistics as JSON")]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to a `{ "suites": [...] }` document
    #[arg(help = "Path to the dashboard JSON document to check")]
    pub path: PathBuf,
}
