use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "risk-lab",
    version,
    about = "Pre-construction color risk scoring for interior design projects"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Scoring config layered over the built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the current selection and print the grade
    Evaluate(EvaluateCommand),
    /// Render the full risk report
    Report(ReportCommand),
    /// List every attribute with its allowed options
    Options,
    /// Validate the layered scoring config
    Check,
    /// Write a project file pre-filled with default selections
    Init(InitCommand),
}

#[derive(Args)]
pub struct SelectionArgs {
    /// Project file with [project] details and [inputs] selections
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Override one selection, e.g. --set CRI=Low (repeatable)
    #[arg(long = "set", value_name = "ATTRIBUTE=VALUE")]
    pub set: Vec<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub targets: Option<String>,
}

#[derive(Args)]
pub struct EvaluateCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,
    /// Exit 1 for grade B and 2 for grade C
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub force: bool,
    /// Issue date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct InitCommand {
    #[arg(default_value = "risk-lab.toml")]
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Html,
}
