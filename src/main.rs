mod analyze;
mod cli;
mod config;
mod error;
mod project;
mod report;
mod session;
mod telemetry;
mod types;

use crate::error::{Result, RiskLabError};
use crate::project::ProjectFile;
use crate::session::Session;
use crate::types::config::ScoringConfig;
use crate::types::scoring::Grade;
use clap::Parser;
use std::path::Path;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;
    info!(version = env!("CARGO_PKG_VERSION"), "risk-lab starting");

    let scoring = config::load_config(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let session = build_session(&scoring, &cmd.selection)?;
            let analysis = session.analysis();
            let rendered = match cmd.format {
                cli::SummaryFormat::Text => report::summary::to_text(analysis),
                cli::SummaryFormat::Json => report::summary::to_json(analysis)?,
            };
            println!("{}", rendered.trim_end());

            if !cmd.strict {
                return Ok(exit_code::SUCCESS);
            }
            Ok(match analysis.grade {
                Grade::A => exit_code::SUCCESS,
                Grade::B => exit_code::WARNINGS,
                Grade::C => exit_code::BLOCKING,
            })
        }
        cli::Commands::Report(cmd) => {
            let session = build_session(&scoring, &cmd.selection)?;
            let issued_on = cmd
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let risk_report = report::compose(&session, issued_on);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Html => report::OutputFormat::Html,
            };
            let rendered = report::render(&risk_report, output_format)?;

            match &cmd.output {
                Some(path) => {
                    write_output(path, &rendered, cmd.force)?;
                    println!("report file: {}", path.display());
                }
                None => println!("{}", rendered.trim_end()),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Options => {
            for attribute in &scoring.catalog {
                let placement = match scoring.weights.layer_of(&attribute.name) {
                    Some((layer, weight)) => format!("{}, weight {:.2}", layer.as_str(), weight),
                    None => "bonus only".to_string(),
                };
                println!("{} ({})", attribute.name, placement);
                for option in &attribute.options {
                    let score = scoring
                        .scores
                        .get(&attribute.name, &option.value)
                        .unwrap_or_default();
                    println!(
                        "  {:<12} score {:>5.1}  {}",
                        option.value,
                        score,
                        option.display_label()
                    );
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check => {
            println!(
                "config ok: {} attributes, {} rules, A <= {}, B <= {}",
                scoring.catalog.len(),
                scoring.rules.len(),
                scoring.grading.a_max,
                scoring.grading.b_max
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            project::write_template(&cmd.path, &scoring, cmd.force)?;
            println!("project file: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn build_session<'a>(
    scoring: &'a ScoringConfig,
    args: &cli::SelectionArgs,
) -> Result<Session<'a>> {
    let file = match &args.project {
        Some(path) => project::load_project(path)?,
        None if Path::new(project::DEFAULT_PROJECT_FILE).exists() => {
            info!(
                path = project::DEFAULT_PROJECT_FILE,
                "using project file from working directory"
            );
            project::load_project(Path::new(project::DEFAULT_PROJECT_FILE))?
        }
        None => ProjectFile::default(),
    };

    let mut session = Session::from_project(scoring, file)?;
    if let Some(title) = &args.title {
        session.project_mut().title = title.clone();
    }
    if let Some(targets) = &args.targets {
        session.project_mut().targets = targets.clone();
    }

    for raw in &args.set {
        let (attribute, value) = project::parse_assignment(raw)?;
        session.select(&attribute, &value)?;
    }
    Ok(session)
}

fn write_output(path: &Path, rendered: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(RiskLabError::OutputExists(path.display().to_string()));
    }
    std::fs::write(path, rendered)?;
    Ok(())
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
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
