//! Finding donors: census income classification from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use donors::evaluation::ReportFormat;
use donors::tasks::TaskOutcome;
use donors::ui::cli::drivers::InquireDriver;
use donors::ui::cli::wizard::prompt_choice;
use donors::ui::types::build::build_task;
use donors::ui::types::choices::{DatasetParameters, ReportParams, TaskChoice, UIChoice};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "donors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Predict whether census respondents earn more than $50,000", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full report with default learners
    Report {
        /// Census CSV file
        #[arg(short, long, default_value = "census.csv")]
        data: PathBuf,

        /// Share of rows held out for testing
        #[arg(long, default_value = "0.2")]
        test_fraction: f64,

        /// Seed of the train/test shuffle
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Cross-validation folds for tuning
        #[arg(long, default_value = "5")]
        folds: usize,

        /// Features kept for the reduced model
        #[arg(long, default_value = "5")]
        top_k: usize,

        /// Write the learner comparison table here
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Export format (csv, tsv, json)
        #[arg(long, default_value = "csv")]
        format: ReportFormat,
    },

    /// Run a task described by a JSON config
    Run {
        /// Task config file
        #[arg(short, long)]
        config: PathBuf,

        /// Write the learner comparison table here
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Export format (csv, tsv, json)
        #[arg(long, default_value = "csv")]
        format: ReportFormat,
    },

    /// Build a task config interactively and run it
    Wizard {
        /// Save the config instead of running it
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print the JSON schema of task configs
    Schema,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data,
            test_fraction,
            seed,
            folds,
            top_k,
            export,
            format,
        } => {
            let choice = TaskChoice::Report(ReportParams {
                data: DatasetParameters {
                    path: data.to_string_lossy().into_owned(),
                    test_fraction,
                    seed,
                },
                folds,
                top_k,
                ..ReportParams::default()
            });
            run(choice, export.as_deref(), format)
        }
        Commands::Run {
            config,
            export,
            format,
        } => {
            let text = fs::read_to_string(&config)
                .with_context(|| format!("reading {}", config.display()))?;
            let choice: TaskChoice = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", config.display()))?;
            run(choice, export.as_deref(), format)
        }
        Commands::Wizard { save } => {
            let choice = prompt_choice::<TaskChoice, _>(&InquireDriver)?;
            match save {
                Some(path) => {
                    fs::write(&path, serde_json::to_string_pretty(&choice)?)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Saved config to {}", path.display());
                    Ok(())
                }
                None => run(choice, None, ReportFormat::default()),
            }
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
            Ok(())
        }
    }
}

fn run(choice: TaskChoice, export: Option<&Path>, format: ReportFormat) -> Result<()> {
    let mut task = build_task(choice)?;
    let outcome = task.run()?;
    println!("{outcome}");
    if let Some(path) = export {
        export_comparison(&outcome, path, format)?;
    }
    Ok(())
}

fn export_comparison(outcome: &TaskOutcome, path: &Path, format: ReportFormat) -> Result<()> {
    let table = outcome
        .comparison()
        .context("this task produces no comparison table to export")?;
    table
        .export(path, format)
        .with_context(|| format!("exporting to {}", path.display()))?;
    tracing::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
