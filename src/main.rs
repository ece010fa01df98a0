mod config;
mod input;
mod logging;
mod model;
mod pipeline;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::config::{ConfigError, PlotConfig, load_config};
use crate::input::ShapeCheck;
use crate::pipeline::PipelineError;
use crate::pipeline::error_curves::run_error_pipeline;
use crate::pipeline::noise_hist::run_noise_pipeline;
use crate::render::ChartFormat;

#[derive(Debug, Parser)]
#[command(
    name = "dempshaf-plots",
    version,
    about = "Render error-curve and noise-histogram charts from dempshaf result files"
)]
struct Cli {
    /// JSON file with plot settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    format: Option<ChartFormat>,
    /// Accept ragged or mismatched rows; shape errors surface while drawing.
    #[arg(long, global = true)]
    lenient: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Plot one error curve per lambda.
    Error {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Plot the quality-choice histogram for one noise variance.
    Noise {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Run both pipelines.
    All,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one pipeline failed.
fn run(cli: &Cli) -> Result<bool, ConfigError> {
    let config = resolve_config(cli)?;

    let mut outcomes: Vec<(&str, Result<PathBuf, PipelineError>)> = Vec::new();
    if matches!(cli.command, Command::Error { .. } | Command::All) {
        outcomes.push(("error", run_error_pipeline(&config)));
    }
    if matches!(cli.command, Command::Noise { .. } | Command::All) {
        outcomes.push(("noise", run_noise_pipeline(&config)));
    }

    let mut all_ok = true;
    for (name, outcome) in outcomes {
        match outcome {
            Ok(path) => info!(pipeline = name, artifact = %path.display(), "chart written"),
            Err(err) => {
                error!(pipeline = name, "{err}");
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn resolve_config(cli: &Cli) -> Result<PlotConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlotConfig::default(),
    };
    if let Some(dir) = &cli.results_dir {
        config.results_dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.lenient {
        config.shape_check = ShapeCheck::Lenient;
    }
    match &cli.command {
        Command::Error { input: Some(path) } => config.error_input = path.clone(),
        Command::Noise { input: Some(path) } => config.noise_input = path.clone(),
        _ => {}
    }
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
