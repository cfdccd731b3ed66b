use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use speedcheck_confidence::config::{ConfigError, ScoringConfig};
use speedcheck_confidence::input::{InputError, MeasurementBundle};
use speedcheck_confidence::logging::init_tracing;
use speedcheck_confidence::pipeline::{ScoreError, ScoreInputs, run_scoring};
use speedcheck_confidence::report::{ReportFormat, render};

#[derive(Parser, Debug)]
#[command(
    name = "speedcheck-confidence",
    version,
    about = "Score how trustworthy a set of speed-test and latency measurements are"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a measurement bundle
    Score {
        /// Measurement bundle (JSON)
        #[arg(long, short)]
        input: PathBuf,
        /// Thresholds and weights (TOML, or JSON by extension)
        #[arg(long, short, env = "SPEEDCHECK_CONFIG")]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the default thresholds and weights
    Defaults {
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Score,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Score => ReportFormat::Score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Score {
            input,
            config,
            format,
        } => {
            let config = match config {
                Some(path) => {
                    let loaded = ScoringConfig::load(&path)?;
                    info!("config loaded from {}", path.display());
                    loaded
                }
                None => ScoringConfig::default(),
            };
            let bundle = MeasurementBundle::load(&input)?;
            info!(
                primary = bundle.primary.len(),
                secondary = bundle.secondary.len(),
                latency = bundle.latency.len(),
                "measurements loaded from {}",
                input.display()
            );

            let breakdown = run_scoring(&score_inputs(&bundle, &config))?;
            info!(score = breakdown.score.value(), raw = breakdown.raw, "scoring complete");
            print!("{}", render(&breakdown, format.into())?);
        }
        Commands::Defaults { format } => {
            let config = ScoringConfig::default();
            let rendered = match format {
                ConfigFormat::Toml => config.to_toml_string()?,
                ConfigFormat::Json => config.to_json_string()?,
            };
            println!("{}", rendered.trim_end());
        }
    }
    Ok(())
}

fn score_inputs<'a>(bundle: &'a MeasurementBundle, config: &'a ScoringConfig) -> ScoreInputs<'a> {
    ScoreInputs {
        primary: &bundle.primary,
        secondary: &bundle.secondary,
        latency: &bundle.latency,
        wifi_in_use: bundle.wifi_in_use,
        approval_required: bundle.approval_required,
        thresholds: &config.statistics,
        weights: &config.confidence,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
