//! Alignment CLI
//!
//! # Usage
//! ```bash
//! alignment demo
//! alignment score --alpha 0.75 --goals 0.8,0.6,0.9 --state 0.7,0.65,0.85 [--states 3] [--json]
//! alignment score --config alignment.toml --goals 1,2 --state 3,4
//! ```

use alignment_core::{AlignmentCalculator, AlignmentConfig};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEMO_GOALS: [f64; 3] = [0.8, 0.6, 0.9];
const DEMO_STATE: [f64; 3] = [0.7, 0.65, 0.85];

/// Alignment CLI - mutual information between goals and system state
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the built-in example vectors with the default calculator
    Demo,

    /// Score a goal vector against a state vector
    Score(ScoreArgs),
}

#[derive(Args)]
struct ScoreArgs {
    /// Comma-separated goal weights
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    goals: Vec<f64>,

    /// Comma-separated state weights
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    state: Vec<f64>,

    /// Number of possible system states (default: number of goals)
    #[arg(long, allow_negative_numbers = true)]
    states: Option<i64>,

    /// TOML file holding the calculator configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sensitivity parameter (overrides the config file)
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Output in JSON format for integrations
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(args: &ScoreArgs) -> anyhow::Result<AlignmentConfig> {
    let mut config = match &args.config {
        Some(path) => AlignmentConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => AlignmentConfig::default(),
    };

    if let Some(alpha) = args.alpha {
        config = config.with_alpha(alpha);
    }

    Ok(config)
}

/// Default calculator over the built-in vectors
fn run_demo() -> anyhow::Result<String> {
    let calc = AlignmentCalculator::default();
    let report = calc.evaluate(&DEMO_GOALS, &DEMO_STATE)?;
    Ok(report.to_string())
}

fn run_score(args: &ScoreArgs) -> anyhow::Result<String> {
    let config = load_config(args)?;
    let calc = AlignmentCalculator::from_config(&config)?;
    tracing::debug!(alpha = calc.alpha(), "Calculator ready");

    let n_states = args.states.unwrap_or(args.goals.len() as i64);
    let report = calc
        .evaluate_with_states(&args.goals, &args.state, n_states)
        .context("Failed to score alignment")?;

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match &cli.command {
        Commands::Demo => run_demo()?,
        Commands::Score(args) => run_score(args)?,
    };
    println!("{output}");

    Ok(())
}
