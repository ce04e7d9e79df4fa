//! NextStat decay-chain CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod run;

use run::Overrides;

#[derive(Parser)]
#[command(name = "nsdecay")]
#[command(about = "NextStat - decay-chain analysis of generator-level events")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select target particles, walk their decay chains and fill histograms
    Analyze {
        /// Input events (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Analysis config (YAML or JSON). Defaults to the Higgs analysis.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input collection tag (overrides config)
        #[arg(long)]
        collection: Option<String>,

        /// Target PDG ID (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i32>,

        /// Maximum traversal depth, root = 0 (overrides config)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the decay chain of every selected particle
    Chain {
        /// Input events (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Analysis config (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input collection tag (overrides config)
        #[arg(long)]
        collection: Option<String>,

        /// Target PDG ID (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i32>,

        /// Maximum traversal depth, root = 0 (overrides config)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print the default analysis config (YAML)
    ConfigDefaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze { input, config, collection, target, max_depth, output } => {
            let overrides = Overrides { collection, target, max_depth };
            cmd_analyze(&input, config.as_ref(), &overrides, output.as_ref())
        }
        Commands::Chain { input, config, collection, target, max_depth } => {
            let overrides = Overrides { collection, target, max_depth };
            cmd_chain(&input, config.as_ref(), &overrides)
        }
        Commands::ConfigDefaults => cmd_config_defaults(),
    }
}

fn cmd_analyze(
    input: &PathBuf,
    config: Option<&PathBuf>,
    overrides: &Overrides,
    output: Option<&PathBuf>,
) -> Result<()> {
    let cfg = run::resolve_config(config.map(PathBuf::as_path), overrides)?;
    let out = run::analyze(input, cfg)?;
    tracing::info!(
        events = out.stats.events,
        roots = out.stats.roots,
        histograms = out.histograms.len(),
        "analysis complete"
    );
    write_json(output, serde_json::to_value(&out)?)
}

fn cmd_chain(input: &PathBuf, config: Option<&PathBuf>, overrides: &Overrides) -> Result<()> {
    let cfg = run::resolve_config(config.map(PathBuf::as_path), overrides)?;
    print!("{}", run::chain_text(input, &cfg)?);
    Ok(())
}

fn cmd_config_defaults() -> Result<()> {
    let defaults = ns_decay::AnalysisConfig::default();
    let cfg = ns_decay::AnalysisConfig { histograms: Some(defaults.bookings()), ..defaults };
    print!("{}", serde_yaml_ng::to_string(&cfg)?);
    Ok(())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
