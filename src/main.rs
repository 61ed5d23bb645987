//! Windowed Series CLI
//!
//! Generate the synthetic series, split it and print the windowed tensor shapes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use windowed_series::utils::setup_logging;
use windowed_series::{prepare_datasets, Config, WindowedDataset};

#[derive(Parser)]
#[command(name = "windowed-series")]
#[command(about = "Synthetic time series windowed for encoder-decoder training", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, split and window a series
    Generate(GenerateArgs),

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "windowed-series.toml")]
        output: String,
    },
}

/// Overrides applied on top of the loaded configuration
#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Number of time steps
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Final time
    #[arg(long)]
    final_time: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of samples used for training
    #[arg(long)]
    split: Option<f64>,

    /// Input window length
    #[arg(short, long)]
    input_window: Option<usize>,

    /// Output window length
    #[arg(short, long)]
    output_window: Option<usize>,

    /// Step between windows
    #[arg(short, long)]
    stride: Option<usize>,
}

impl GenerateArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(n) = self.samples {
            config.signal.num_samples = n;
        }
        if let Some(tf) = self.final_time {
            config.signal.final_time = tf;
        }
        if let Some(s) = self.seed {
            config.signal.seed = Some(s);
        }
        if let Some(f) = self.split {
            config.split.train_ratio = f;
        }
        if let Some(iw) = self.input_window {
            config.window.input_window = iw;
        }
        if let Some(ow) = self.output_window {
            config.window.output_window = ow;
        }
        if let Some(s) = self.stride {
            config.window.stride = s;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("failed to load config from {}", path))?
        }
        None => Config::default(),
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level);

    match cli.command {
        Commands::Generate(args) => {
            args.apply(&mut config);

            info!(?config, "running pipeline");
            let data = prepare_datasets(&config).context("failed to prepare datasets")?;

            println!(
                "Series: {} samples over [0, {:.4}]",
                data.series.len(),
                config.signal.final_time
            );
            println!(
                "Split:  {} train / {} test (fraction {})",
                data.split.t_train.len(),
                data.split.t_test.len(),
                config.split.train_ratio
            );
            print_dataset("Train", &data.train);
            print_dataset("Test", &data.test);
        }
        Commands::InitConfig { output } => {
            Config::create_default(&output)
                .with_context(|| format!("failed to write config to {}", output))?;
            info!("Wrote default configuration to {}", output);
        }
    }

    Ok(())
}

fn print_dataset(name: &str, ds: &WindowedDataset) {
    println!(
        "{:<6} X {:?}  Y {:?}",
        format!("{}:", name),
        ds.inputs().shape(),
        ds.targets().shape()
    );
}
