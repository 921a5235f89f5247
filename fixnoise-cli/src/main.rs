//! `fixnoise`: table generator and field sampler for the fixed-point noise core.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::tables::TableSelection;
use config::{Config, DEFAULT_CONFIG_PATH, TableFormat};

#[derive(Parser)]
#[command(name = "fixnoise", version)]
#[command(about = "Fixed-point Perlin noise: emit constant tables or sample the field")]
struct Cli {
    /// JSON5 config file (defaults to ./fixnoise.json5 when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Tracing filter, overriding the config file. `RUST_LOG` wins over both.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the permutation and fade tables as Rust source.
    Tables(TablesArgs),
    /// Evaluate the noise field over a grid.
    Sample(SampleArgs),
}

#[derive(Args)]
struct TablesArgs {
    /// Table shape: flat arrays or decision-tree functions.
    #[arg(long, value_enum)]
    format: Option<TableFormat>,
    /// Which tables to emit.
    #[arg(long, value_enum, default_value_t = TableSelection::All)]
    table: TableSelection,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Pipe the output through rustfmt.
    #[arg(long)]
    rustfmt: bool,
}

#[derive(Args)]
struct SampleArgs {
    /// 2 or 3.
    #[arg(long)]
    dims: Option<u8>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(long, allow_negative_numbers = true)]
    origin_x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    origin_y: Option<f64>,
    /// Slice sampled by 3D noise.
    #[arg(long, allow_negative_numbers = true)]
    z: Option<f64>,
    /// Spacing between samples, in lattice units.
    #[arg(long)]
    step: Option<f64>,
    /// Print an ASCII shade map instead of CSV.
    #[arg(long)]
    ascii: bool,
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level filter {level:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path, true),
        None => Config::load(DEFAULT_CONFIG_PATH.as_ref(), false),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    if let Some(level) = &cli.log_level {
        config.log_level.clone_from(level);
    }
    init_tracing(&config.log_level)?;

    match cli.command {
        Commands::Tables(args) => {
            let format = args.format.unwrap_or(config.tables.format);
            let rustfmt = args.rustfmt || config.tables.rustfmt;
            commands::tables::run(args.table, format.into(), args.out.as_deref(), rustfmt)
        }
        Commands::Sample(args) => {
            let mut sample = config.sample;
            if let Some(dims) = args.dims {
                sample.dims = dims;
            }
            if let Some(width) = args.width {
                sample.width = width;
            }
            if let Some(height) = args.height {
                sample.height = height;
            }
            if let Some(x) = args.origin_x {
                sample.origin[0] = x;
            }
            if let Some(y) = args.origin_y {
                sample.origin[1] = y;
            }
            if let Some(z) = args.z {
                sample.origin[2] = z;
            }
            if let Some(step) = args.step {
                sample.step = step;
            }
            sample.ascii |= args.ascii;
            commands::sample::run(&sample)
        }
    }
}
