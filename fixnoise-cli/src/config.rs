//! Optional JSON5 configuration for the `fixnoise` tool.
//!
//! Every field has a default, so a missing file or a partial file both work.
//! Command-line flags override whatever is loaded here.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use fixnoise::codec::emit::EmitFormat;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "fixnoise.json5";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Defaults for `fixnoise sample`.
    pub sample: SampleConfig,
    /// Defaults for `fixnoise tables`.
    pub tables: TablesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            sample: SampleConfig::default(),
            tables: TablesConfig::default(),
        }
    }
}

/// Grid sampled by `fixnoise sample`. Coordinates are real numbers, converted to
/// Q16.16 once before sampling.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// 2 or 3.
    pub dims: u8,
    /// Samples per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Grid origin; `z` is the slice sampled in 3D.
    pub origin: [f64; 3],
    /// Spacing between samples along x and y.
    pub step: f64,
    /// Print an ASCII shade map instead of CSV.
    pub ascii: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            dims: 2,
            width: 64,
            height: 32,
            origin: [0.0; 3],
            step: 0.125,
            ascii: false,
        }
    }
}

/// Output shape of `fixnoise tables`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Flat `const` arrays.
    #[default]
    Array,
    /// Decision-tree lookup functions.
    Tree,
}

impl From<TableFormat> for EmitFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Array => Self::Array,
            TableFormat::Tree => Self::Tree,
        }
    }
}

/// Defaults for table emission.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    /// Emitted table shape.
    pub format: TableFormat,
    /// Pipe the output through `rustfmt`.
    pub rustfmt: bool,
}

impl Config {
    /// Loads the config at `path`.
    ///
    /// A missing file yields the defaults unless `required` is set, which is the
    /// case when the path was passed explicitly.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("Failed to parse config {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read config {}", path.display()))
            }
        }
    }

    /// Parses a JSON5 document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json5::from_str(content).context("invalid JSON5 config")
    }
}
