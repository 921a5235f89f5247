//! `fixnoise tables`: emit the permutation and fade tables as Rust source.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use fixnoise::codec::emit::{EmitFormat, tables_file};
use fixnoise::codec::sources::TableKind;

const HEADER: &str = "Generated by `fixnoise tables`. Do not edit manually.";

/// Which tables to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TableSelection {
    /// Only the permutation table.
    Permutation,
    /// Only the fade table.
    Fade,
    /// Both tables.
    #[default]
    All,
}

impl TableSelection {
    fn kinds(self) -> &'static [TableKind] {
        match self {
            Self::Permutation => &[TableKind::Permutation],
            Self::Fade => &[TableKind::Fade],
            Self::All => &TableKind::ALL,
        }
    }
}

/// Renders the selected tables into one source file.
pub fn render(selection: TableSelection, format: EmitFormat) -> Result<String> {
    let tokens = tables_file(HEADER, selection.kinds(), format)
        .with_context(|| format!("Failed to encode {selection:?} tables"))?;
    Ok(tokens.to_string())
}

/// Runs the `tables` command.
pub fn run(
    selection: TableSelection,
    format: EmitFormat,
    out: Option<&Path>,
    rustfmt: bool,
) -> Result<()> {
    let mut source = render(selection, format)?;
    if rustfmt {
        source = format_source(source);
    }

    match out {
        Some(path) => {
            fs::write(path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = source.len(), "wrote tables");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(source.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Pipes `source` through `rustfmt`, returning it unchanged if that fails.
fn format_source(source: String) -> String {
    match rustfmt(&source) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!("rustfmt unavailable, emitting unformatted source: {err:#}");
            source
        }
    }
}

fn rustfmt(source: &str) -> Result<String> {
    let mut child = Command::new("rustfmt")
        .args(["--edition", "2024"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to spawn rustfmt")?;

    child
        .stdin
        .take()
        .context("rustfmt stdin closed")?
        .write_all(source.as_bytes())?;

    let output = child.wait_with_output()?;
    anyhow::ensure!(output.status.success(), "rustfmt exited with {}", output.status);
    String::from_utf8(output.stdout).context("rustfmt produced invalid UTF-8")
}
