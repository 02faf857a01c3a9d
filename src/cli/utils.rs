//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::descriptor::{render_pretty, write_pretty};
use crate::domain::{Config, Descriptor};

/// Options shared by `build` and `merge`.
#[derive(Args)]
pub struct CommonArgs {
    /// Project root the layout paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to a tool config file (devcontainer-merge.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the merged descriptor to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl CommonArgs {
    /// Canonical project root plus the tool config found there.
    pub fn resolve(&self) -> Result<(PathBuf, Config)> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("Failed resolving root: {}", self.root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("Path is not a directory: {}", root.display());
        }
        let config = load_config(&root, self.config.as_deref())?;
        Ok((root, config))
    }
}

/// Write the descriptor to `path`, or print it when `to_stdout` is set.
pub fn emit(descriptor: &Descriptor, path: &Path, to_stdout: bool) -> Result<()> {
    if to_stdout {
        print!("{}", render_pretty(descriptor)?);
        return Ok(());
    }
    write_pretty(path, descriptor)?;
    tracing::debug!("Wrote {} top-level keys to {}", descriptor.len(), path.display());
    Ok(())
}
