//! Build command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::Path;

use super::utils::{emit, CommonArgs};
use crate::descriptor::load_or_empty;
use crate::domain::Layout;
use crate::merge::merge_descriptors;

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep the existing output directory instead of recreating it
    #[arg(long)]
    pub no_clean: bool,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let (root, config) = args.common.resolve()?;
    let layout = &config.layout;
    let to_stdout = args.common.stdout;

    if !to_stdout {
        println!(
            "Building {} from {} + {}...",
            layout.output_dir.display(),
            layout.common_dir.display(),
            parent_or_self(&layout.specific_config).display()
        );
        if !args.no_clean {
            recreate_output_dir(&root, layout)?;
        }
    }

    let base = load_or_empty(&layout.base_path(&root), "base");
    let specific = load_or_empty(&layout.specific_path(&root), "project-specific");
    let merged = merge_descriptors(&base, &specific, &config.policy);

    let output = layout.output_path(&root);
    emit(&merged, &output, to_stdout)?;

    if !to_stdout {
        println!("Generated {}", layout.output_dir.join(&layout.output_file).display());
        println!();
        println!("Structure:");
        println!("  {}/  # Base (shared)", layout.common_dir.display());
        println!("  {}/  # Project config", parent_or_self(&layout.specific_config).display());
        println!("  {}/  # Generated (add to .gitignore)", layout.output_dir.display());
    }

    Ok(())
}

fn parent_or_self(path: &Path) -> &Path {
    path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(path)
}

/// Remove and recreate the output directory.
///
/// Refuses when the directory is the root itself or holds one of the inputs.
fn recreate_output_dir(root: &Path, layout: &Layout) -> Result<()> {
    let out_dir = layout.output_dir_path(root);
    if out_dir.exists() {
        let resolved = out_dir
            .canonicalize()
            .with_context(|| format!("Failed resolving {}", out_dir.display()))?;
        let holds_input = [layout.base_path(root), layout.specific_path(root)]
            .iter()
            .filter_map(|p| p.canonicalize().ok())
            .any(|p| p.starts_with(&resolved));
        if resolved == root || holds_input {
            anyhow::bail!(
                "Refusing to clean {}: it contains the project root or an input descriptor",
                out_dir.display()
            );
        }
        tracing::debug!("Removing {}", out_dir.display());
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("Failed removing {}", out_dir.display()))?;
    }
    fs::create_dir_all(&out_dir).with_context(|| format!("Failed creating {}", out_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn recreate_wipes_stale_files() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().canonicalize().expect("canonical");
        let layout = Layout::default();
        let out_dir = layout.output_dir_path(&root);
        fs::create_dir_all(&out_dir).expect("mkdir");
        fs::write(out_dir.join("stale.txt"), "old").expect("write");

        recreate_output_dir(&root, &layout).expect("recreate");
        assert!(out_dir.is_dir());
        assert!(!out_dir.join("stale.txt").exists());
    }

    #[test]
    fn recreate_refuses_to_remove_root() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().canonicalize().expect("canonical");
        let layout = Layout { output_dir: PathBuf::from("."), ..Default::default() };

        assert!(recreate_output_dir(&root, &layout).is_err());
        assert!(root.is_dir());
    }

    #[test]
    fn recreate_refuses_when_output_holds_input() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path().canonicalize().expect("canonical");
        let layout = Layout {
            specific_config: PathBuf::from(".devcontainer/project.json"),
            ..Default::default()
        };
        fs::create_dir_all(root.join(".devcontainer")).expect("mkdir");
        fs::write(root.join(".devcontainer/project.json"), "{}").expect("write");

        assert!(recreate_output_dir(&root, &layout).is_err());
        assert!(root.join(".devcontainer/project.json").exists());
    }

    #[test]
    fn parent_or_self_handles_bare_file_names() {
        assert_eq!(parent_or_self(Path::new("a/b.json")), Path::new("a"));
        assert_eq!(parent_or_self(Path::new("b.json")), Path::new("b.json"));
    }
}
