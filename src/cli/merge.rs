//! Merge command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::utils::{emit, CommonArgs};
use crate::descriptor::{load, load_or_empty};
use crate::domain::Descriptor;
use crate::merge::merge_descriptors;

#[derive(Args)]
pub struct MergeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let (root, config) = args.common.resolve()?;
    let layout = &config.layout;

    // The generated descriptor stands in for the project config here.
    let project_path = layout.output_path(&root);
    let project = load_project(&project_path, args.common.stdout);
    let base = load_or_empty(&layout.base_path(&root), "base");

    let merged = merge_descriptors(&base, &project, &config.policy);
    emit(&merged, &project_path, args.common.stdout)?;

    if !args.common.stdout {
        println!(
            "Successfully merged {} with base configuration",
            layout.output_dir.join(&layout.output_file).display()
        );
    }
    Ok(())
}

/// Load the in-place target. When it cannot be parsed, its contents are about
/// to be replaced, so say which file loses them.
fn load_project(path: &Path, to_stdout: bool) -> Descriptor {
    match load(path) {
        Ok(Some(descriptor)) => descriptor,
        Ok(None) => {
            tracing::debug!("No project config at {}; using an empty one", path.display());
            Descriptor::new()
        }
        Err(e) => {
            tracing::error!("Error parsing project config: {}", e);
            if !to_stdout {
                tracing::warn!(
                    "Overwriting unparsable {} with the base configuration; its previous contents are discarded",
                    path.display()
                );
            }
            Descriptor::new()
        }
    }
}
