//! devcontainer-merge: build `.devcontainer/devcontainer.json` from a shared
//! base plus project-specific overrides.

use anyhow::Result;

fn main() -> Result<()> {
    devcontainer_merge::cli::run()
}
