//! Descriptor output

use crate::domain::Descriptor;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render as 2-space indented JSON with a trailing newline.
pub fn render_pretty(descriptor: &Descriptor) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(descriptor).context("Failed serializing descriptor")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the descriptor, replacing any existing file.
pub fn write_pretty(path: &Path, descriptor: &Descriptor) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }
    let rendered = render_pretty(descriptor)?;
    fs::write(path, rendered).with_context(|| format!("Failed writing {}", path.display()))
}
