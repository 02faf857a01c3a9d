//! Descriptor loading

use crate::domain::Descriptor;
use crate::jsonc::{self, JsoncError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: JsoncError,
    },
}

/// Load a descriptor. A missing file is `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<Descriptor>, DescriptorError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(DescriptorError::Read { path: path.to_path_buf(), source }),
    };

    jsonc::parse(&content)
        .map(Some)
        .map_err(|source| DescriptorError::Parse { path: path.to_path_buf(), source })
}

/// Load a descriptor, degrading to an empty object when it is missing or broken.
///
/// Broken files are reported but never abort the run.
pub fn load_or_empty(path: &Path, label: &str) -> Descriptor {
    match load(path) {
        Ok(Some(descriptor)) => {
            tracing::debug!(
                "Loaded {} config from {} ({} keys)",
                label,
                path.display(),
                descriptor.len()
            );
            descriptor
        }
        Ok(None) => {
            tracing::debug!("No {} config at {}; using an empty one", label, path.display());
            Descriptor::new()
        }
        Err(e) => {
            tracing::error!("Error parsing {} config: {}", label, e);
            Descriptor::new()
        }
    }
}
