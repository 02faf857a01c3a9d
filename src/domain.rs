//! Core types shared across the merge pipeline

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A descriptor document: an untyped JSON object.
pub type Descriptor = serde_json::Map<String, Value>;

pub const DEFAULT_BOOTSTRAP_COMMAND: &str =
    "cd .devcontainer-common && sh .devcontainer/postCreateCommand.sh";
pub const DEFAULT_DOCKERFILE: &str = "../.devcontainer-common/.devcontainer/Dockerfile";
pub const DEFAULT_BUILD_CONTEXT: &str = "../.devcontainer-common/.devcontainer";
pub const DEFAULT_WORKSPACE_FOLDER: &str = "/workspaces/${localWorkspaceFolderBasename}";
pub const DEFAULT_NAME: &str = "${localWorkspaceFolderBasename} Dev Container";

/// Where descriptors live, relative to the invocation root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Shared base subtree (usually a git submodule)
    pub common_dir: PathBuf,
    /// Base descriptor
    pub base_config: PathBuf,
    /// Project-specific override descriptor
    pub specific_config: PathBuf,
    /// Generated output directory
    pub output_dir: PathBuf,
    /// Generated descriptor file name inside `output_dir`
    pub output_file: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            common_dir: PathBuf::from(".devcontainer-common"),
            base_config: PathBuf::from(".devcontainer-common/.devcontainer/devcontainer.json"),
            specific_config: PathBuf::from(".devcontainer-specific/devcontainer.json"),
            output_dir: PathBuf::from(".devcontainer"),
            output_file: "devcontainer.json".to_string(),
        }
    }
}

impl Layout {
    pub fn base_path(&self, root: &Path) -> PathBuf {
        root.join(&self.base_config)
    }

    pub fn specific_path(&self, root: &Path) -> PathBuf {
        root.join(&self.specific_config)
    }

    pub fn output_dir_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.output_dir_path(root).join(&self.output_file)
    }
}

/// Fixed values the merger forces into every generated descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    pub bootstrap_command: String,
    pub dockerfile: String,
    pub build_context: String,
    pub workspace_folder: String,
    /// Used only when neither input names the container
    pub default_name: Option<String>,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            bootstrap_command: DEFAULT_BOOTSTRAP_COMMAND.to_string(),
            dockerfile: DEFAULT_DOCKERFILE.to_string(),
            build_context: DEFAULT_BUILD_CONTEXT.to_string(),
            workspace_folder: DEFAULT_WORKSPACE_FOLDER.to_string(),
            default_name: Some(DEFAULT_NAME.to_string()),
        }
    }
}

/// Tool configuration, loaded by [`crate::config::load_config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub policy: MergePolicy,
}

/// Human-readable name of a JSON value's kind, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
