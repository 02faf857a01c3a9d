//! devcontainer-merge: generate a dev container descriptor
//!
//! Combines a shared base `devcontainer.json` with a project-specific
//! override, pinning the build image, workspace folder and bootstrap step
//! so every project starts from the same container definition.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod jsonc;
pub mod merge;

pub use domain::{Config, Descriptor, Layout, MergePolicy};
pub use merge::merge_descriptors;
