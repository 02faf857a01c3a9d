//! Descriptor merging
//!
//! Combines the shared base descriptor with a project override. Most keys
//! are replaced wholesale; a few get dedicated handling:
//!
//! - `features`, `customizations`, `containerEnv`: deep merge
//! - `postCreateCommand`: bootstrap command always runs first
//! - `build`: pinned to the shared Dockerfile, only `args` come from the project
//! - `workspaceFolder`: pinned

pub mod build;
pub mod command;
pub mod deep;

pub use build::forced_build;
pub use command::combine_post_create;
pub use deep::{merge_maps, merge_unique, merge_values};

use crate::domain::{Descriptor, MergePolicy};
use serde_json::Value;

pub const DEEP_MERGE_KEYS: [&str; 3] = ["features", "customizations", "containerEnv"];
pub const POST_CREATE_KEY: &str = "postCreateCommand";
pub const BUILD_KEY: &str = "build";
pub const WORKSPACE_FOLDER_KEY: &str = "workspaceFolder";
pub const NAME_KEY: &str = "name";

/// Merge a project descriptor onto the base descriptor.
///
/// Pure function of its inputs; either side may be empty.
pub fn merge_descriptors(base: &Descriptor, project: &Descriptor, policy: &MergePolicy) -> Descriptor {
    let mut merged = base.clone();

    for (key, value) in project {
        match key.as_str() {
            // A null override leaves the base value alone
            k if DEEP_MERGE_KEYS.contains(&k) && value.is_null() => {}
            k if DEEP_MERGE_KEYS.contains(&k) => {
                let combined = match base.get(k) {
                    Some(existing) => merge_values(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), combined);
            }
            POST_CREATE_KEY | BUILD_KEY | WORKSPACE_FOLDER_KEY => {}
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    merged.insert(BUILD_KEY.to_string(), forced_build(policy, project.get(BUILD_KEY)));
    merged.insert(
        POST_CREATE_KEY.to_string(),
        combine_post_create(policy, project.get(POST_CREATE_KEY)),
    );
    merged.insert(
        WORKSPACE_FOLDER_KEY.to_string(),
        Value::String(policy.workspace_folder.clone()),
    );

    match &policy.default_name {
        Some(name) if !merged.contains_key(NAME_KEY) => {
            let mut named = Descriptor::with_capacity(merged.len() + 1);
            named.insert(NAME_KEY.to_string(), Value::String(name.clone()));
            named.extend(merged);
            named
        }
        _ => merged,
    }
}
