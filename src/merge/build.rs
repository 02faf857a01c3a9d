//! Pinned `build` section

use crate::domain::{Descriptor, MergePolicy};
use serde_json::Value;

/// Build the `build` object: dockerfile and context always point at the shared
/// base image, only `args` survives from the project side.
pub fn forced_build(policy: &MergePolicy, project_build: Option<&Value>) -> Value {
    let mut build = Descriptor::new();
    build.insert("dockerfile".to_string(), Value::String(policy.dockerfile.clone()));
    build.insert("context".to_string(), Value::String(policy.build_context.clone()));

    if let Some(args) = project_build.and_then(|b| b.get("args")).filter(|a| !a.is_null()) {
        build.insert("args".to_string(), args.clone());
    }

    Value::Object(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_BUILD_CONTEXT, DEFAULT_DOCKERFILE};
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn project_dockerfile_is_ignored() {
        let project = json!({"dockerfile": "Dockerfile.dev", "context": "..", "target": "dev"});
        assert_eq!(
            forced_build(&MergePolicy::default(), Some(&project)),
            json!({"dockerfile": DEFAULT_DOCKERFILE, "context": DEFAULT_BUILD_CONTEXT})
        );
    }

    #[test]
    fn args_are_carried_through() {
        let project = json!({"dockerfile": "x", "args": {"NODE_VERSION": "20"}});
        assert_eq!(
            forced_build(&MergePolicy::default(), Some(&project)),
            json!({
                "dockerfile": DEFAULT_DOCKERFILE,
                "context": DEFAULT_BUILD_CONTEXT,
                "args": {"NODE_VERSION": "20"}
            })
        );
    }

    #[test]
    fn non_object_build_is_ignored() {
        let built = forced_build(&MergePolicy::default(), Some(&json!("Dockerfile")));
        assert!(built.get("args").is_none());
    }
}
