//! Recursive merge of descriptor values

use crate::domain::Descriptor;
use serde_json::Value;

/// Merge `over` onto `base`.
///
/// Two objects merge key by key, two arrays concatenate without duplicates,
/// and any other pairing takes `over` as-is.
pub fn merge_values(base: &Value, over: &Value) -> Value {
    match (base, over) {
        (Value::Object(base), Value::Object(over)) => Value::Object(merge_maps(base, over)),
        (Value::Array(base), Value::Array(over)) => Value::Array(merge_unique(base, over)),
        _ => over.clone(),
    }
}

/// Merge two objects, keeping base key order and appending keys new in `over`.
pub fn merge_maps(base: &Descriptor, over: &Descriptor) -> Descriptor {
    let mut out = base.clone();
    for (key, value) in over {
        let merged = match base.get(key) {
            Some(existing) => merge_values(existing, value),
            None => value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}

/// Concatenate `base` then `over`, keeping the first occurrence of each element.
pub fn merge_unique(base: &[Value], over: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(base.len() + over.len());
    for item in base.iter().chain(over) {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn nested_objects_are_combined() {
        let merged = merge_values(&json!({"a": {"x": 1}}), &json!({"a": {"y": 2}}));
        assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn arrays_concatenate_without_duplicates() {
        let merged = merge_values(&json!(["ext1", "ext2"]), &json!(["ext2", "ext3"]));
        assert_eq!(merged, json!(["ext1", "ext2", "ext3"]));
    }

    #[test]
    fn duplicates_within_base_collapse() {
        let merged = merge_unique(&[json!("a"), json!("a")], &[json!("b"), json!("a")]);
        assert_eq!(merged, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn scalar_override_wins() {
        assert_eq!(merge_values(&json!({"v": "1"}), &json!({"v": "2"})), json!({"v": "2"}));
        assert_eq!(merge_values(&json!({"v": {"deep": 1}}), &json!({"v": false})), json!({"v": false}));
    }

    #[test]
    fn mismatched_shapes_take_override() {
        let merged = merge_values(&json!({"mounts": ["a"]}), &json!({"mounts": {"b": 1}}));
        assert_eq!(merged, json!({"mounts": {"b": 1}}));
    }

    #[test]
    fn null_override_replaces() {
        let merged = merge_values(&json!({"FOO": "bar"}), &json!({"FOO": null}));
        assert_eq!(merged, json!({"FOO": null}));
    }

    #[test]
    fn base_key_order_is_preserved() {
        let merged = merge_values(&json!({"b": 1, "a": 2}), &json!({"c": 3, "b": 4}));
        let keys: Vec<&str> = merged.as_object().expect("object").keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
