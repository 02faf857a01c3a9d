//! JSON-with-comments support
//!
//! Descriptors are written by hand and routinely carry `//` and `/* */`
//! comments plus trailing commas. They are stripped here with a small
//! string-aware tokenizer before handing the text to `serde_json`.

mod strip;

pub use strip::{strip_comments, strip_trailing_commas};

use crate::domain::{value_kind, Descriptor};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsoncError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// Strip comments and trailing commas.
pub fn preprocess(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    strip_trailing_commas(&strip_comments(text))
}

/// Parse a JSON-with-comments document into a descriptor object.
///
/// Input that is empty once comments are removed parses as an empty object.
pub fn parse(text: &str) -> Result<Descriptor, JsoncError> {
    let cleaned = preprocess(text);
    if cleaned.trim().is_empty() {
        return Ok(Descriptor::new());
    }

    match serde_json::from_str::<Value>(&cleaned)? {
        Value::Object(map) => Ok(map),
        other => Err(JsoncError::NotAnObject { found: value_kind(&other) }),
    }
}
