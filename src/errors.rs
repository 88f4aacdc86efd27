use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("children field '{field}' is not a sequence of nodes (found {kind})")]
    ChildrenNotASequence { field: String, kind: &'static str },

    #[error("mapped node cannot hold a '{field}' field (found {kind})")]
    MappedNotARecord { field: String, kind: &'static str },
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Human-readable kind of a value, for error payloads.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
