use serde_json::{Map, Value};

/// Produces a structurally independent copy of an arbitrary value graph.
///
/// Sequences are copied element-wise, records field-wise; scalars are cloned
/// by value. The result shares no container with the source, so mutating one
/// never shows through the other.
pub fn deep_copy(source: &Value) -> Value {
    match source {
        Value::Array(items) => Value::Array(items.iter().map(deep_copy).collect()),
        Value::Object(fields) => {
            let mut copied = Map::new();
            for (key, value) in fields {
                copied.insert(key.clone(), deep_copy(value));
            }
            Value::Object(copied)
        }
        scalar => scalar.clone(),
    }
}
