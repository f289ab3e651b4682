use serde_json::{json, Value};

/// Map a bare name onto its JSON Schema primitive, if it is one.
///
/// Handles:
/// - `"uri"` → string with `format: uri`
/// - the draft-06 primitive keywords, passed through as `{"type": <name>}`
pub fn primitive_schema(name: &str) -> Option<Value> {
    match name {
        "uri" => Some(json!({"type": "string", "format": "uri"})),
        "string" | "number" | "integer" | "boolean" | "object" | "array" | "null" => {
            Some(json!({ "type": name }))
        }
        _ => None,
    }
}
