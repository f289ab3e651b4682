use serde_json::json;
use serde_json::{Map, Value};

use crate::common::names::{definition_pointer, discriminator_description};

/// `{"$ref": "#/definitions/<name>"}`
pub fn create_ref(name: &str) -> Value {
    json!({ "$ref": definition_pointer(name) })
}

/// `{"type": "array", "items": ...}`
pub fn create_array_type(items: Value) -> Value {
    json!({
        "type": "array",
        "items": items
    })
}

/// String-keyed map: an object whose every value matches `values`.
pub fn create_map_type(values: Value) -> Value {
    json!({
        "type": "object",
        "additionalProperties": values
    })
}

pub fn create_union_type(alternatives: Vec<Value>) -> Value {
    json!({ "anyOf": alternatives })
}

/// `{"allOf": [{"$ref": ...}]}`, used to compose a definition into another schema.
pub fn create_composition(name: &str) -> Value {
    Value::Array(vec![create_ref(name)])
}

/// One alternative of a top-level (or implementations) disjunction.
///
/// `discriminator` is `None` for the default primary type, whose instances
/// may leave the discriminator out.
pub fn create_disjunction_entry(name: &str, discriminator: Option<&str>) -> Value {
    let mut entry = Map::new();
    if let Some(property) = discriminator {
        entry.insert("required".to_string(), json!([property]));
    }
    entry.insert("allOf".to_string(), create_composition(name));
    Value::Object(entry)
}

/// Schema of the injected discriminator property for `type_name`.
pub fn create_discriminator_property(type_name: &str) -> Value {
    json!({
        "enum": [type_name],
        "description": discriminator_description(type_name)
    })
}
