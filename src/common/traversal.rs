use serde_json::Value;

/// Keywords whose values are instance data, not subschemas.
const LITERAL_KEYWORDS: &[&str] = &["examples", "enum", "const", "default"];

/// Collect every `$ref` string in a schema, depth first, in document order.
///
/// Values under [`LITERAL_KEYWORDS`] are skipped: a `"$ref"` key inside an
/// example is data, not a pointer.
pub fn collect_refs(schema: &Value) -> Vec<String> {
    fn walk(node: &Value, refs: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    if key == "$ref" {
                        if let Some(s) = value.as_str() {
                            refs.push(s.to_string());
                        }
                    } else if LITERAL_KEYWORDS.contains(&key.as_str()) {
                        continue;
                    } else if value.is_object() || value.is_array() {
                        walk(value, refs);
                    }
                }
            }
            Value::Array(arr) => {
                for item in arr {
                    walk(item, refs);
                }
            }
            _ => {}
        }
    }

    let mut refs = Vec::new();
    walk(schema, &mut refs);
    refs
}

/// Find the first `$ref` in `document` that doesn't land on a `definitions` entry.
pub fn find_dangling_ref(document: &Value) -> Option<String> {
    let definitions = document.get("definitions").and_then(|d| d.as_object());
    collect_refs(document).into_iter().find(|pointer| {
        match crate::common::names::definition_name(pointer) {
            Some(name) => !definitions.is_some_and(|defs| defs.contains_key(name)),
            None => true,
        }
    })
}
