use serde_json::Value;
use tracing::trace;

use crate::converter::expression::TypeExpr;
use crate::converter::references::resolve_type_reference;
use crate::converter::state::ConversionState;
use crate::converter::structs::{create_array_type, create_map_type, create_union_type};
use crate::converter::types::primitive_schema;
use crate::descriptor::PropertyDescriptor;
use crate::error::Result;
use crate::index::TypeIndex;

/// Resolve a type expression string into a schema fragment.
///
/// The fragment depends only on the expression and the index; the only side
/// effect is marking polymorphic and direct-abstract usage in `state`, which
/// is idempotent.
pub fn resolve_expression(
    expression: &str,
    index: &TypeIndex,
    state: &mut ConversionState,
) -> Result<Value> {
    let parsed = TypeExpr::parse(expression)?;
    let fragment = resolve_type_expr(&parsed, expression, index, state)?;
    trace!(expression, %fragment, "resolved type expression");
    Ok(fragment)
}

fn resolve_type_expr(
    expr: &TypeExpr,
    expression: &str,
    index: &TypeIndex,
    state: &mut ConversionState,
) -> Result<Value> {
    match expr {
        TypeExpr::Map(values) => Ok(create_map_type(resolve_type_expr(
            values, expression, index, state,
        )?)),
        TypeExpr::Array(items) => Ok(create_array_type(resolve_type_expr(
            items, expression, index, state,
        )?)),
        TypeExpr::Union(alternatives) => {
            let resolved = alternatives
                .iter()
                .map(|alt| resolve_type_expr(alt, expression, index, state))
                .collect::<Result<Vec<_>>>()?;
            Ok(create_union_type(resolved))
        }
        TypeExpr::Named(name) => match primitive_schema(name) {
            Some(primitive) => Ok(primitive),
            None => resolve_type_reference(name, expression, index, state),
        },
    }
}

/// Full schema of one declared property: the resolved fragment followed by
/// its own `description` and `examples`.
pub fn property_schema(
    property: &PropertyDescriptor,
    index: &TypeIndex,
    state: &mut ConversionState,
) -> Result<Value> {
    let mut schema = resolve_expression(&property.type_expression, index, state)?;
    if let Some(obj) = schema.as_object_mut() {
        if let Some(description) = &property.description {
            obj.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(examples) = &property.examples {
            obj.insert("examples".to_string(), Value::Array(examples.clone()));
        }
    }
    Ok(schema)
}
