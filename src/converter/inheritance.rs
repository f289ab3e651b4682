//! Synthetic definitions derived from `extends` relations.
//!
//! - `Extendable.<Base>` carries a base type's own shape with no
//!   discriminator and no `additionalProperties: false`, so it can be
//!   composed into each child through `allOf`. A base that itself extends
//!   another type composes its parent's `Extendable` the same way, so the
//!   chain of `allOf` references mirrors the `extends` chain.
//! - `ImplementationsOf.<Base>` is the closed union of every concrete type
//!   whose `extends` chain reaches an abstract base.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::common::names::{extendable_name, implementations_name};
use crate::converter::properties::property_schema;
use crate::converter::state::{ConversionState, TransformOptions};
use crate::converter::structs::{create_composition, create_disjunction_entry, create_union_type};
use crate::error::Result;
use crate::index::TypeIndex;

/// Build `Extendable.<base>` (and, first, the ones of its ancestors) unless
/// already cached. Returns the synthetic name.
pub fn ensure_extendable(
    base: &str,
    index: &TypeIndex,
    state: &mut ConversionState,
) -> Result<String> {
    let name = extendable_name(base);
    if state.extendables.contains_key(&name) {
        return Ok(name);
    }

    let descriptor = index.lookup(base, &format!("`Extendable` of `{base}`"))?;
    let parent_extendable = match &descriptor.extends {
        Some(parent) => Some(ensure_extendable(parent, index, state)?),
        None => None,
    };

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    if let Some(description) = &descriptor.description {
        schema.insert("description".to_string(), json!(description));
    }

    if !descriptor.properties.is_empty() {
        let mut properties = Map::new();
        for (prop_name, property) in &descriptor.properties {
            properties.insert(prop_name.clone(), property_schema(property, index, state)?);
        }
        schema.insert("properties".to_string(), Value::Object(properties));
    }

    let required = descriptor.required_properties();
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }

    if let Some(parent) = parent_extendable {
        schema.insert("allOf".to_string(), create_composition(&parent));
    }

    debug!(definition = %name, "built extendable definition");
    state.extendables.insert(name.clone(), Value::Object(schema));
    Ok(name)
}

/// `{"anyOf": [...]}` over the concrete descendants of `base`, in declaration order.
pub fn implementations_schema(base: &str, index: &TypeIndex, discriminator: &str) -> Value {
    let entries = index
        .concrete_descendants_of(base)
        .into_iter()
        .map(|descendant| create_disjunction_entry(descendant, Some(discriminator)))
        .collect();
    create_union_type(entries)
}

/// Materialize every `ImplementationsOf.*` definition this run needs.
///
/// Bases referenced polymorphically come first, in the order they were
/// discovered. With `emit_all_implementations`, the remaining abstract bases
/// with concrete descendants follow in declaration order.
pub fn build_implementations(
    index: &TypeIndex,
    state: &ConversionState,
    options: &TransformOptions,
) -> IndexMap<String, Value> {
    let mut bases: Vec<&str> = state.polymorphic_bases.iter().map(String::as_str).collect();
    if options.emit_all_implementations {
        for descriptor in index.descriptors() {
            if index.is_polymorphic(&descriptor.name) && !bases.contains(&descriptor.name.as_str())
            {
                bases.push(&descriptor.name);
            }
        }
    }

    bases
        .into_iter()
        .map(|base| {
            let name = implementations_name(base);
            debug!(definition = %name, "built implementations definition");
            (name, implementations_schema(base, index, &options.discriminator))
        })
        .collect()
}
