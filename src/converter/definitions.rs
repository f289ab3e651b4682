use serde_json::{json, Map, Value};
use tracing::debug;

use crate::converter::inheritance::ensure_extendable;
use crate::converter::properties::property_schema;
use crate::converter::state::ConversionState;
use crate::converter::structs::{create_composition, create_discriminator_property};
use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};
use crate::index::TypeIndex;

/// A declared property may not share the discriminator's name.
///
/// Run once over every descriptor before assembly; [`type_definition`]
/// assumes it passed.
pub fn check_discriminator_collision(descriptor: &TypeDescriptor, discriminator: &str) -> Result<()> {
    if descriptor.properties.contains_key(discriminator) {
        return Err(Error::DiscriminatorNameCollision {
            type_name: descriptor.name.clone(),
            property: discriminator.to_string(),
        });
    }
    Ok(())
}

/// Assemble the definition of one declared type.
///
/// The result is a closed object (`additionalProperties: false`) whose
/// properties are the discriminator followed by the type's own declared
/// properties. Inherited properties are not repeated; a child instead
/// composes `Extendable.<Parent>` through `allOf`.
pub fn type_definition(
    descriptor: &TypeDescriptor,
    index: &TypeIndex,
    state: &mut ConversionState,
    discriminator: &str,
) -> Result<Value> {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("additionalProperties".to_string(), json!(false));
    if let Some(description) = &descriptor.description {
        schema.insert("description".to_string(), json!(description));
    }

    let mut properties = Map::new();
    properties.insert(
        discriminator.to_string(),
        create_discriminator_property(&descriptor.name),
    );
    for (name, property) in &descriptor.properties {
        properties.insert(name.clone(), property_schema(property, index, state)?);
    }
    schema.insert("properties".to_string(), Value::Object(properties));

    let required = descriptor.required_properties();
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }

    if let Some(parent) = &descriptor.extends {
        let extendable = ensure_extendable(parent, index, state)?;
        schema.insert("allOf".to_string(), create_composition(&extendable));
    }

    debug!(definition = %descriptor.name, "assembled type definition");
    Ok(Value::Object(schema))
}
