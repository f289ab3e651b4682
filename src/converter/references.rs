use serde_json::Value;
use tracing::trace;

use crate::common::names::implementations_name;
use crate::converter::state::ConversionState;
use crate::converter::structs::create_ref;
use crate::error::{Error, Result};
use crate::index::TypeIndex;

/// Resolve a declared type name used as a property type into a `$ref`.
///
/// Abstract types with concrete descendants resolve to their
/// `ImplementationsOf.<Name>` union and are marked in `state` so the union
/// gets materialized. Everything else points straight at its own definition.
pub fn resolve_type_reference(
    name: &str,
    expression: &str,
    index: &TypeIndex,
    state: &mut ConversionState,
) -> Result<Value> {
    let descriptor = index
        .get(name)
        .ok_or_else(|| Error::UnresolvedTypeReference {
            expression: expression.to_string(),
            token: name.to_string(),
        })?;

    if index.is_polymorphic(name) {
        trace!(base = name, "polymorphic reference");
        state.mark_polymorphic(name);
        return Ok(create_ref(&implementations_name(name)));
    }

    if descriptor.is_abstract {
        state.mark_direct_abstract(name);
    }
    Ok(create_ref(name))
}
