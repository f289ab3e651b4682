/// Prefix of the synthetic definition holding a base type's inherited shape.
pub const EXTENDABLE_PREFIX: &str = "Extendable.";

/// Prefix of the synthetic definition holding the union of a base's concrete descendants.
pub const IMPLEMENTATIONS_PREFIX: &str = "ImplementationsOf.";

/// Where every definition lives inside the generated document.
pub const DEFINITIONS_POINTER: &str = "#/definitions/";

/// `Extendable.<Base>`
pub fn extendable_name(base: &str) -> String {
    format!("{EXTENDABLE_PREFIX}{base}")
}

/// `ImplementationsOf.<Base>`
pub fn implementations_name(base: &str) -> String {
    format!("{IMPLEMENTATIONS_PREFIX}{base}")
}

/// `#/definitions/<name>`
pub fn definition_pointer(name: &str) -> String {
    format!("{DEFINITIONS_POINTER}{name}")
}

/// Inverse of [`definition_pointer`]. `None` for pointers outside `definitions`.
pub fn definition_name(pointer: &str) -> Option<&str> {
    pointer.strip_prefix(DEFINITIONS_POINTER)
}

/// Declared names may not collide with synthetic ones.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(EXTENDABLE_PREFIX) || name.starts_with(IMPLEMENTATIONS_PREFIX)
}

/// Text attached to every discriminator property.
pub fn discriminator_description(type_name: &str) -> String {
    format!("Must be `{type_name}`")
}
