use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Discriminator property name used when none is given.
pub const DEFAULT_DISCRIMINATOR: &str = "type";

/// Knobs for one transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Name of the injected property carrying the literal type name.
    pub discriminator: String,
    /// Primary type whose instances may omit the discriminator.
    pub default_primary_type: Option<String>,
    /// Emit `ImplementationsOf.<Base>` for every abstract base with concrete
    /// descendants, not only the ones a property references.
    pub emit_all_implementations: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self {
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
            default_primary_type: None,
            emit_all_implementations: true,
        }
    }

    pub fn with_discriminator(mut self, name: impl Into<String>) -> Self {
        self.discriminator = name.into();
        self
    }

    pub fn with_default_primary_type(mut self, name: impl Into<String>) -> Self {
        self.default_primary_type = Some(name.into());
        self
    }

    pub fn with_emit_all_implementations(mut self, emit: bool) -> Self {
        self.emit_all_implementations = emit;
        self
    }
}

/// Per-run cache of synthetic definitions.
///
/// Owned by a single document build and dropped with it; two runs never share one.
#[derive(Debug, Default)]
pub struct ConversionState {
    /// `Extendable.*` definitions keyed by their synthetic name, in discovery order.
    pub extendables: IndexMap<String, Value>,
    /// Abstract bases referenced polymorphically, in discovery order.
    pub polymorphic_bases: IndexSet<String>,
    /// Abstract types without concrete descendants that a property names directly.
    pub direct_abstract_refs: IndexSet<String>,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `base` was referenced polymorphically. Marking twice is a no-op.
    pub fn mark_polymorphic(&mut self, base: &str) {
        if !self.polymorphic_bases.contains(base) {
            self.polymorphic_bases.insert(base.to_string());
        }
    }

    pub fn mark_direct_abstract(&mut self, name: &str) {
        if !self.direct_abstract_refs.contains(name) {
            self.direct_abstract_refs.insert(name.to_string());
        }
    }
}
