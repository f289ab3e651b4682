use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::common::traversal::find_dangling_ref;
use crate::converter::definitions::{check_discriminator_collision, type_definition};
use crate::converter::inheritance::build_implementations;
use crate::converter::state::{ConversionState, TransformOptions};
use crate::converter::structs::create_disjunction_entry;
use crate::error::{Error, Result};
use crate::index::TypeIndex;

/// `$schema` of every generated document.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-06/schema#";

/// `id` of every generated document.
pub const DOCUMENT_ID: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

/// Drives one transform over an index.
///
/// Holds the synthetic-definition cache for exactly one run; build a new
/// one per document.
pub struct DocumentBuilder<'a> {
    index: &'a TypeIndex,
    options: &'a TransformOptions,
    state: ConversionState,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(index: &'a TypeIndex, options: &'a TransformOptions) -> Self {
        Self {
            index,
            options,
            state: ConversionState::new(),
        }
    }

    /// Produce the complete document. Consumes the builder so its cache cannot leak
    /// into another run.
    pub fn build<S: AsRef<str>>(mut self, primary_types: &[S]) -> Result<Value> {
        let primary: Vec<&str> = primary_types.iter().map(|s| s.as_ref()).collect();
        self.check_primary_types(&primary)?;

        let index = self.index;
        let options = self.options;
        let discriminator = options.discriminator.as_str();
        for descriptor in index.descriptors() {
            check_discriminator_collision(descriptor, discriminator)?;
        }

        let declared = self.assemble_declared()?;
        let implementations = build_implementations(index, &self.state, options);

        let mut definitions = Map::new();
        for descriptor in index.descriptors() {
            if let Some(schema) = declared.get(&descriptor.name) {
                definitions.insert(descriptor.name.clone(), schema.clone());
            }
        }
        definitions.extend(self.state.extendables);
        definitions.extend(implementations);

        let any_of: Vec<Value> = primary
            .iter()
            .map(|&name| {
                let is_default = options.default_primary_type.as_deref() == Some(name);
                create_disjunction_entry(name, (!is_default).then_some(discriminator))
            })
            .collect();

        let document = json!({
            "$schema": SCHEMA_DIALECT,
            "id": DOCUMENT_ID,
            "anyOf": any_of,
            "definitions": definitions
        });

        if let Some(pointer) = find_dangling_ref(&document) {
            return Err(Error::DanglingReference(pointer));
        }

        debug!(
            definitions = document["definitions"].as_object().map_or(0, Map::len),
            "built schema document"
        );
        Ok(document)
    }

    fn check_primary_types(&self, primary: &[&str]) -> Result<()> {
        if primary.is_empty() {
            return Err(Error::InvalidPrimaryType {
                name: String::new(),
                reason: "at least one primary type is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for &name in primary {
            let reason = match self.index.get(name) {
                None => Some("not a declared type"),
                Some(d) if d.is_abstract => Some("abstract types cannot be primary"),
                Some(_) if !seen.insert(name) => Some("listed more than once"),
                Some(_) => None,
            };
            if let Some(reason) = reason {
                return Err(Error::InvalidPrimaryType {
                    name: name.to_string(),
                    reason: reason.to_string(),
                });
            }
        }

        if let Some(default) = &self.options.default_primary_type {
            if !primary.contains(&default.as_str()) {
                return Err(Error::InvalidPrimaryType {
                    name: default.clone(),
                    reason: "default primary type is not among the primary types".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Assemble every concrete type, then any abstract type a property names
    /// directly. Assembling an abstract type may name further abstract types,
    /// so this repeats until nothing new turns up.
    fn assemble_declared(&mut self) -> Result<IndexMap<String, Value>> {
        let index = self.index;
        let options = self.options;
        let discriminator = options.discriminator.as_str();
        let mut declared = IndexMap::new();

        for descriptor in index.descriptors().iter().filter(|d| !d.is_abstract) {
            let schema = type_definition(descriptor, index, &mut self.state, discriminator)?;
            declared.insert(descriptor.name.clone(), schema);
        }

        loop {
            let pending: Vec<String> = self
                .state
                .direct_abstract_refs
                .iter()
                .filter(|name| !declared.contains_key(*name))
                .cloned()
                .collect();
            if pending.is_empty() {
                break;
            }
            for name in pending {
                let descriptor = index.lookup(&name, "a property type")?;
                let schema = type_definition(descriptor, index, &mut self.state, discriminator)?;
                declared.insert(name, schema);
            }
        }

        Ok(declared)
    }
}
