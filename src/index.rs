//! Name-keyed index over the authored types.
//!
//! Inheritance is a forest keyed by name: each descriptor carries an optional
//! parent name, and ancestry is walked through lookups here. Construction
//! rejects duplicates, reserved names, unknown parents and cycles, so every
//! other part of the engine may assume an acyclic, fully-resolved hierarchy.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::common::names::is_reserved_name;
use crate::converter::expression::TypeExpr;
use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct TypeIndex {
    descriptors: Vec<TypeDescriptor>,
    by_name: HashMap<String, usize>,
}

impl TypeIndex {
    /// Index `descriptors`, keeping their declaration order.
    pub fn build(descriptors: Vec<TypeDescriptor>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(descriptors.len());
        for (i, descriptor) in descriptors.iter().enumerate() {
            if is_reserved_name(&descriptor.name) {
                return Err(Error::ReservedTypeName(descriptor.name.clone()));
            }
            if by_name.insert(descriptor.name.clone(), i).is_some() {
                return Err(Error::DuplicateTypeName(descriptor.name.clone()));
            }
        }

        let index = Self {
            descriptors,
            by_name,
        };

        for descriptor in &index.descriptors {
            if let Some(parent) = &descriptor.extends {
                if !index.contains(parent) {
                    return Err(Error::UnknownType {
                        name: parent.clone(),
                        referenced_by: format!("`extends` of `{}`", descriptor.name),
                    });
                }
            }
            index.check_acyclic(&descriptor.name)?;
        }

        debug!(types = index.descriptors.len(), "indexed type descriptors");
        Ok(index)
    }

    fn check_acyclic(&self, start: &str) -> Result<()> {
        let mut seen = HashSet::new();
        let mut chain = vec![start.to_string()];
        seen.insert(start);
        let mut current = start;
        while let Some(parent) = self.parent_of(current) {
            chain.push(parent.to_string());
            if !seen.insert(parent) {
                return Err(Error::InheritanceCycle(chain));
            }
            current = parent;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Like [`TypeIndex::get`], but an absent name is an [`Error::UnknownType`]
    /// attributed to `referenced_by`.
    pub fn lookup(&self, name: &str, referenced_by: &str) -> Result<&TypeDescriptor> {
        self.get(name).ok_or_else(|| Error::UnknownType {
            name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(name).map(|&i| &self.descriptors[i])
    }

    /// All descriptors in declaration order.
    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|d| d.extends.as_deref())
    }

    /// True if `name` appears anywhere in the `extends` chain of `descendant`.
    pub fn extends_transitively(&self, descendant: &str, name: &str) -> bool {
        let mut current = self.parent_of(descendant);
        while let Some(parent) = current {
            if parent == name {
                return true;
            }
            current = self.parent_of(parent);
        }
        false
    }

    /// Concrete types whose `extends` chain reaches `name`, in declaration order.
    pub fn concrete_descendants_of(&self, name: &str) -> Vec<&str> {
        self.descriptors
            .iter()
            .filter(|d| !d.is_abstract && self.extends_transitively(&d.name, name))
            .map(|d| d.name.as_str())
            .collect()
    }

    pub fn has_concrete_descendants(&self, name: &str) -> bool {
        self.descriptors
            .iter()
            .any(|d| !d.is_abstract && self.extends_transitively(&d.name, name))
    }

    /// Whether a reference to `name` resolves to the union of its implementations.
    pub fn is_polymorphic(&self, name: &str) -> bool {
        self.get(name).is_some_and(|d| d.is_abstract) && self.has_concrete_descendants(name)
    }

    /// True when some property expression names `name` directly and `name`
    /// has concrete descendants. Expressions that fail to parse are skipped;
    /// the resolver reports them.
    pub fn is_referenced_polymorphically(&self, name: &str) -> bool {
        if !self.has_concrete_descendants(name) {
            return false;
        }
        self.descriptors
            .iter()
            .flat_map(|d| d.properties.values())
            .filter_map(|p| TypeExpr::parse(&p.type_expression).ok())
            .any(|expr| expr.identifiers().contains(&name))
    }
}
