use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One authored type.
///
/// The on-disk shape keeps the name under `"type"`, e.g.
/// `{"type": "Action.OpenUrl", "extends": "Action", "properties": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDescriptor {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isAbstract", default, skip_serializing_if = "is_false")]
    pub is_abstract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyDescriptor>,
}

/// One property on a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescriptor {
    #[serde(rename = "type")]
    pub type_expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_abstract: false,
            extends: None,
            properties: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, property: PropertyDescriptor) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Names of properties marked `required`, in declaration order.
    pub fn required_properties(&self) -> Vec<String> {
        self.properties
            .iter()
            .filter(|(_, p)| p.required)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl PropertyDescriptor {
    pub fn new(type_expression: impl Into<String>) -> Self {
        Self {
            type_expression: type_expression.into(),
            description: None,
            required: false,
            examples: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_examples(mut self, examples: Vec<Value>) -> Self {
        self.examples = Some(examples);
        self
    }
}
