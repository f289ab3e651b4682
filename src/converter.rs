pub mod definitions;
pub mod document;
pub mod expression;
pub mod inheritance;
pub mod properties;
pub mod references;
pub mod state;
pub mod structs;
pub mod types;

pub use document::{DocumentBuilder, DOCUMENT_ID, SCHEMA_DIALECT};
pub use state::{TransformOptions, DEFAULT_DISCRIMINATOR};

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};
use crate::index::TypeIndex;

/// Convert an in-memory list of type descriptors into a JSON Schema document.
///
/// `primary_types` become the alternatives of the document's top-level
/// `anyOf`, in the order given. Declaration order of `types` is kept
/// throughout the output.
pub fn transform_types<S: AsRef<str>>(
    types: Vec<TypeDescriptor>,
    primary_types: &[S],
    options: &TransformOptions,
) -> Result<Value> {
    let index = TypeIndex::build(types)?;
    DocumentBuilder::new(&index, options).build(primary_types)
}

/// Load type descriptors from disk.
///
/// `path` is either a JSON file holding an array of descriptors, or a
/// directory of `*.json` files holding one descriptor each. Directory
/// entries are read in file-name order.
pub fn load_type_descriptors(path: &Path) -> Result<Vec<TypeDescriptor>> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if !path.is_dir() {
        let content = fs::read_to_string(path).map_err(io_err)?;
        return serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(io_err)? {
        let file = entry.map_err(io_err)?.path();
        if file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();

    let mut types = Vec::with_capacity(files.len());
    for file in files {
        let content = fs::read_to_string(&file).map_err(|source| Error::Io {
            path: file.clone(),
            source,
        })?;
        let descriptor: TypeDescriptor =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: file.clone(),
                source,
            })?;
        types.push(descriptor);
    }
    debug!(count = types.len(), dir = ?path, "loaded type descriptors");
    Ok(types)
}

/// Convert type descriptors on disk into a JSON Schema file.
///
/// # Arguments
/// * `types_path` - JSON file or directory of type descriptors.
/// * `schema_path` - Where the pretty-printed schema is written.
/// * `primary_types` - Names enumerated in the top-level `anyOf`.
/// * `options` - Discriminator name, default primary type, etc.
pub fn convert_types_to_jsonschema<S: AsRef<str>>(
    types_path: &Path,
    schema_path: &Path,
    primary_types: &[S],
    options: &TransformOptions,
) -> Result<()> {
    let types = load_type_descriptors(types_path)?;
    let document = transform_types(types, primary_types, options)?;

    let mut text = serde_json::to_string_pretty(&document).map_err(|source| Error::Json {
        path: schema_path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    fs::write(schema_path, text).map_err(|source| Error::Io {
        path: schema_path.to_path_buf(),
        source,
    })
}
