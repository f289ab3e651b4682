//! # typed-jsonschema
//!
//! Turn a compact description of a tagged-union type hierarchy into a
//! [JSON Schema](https://json-schema.org/) (draft-06) document.
//!
//! ## Features
//!
//! - Records with named, typed properties and a required/optional flag
//! - Single-parent inheritance, emitted as `allOf` over `Extendable.<Base>`
//! - Abstract bases, referenced as the union of their concrete descendants
//!   (`ImplementationsOf.<Base>`)
//! - Property type expressions: primitives, `uri`, type references,
//!   `A|B` unions, `X[]` arrays and `Dictionary<X>` maps
//! - An injected discriminator property (`type` by default) on every type
//! - CLI tool `types2jsonschema` for converting files on disk
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use typed_jsonschema::converter::{transform_types, TransformOptions};
//! use typed_jsonschema::descriptor::TypeDescriptor;
//!
//! let types: Vec<TypeDescriptor> = serde_json::from_value(json!([
//!     {
//!         "type": "AdaptiveCard",
//!         "description": "An Adaptive Card.",
//!         "properties": {
//!             "version": { "type": "string", "required": true }
//!         }
//!     }
//! ]))
//! .unwrap();
//!
//! let schema = transform_types(types, &["AdaptiveCard"], &TransformOptions::default()).unwrap();
//! assert_eq!(schema["definitions"]["AdaptiveCard"]["required"], json!(["version"]));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! types2jsonschema types.json schema.json --primary AdaptiveCard
//! ```
//!
//! `types.json` may also be a directory holding one type per `.json` file.
//!
//! ## Crate Layout
//!
//! - [`descriptor`] — Authored type and property descriptors (`TypeDescriptor`, `PropertyDescriptor`)
//! - [`index`] — Name-keyed index with parent and descendant lookups
//! - [`converter`] — Type descriptors → JSON Schema conversion logic
//! - [`common`] — Synthetic names and `$ref` traversal helpers
//! - [`error`] — The crate's error type
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod common;
pub mod converter;
pub mod descriptor;
pub mod error;
pub mod index;

pub use error::{Error, Result};
