use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a transform.
///
/// All of these are input or configuration problems detected eagerly.
/// There is no partial output: a run either yields a complete document
/// or one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("type `{0}` is declared more than once")]
    DuplicateTypeName(String),

    #[error("unknown type `{name}` referenced by {referenced_by}")]
    UnknownType { name: String, referenced_by: String },

    #[error("type expression `{expression}`: `{token}` is neither a primitive nor a declared type")]
    UnresolvedTypeReference { expression: String, token: String },

    #[error("type expression `{expression}` is malformed: {reason}")]
    MalformedTypeExpression { expression: String, reason: String },

    #[error("invalid primary type `{name}`: {reason}")]
    InvalidPrimaryType { name: String, reason: String },

    #[error("type `{type_name}` declares property `{property}`, which is also the discriminator name")]
    DiscriminatorNameCollision { type_name: String, property: String },

    #[error("type name `{0}` uses a reserved prefix (`Extendable.` or `ImplementationsOf.`)")]
    ReservedTypeName(String),

    #[error("inheritance cycle: {}", .0.join(" -> "))]
    InheritanceCycle(Vec<String>),

    #[error("generated document references `{0}`, which has no definition")]
    DanglingReference(String),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
