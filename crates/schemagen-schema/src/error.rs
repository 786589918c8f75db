//! Error types for schema wiring and reading
//!
//! - [`SchemaError`]: parsing schema documents and resolving inheritance
//! - [`ReaderError`]: loading schema and generator config files

use schemagen_ir::IrError;
use std::path::PathBuf;

/// Errors raised while wiring schemas together
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Schema map has no string `id`
    #[error("schema does not have an id")]
    SchemaWithoutId,

    /// `extends` is not a list of strings
    #[error("schema {schema}: extends should be a list of strings")]
    BadBaseList {
        /// Schema id
        schema: String,
    },

    /// `schema` key missing or not a map
    #[error("schema {schema} should have a map as a body")]
    SchemaWithoutBody {
        /// Schema id
        schema: String,
    },

    /// Schema body parses to something other than an object
    #[error("schema {schema} should be an object")]
    RootNotObject {
        /// Schema id
        schema: String,
    },

    /// Schema already defines the parent back-reference property
    #[error("schema {schema} cannot add property {parent}_id: property already exists")]
    ParentCollision {
        /// Schema id
        schema: String,
        /// Parent name
        parent: String,
    },

    /// Two schemas share an id
    #[error("multiple schemas with the same name: {name}")]
    DuplicateSchemaName {
        /// Conflicting name
        name: String,
    },

    /// `extends` names a schema that was not loaded
    #[error("schema {schema} extends unknown schema {base}")]
    UnknownBase {
        /// Schema id
        schema: String,
        /// Missing base id
        base: String,
    },

    /// Inheritance graph has a cycle through this schema
    #[error("schema {schema} is part of an inheritance cycle")]
    CyclicInheritance {
        /// Schema id
        schema: String,
    },

    /// Two bases contribute different properties with one name
    #[error("schema {schema} inherits property {name} from multiple bases")]
    AmbiguousInheritance {
        /// Schema id
        schema: String,
        /// Conflicting name
        name: String,
    },

    /// IR failure inside a schema
    #[error("invalid schema {schema}: {source}")]
    Ir {
        /// Schema id
        schema: String,
        /// Underlying error
        #[source]
        source: IrError,
    },
}

impl SchemaError {
    /// Wrap an IR error with the schema id
    pub fn ir(schema: impl Into<String>, source: IrError) -> Self {
        Self::Ir {
            schema: schema.into(),
            source,
        }
    }
}

/// Errors raised while reading files
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// File could not be read
    #[error("failed to open file {path}: {source}")]
    Io {
        /// File concerned
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid YAML
    #[error("cannot parse given schema from file {path}: {source}")]
    Yaml {
        /// File concerned
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },

    /// Document has no top-level `schemas` list
    #[error("no schemas found in file {path}")]
    NoSchemas {
        /// File concerned
        path: PathBuf,
    },

    /// Entry of the `schemas` list is not a map
    #[error("error in file {path}: schema should be a map")]
    BadSchema {
        /// File concerned
        path: PathBuf,
    },

    /// Entry of a config `schemas` list is not a path
    #[error("in config file {path} schemas should be filenames")]
    BadSchemaPath {
        /// File concerned
        path: PathBuf,
    },

    /// Generator config does not match the expected shape
    #[error("invalid generator config {path}: {source}")]
    Config {
        /// File concerned
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },
}

impl ReaderError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
