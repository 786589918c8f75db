//! schemagen Schema Layer
//!
//! Wires raw schema maps into the IR and prepares them for emission.
//!
//! # Overview
//!
//! - **Schema**: one resource; root property named after the schema id,
//!   optional parent back-reference, list of base schemas
//! - **Inheritance**: bases are joined into the schemas extending them,
//!   deepest ancestors first
//! - **Converter**: parse → resolve → collect, producing [`Collected`]
//! - **Reader**: schema files and config files listing them
//!
//! # Example
//!
//! ```rust
//! use schemagen_schema::convert;
//!
//! let schemas: Vec<serde_yaml::Mapping> = vec![
//!     serde_yaml::from_str("id: base\nschema: {type: object, properties: {name: {type: string}}}").unwrap(),
//!     serde_yaml::from_str("id: pet\nextends: [base]\nschema: {type: object}").unwrap(),
//! ];
//!
//! let collected = convert(&[], &schemas).unwrap();
//! let pet = collected.top_level().get("pet").unwrap();
//! assert_eq!(pet.properties()[0].name(), "name");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod converter;
pub mod error;
pub mod inheritance;
pub mod reader;
pub mod schema;

// Re-exports
pub use config::GeneratorConfig;
pub use converter::{convert, Collected};
pub use error::{ReaderError, SchemaError};
pub use inheritance::resolve_inheritance;
pub use reader::{read_all, read_single, SkipPolicy};
pub use schema::{parse_all, Schema};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for schema operations
    pub use crate::{convert, Collected, GeneratorConfig, Schema, SchemaError, SkipPolicy};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
