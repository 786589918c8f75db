//! schemagen Go Emission
//!
//! Renders collected objects as Go sources for the goext runtime.
//!
//! # Overview
//!
//! - **Items and properties**: Go types, struct tags, accessor bodies and
//!   constructor entries; null-capable scalars use the runtime `Maybe`
//!   wrappers
//! - **Objects**: structs, raw and mutable interfaces, accessor methods,
//!   constructors
//! - **CRUD**: typed fetch and list wrappers for top-level objects
//! - **Names**: schema id constants
//! - **Files**: chunks grouped per destination file and package
//!
//! # Example
//!
//! ```rust
//! use schemagen_emit::generate;
//! use schemagen_schema::{convert, GeneratorConfig};
//!
//! let schemas: Vec<serde_yaml::Mapping> = vec![serde_yaml::from_str(
//!     "id: pet\nschema: {type: object, properties: {name: {type: string}}}",
//! ).unwrap()];
//!
//! let collected = convert(&[], &schemas).unwrap();
//! let config = GeneratorConfig::new().with_raw_suffix("");
//! let generated = generate(&collected, &config);
//!
//! assert_eq!(
//!     generated.structs,
//!     vec!["type Pet struct {\n\tName goext.MaybeString `db:\"name\" json:\"name,omitempty\"`\n}\n"],
//! );
//! ```

#![warn(missing_docs)]

pub mod crud;
pub mod error;
pub mod generated;
pub mod item;
pub mod names;
pub mod object;
pub mod property;

// Re-exports
pub use crud::{render_fetch, render_list, CrudParams};
pub use error::EmitError;
pub use generated::{collect_data, generate, write_files, Generated, GeneratedFile};
pub use item::{GoItem, ObjectNames};
pub use names::{const_block, render_schema_name};
pub use object::{
    render_constructor, render_implementation, render_interface, render_mutable_interface,
    render_struct,
};
pub use property::GoProperty;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for emission
    pub use crate::{generate, write_files, EmitError, Generated, GeneratedFile, GoItem, GoProperty};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
