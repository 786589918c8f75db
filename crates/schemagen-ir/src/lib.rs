//! schemagen Intermediate Representation
//!
//! Tree of typed nodes parsed from raw schema maps.
//!
//! # Overview
//!
//! - **Item**: sum type over scalar, array and object nodes
//! - **Property**: named wrapper around an item, carrying its emission kind
//!   and rename mark
//! - **Mark**: rewrites deduplicated object type names to a `common` form
//! - **Collectors**: level-bounded walks enumerating objects and properties
//!
//! Nodes are reference-counted handles. After structural deduplication one
//! object subtree may be referenced from several properties.
//!
//! # Example
//!
//! ```rust
//! use schemagen_ir::{ParseContext, PropertyRef};
//!
//! let data: serde_yaml::Mapping = serde_yaml::from_str(
//!     "type: object\nproperties:\n  name:\n    type: string\n",
//! ).unwrap();
//!
//! let root = PropertyRef::parse("pet", &ParseContext::new(&data).with_required(true)).unwrap();
//!
//! let objects = root.collect_objects(1, 0).unwrap();
//! assert_eq!(objects.names(), vec!["pet".to_string()]);
//! ```

#![warn(missing_docs)]

pub mod collect;
pub mod context;
pub mod error;
pub mod item;
pub mod literal;
pub mod mark;
pub mod names;
pub mod node;
pub mod property;
pub mod types;

// Re-exports
pub use context::ParseContext;
pub use error::IrError;
pub use item::{ArrayItem, Item, ItemRef, ObjectItem, ObjectRef, ScalarItem};
pub use literal::Literal;
pub use mark::Mark;
pub use names::{add_name, to_go_name, try_add_name, variable_name};
pub use node::IrNode;
pub use property::{Property, PropertyKind, PropertyRef};
pub use types::{classify_type, ScalarKind, TypeClass, TypeToken};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for IR operations
    pub use crate::{
        IrError, Item, ItemRef, Literal, ObjectRef, ParseContext, PropertyKind, PropertyRef,
        ScalarKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
