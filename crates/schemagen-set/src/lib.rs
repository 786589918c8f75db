//! schemagen Symbol Sets
//!
//! Name-keyed collections used throughout the generator.
//!
//! # Overview
//!
//! The set crate provides:
//! - **Element**: capability of anything that can live in a set (a name plus identity)
//! - **OrderedSet**: name-keyed set with overwrite and safe insertion, enumerated by name
//!
//! Enumeration order never depends on insertion order, which keeps generated
//! output and subtree hashes stable from run to run.
//!
//! # Example
//!
//! ```rust
//! use schemagen_set::{Element, OrderedSet};
//! use std::rc::Rc;
//!
//! #[derive(Debug, Clone)]
//! struct Field(Rc<str>);
//!
//! impl Element for Field {
//!     fn name(&self) -> String {
//!         self.0.to_string()
//!     }
//!
//!     fn same_element(&self, other: &Self) -> bool {
//!         Rc::ptr_eq(&self.0, &other.0)
//!     }
//! }
//!
//! let mut set = OrderedSet::new();
//! let b = Field(Rc::from("b"));
//! set.insert(b.clone());
//! set.insert(Field(Rc::from("a")));
//!
//! // Re-inserting the very same element is fine
//! set.safe_insert(b).unwrap();
//! // A different element under an existing name is not
//! assert!(set.safe_insert(Field(Rc::from("a"))).is_err());
//!
//! assert_eq!(set.names(), vec!["a".to_string(), "b".to_string()]);
//! ```

#![warn(missing_docs)]

pub mod element;
pub mod set;

// Re-exports
pub use element::Element;
pub use set::{OrderedSet, SetError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for set operations
    pub use crate::{Element, OrderedSet, SetError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
