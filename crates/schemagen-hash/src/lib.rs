//! schemagen Structural Hashing
//!
//! Merkle-style hashing of generic rooted trees and level-bounded
//! collapse of structurally identical subtrees.
//!
//! # Overview
//!
//! - **PolyHash**: rolling modular string hash with `join` for concatenation
//! - **Hashable**: capability a tree node exposes to the engine
//! - **compress_tree**: hashes every subtree and merges duplicates whose
//!   ancestor `level` steps up is shared
//!
//! # Example
//!
//! ```rust
//! use schemagen_hash::PolyHash;
//!
//! let mut hash = PolyHash::new();
//! let left = hash.calc("ab");
//! let right = hash.calc("cd");
//! assert_eq!(hash.join(left, right), hash.calc("abcd"));
//! ```

#![warn(missing_docs)]

pub mod hash;
pub mod tree;

// Re-exports
pub use hash::{add_mod, mul_mod, HashValue, PolyHash, BASE, MODULUS};
pub use tree::{compress_tree, level_powers, Hashable};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for structural hashing
    pub use crate::{compress_tree, HashValue, Hashable, PolyHash};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
