//! Hashing view of the IR
//!
//! Properties and items alternate along every path of the tree; [`IrNode`]
//! wraps either handle so the generic tree compressor can walk them.

use crate::item::ItemRef;
use crate::property::PropertyRef;
use schemagen_hash::Hashable;

/// Property or item handle
#[derive(Debug, Clone)]
pub enum IrNode {
    /// Named slot
    Property(PropertyRef),
    /// Scalar, array or object
    Item(ItemRef),
}

impl Hashable for IrNode {
    fn fingerprint(&self) -> String {
        match self {
            Self::Property(property) => property.name(),
            Self::Item(item) => item.fingerprint(),
        }
    }

    fn children(&self) -> Vec<Self> {
        match self {
            Self::Property(property) => vec![Self::Item(property.item())],
            Self::Item(item) => item.child_nodes(),
        }
    }

    fn compress(&self, source: &Self, destination: &Self) {
        match (self, source, destination) {
            (Self::Property(parent), Self::Item(source), Self::Item(destination)) => {
                parent.replace_item(source, destination);
            }
            (Self::Item(parent), Self::Item(source), Self::Item(destination)) => {
                parent.replace_element(source, destination);
            }
            (Self::Item(parent), Self::Property(source), Self::Property(destination)) => {
                parent.replace_property(source, destination);
            }
            _ => {}
        }
    }
}
