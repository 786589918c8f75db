//! Properties: named slots of objects

use crate::context::ParseContext;
use crate::error::IrError;
use crate::item::ItemRef;
use crate::mark::Mark;
use crate::names::{add_name, to_go_name};
use crate::node::IrNode;
use crate::types::classify_type;
use schemagen_hash::compress_tree;
use schemagen_set::{Element, OrderedSet};
use std::cell::RefCell;
use std::rc::Rc;

/// Depth class of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Root property or direct child of a schema root object
    Top,
    /// Anything deeper
    Nested,
}

impl PropertyKind {
    /// Kind for a property parsed at `level`
    #[inline]
    #[must_use]
    pub const fn from_level(level: usize) -> Self {
        if level <= 1 {
            Self::Top
        } else {
            Self::Nested
        }
    }
}

/// Named slot holding an item
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    item: ItemRef,
    kind: PropertyKind,
    has_default: bool,
    mark: Mark,
}

/// Shared handle to a [`Property`]
#[derive(Debug, Clone)]
pub struct PropertyRef(Rc<RefCell<Property>>);

impl PropertyRef {
    /// Create a property over an existing item
    #[must_use]
    pub fn new(name: impl Into<String>, item: ItemRef, kind: PropertyKind) -> Self {
        Self::from_property(Property {
            name: name.into(),
            item,
            kind,
            has_default: false,
            mark: Mark::default(),
        })
    }

    fn from_property(property: Property) -> Self {
        Self(Rc::new(RefCell::new(property)))
    }

    /// Parse the definition in `ctx.data` as property `name`
    ///
    /// The item is parsed one level deeper, under the prefix extended by
    /// `name`. A property whose Go name is `Id` is always required, and a
    /// `default` key in the definition overrides any inherited default.
    ///
    /// # Errors
    /// [`IrError::MissingType`], [`IrError::UnsupportedType`] or any error of
    /// the item parser
    pub fn parse(name: &str, ctx: &ParseContext<'_>) -> Result<Self, IrError> {
        let path = add_name(ctx.prefix, name);
        let raw_type = ctx
            .get("type")
            .ok_or_else(|| IrError::MissingType { path: path.clone() })?;
        let class = classify_type(raw_type)
            .ok_or_else(|| IrError::unsupported_type(&path, raw_type))?;

        let mut child = ctx.with_prefix(&path).with_level(ctx.level + 1);
        if to_go_name(name, "") == "Id" {
            child.required = true;
        }
        if let Some(default) = ctx.get("default") {
            child.defaults = Some(default);
        }
        let has_default = child.defaults.is_some_and(|value| !value.is_null());
        let item = ItemRef::parse(&child, class)?;

        Ok(Self::from_property(Property {
            name: name.to_string(),
            item,
            kind: PropertyKind::from_level(ctx.level),
            has_default,
            mark: Mark::new(add_name(ctx.prefix, "").len()),
        }))
    }

    /// Identity comparison
    #[inline]
    #[must_use]
    pub fn same(&self, other: &PropertyRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Property name
    #[must_use]
    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// Held item
    #[must_use]
    pub fn item(&self) -> ItemRef {
        self.0.borrow().item.clone()
    }

    /// Depth class
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.0.borrow().kind
    }

    /// Whether a non-null default was supplied
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.0.borrow().has_default
    }

    /// Rename mark of the held item
    #[must_use]
    pub fn mark(&self) -> Mark {
        self.0.borrow().mark
    }

    /// Check if the held item is an object
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.0.borrow().item.is_object()
    }

    /// New property struct sharing this one's item
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::from_property(self.0.borrow().clone())
    }

    /// Make the held item non-null
    ///
    /// A null-capable item is replaced by a required copy so other holders
    /// of the original are left untouched. Returns whether anything changed.
    pub fn make_required(&self) -> bool {
        let mut property = self.0.borrow_mut();
        if !property.item.is_null() {
            return false;
        }
        let item = property.item.copy();
        item.make_required();
        property.item = item;
        true
    }

    /// Follow a rename of an enclosing object
    pub fn change_name(&self, mark: &mut Mark) {
        let item = {
            let mut property = self.0.borrow_mut();
            property.mark.update(mark);
            property.item.clone()
        };
        item.change_name(mark);
    }

    /// Merge properties into the held item
    ///
    /// # Errors
    /// See [`ItemRef::add_properties`]
    pub fn add_properties(
        &self,
        properties: &OrderedSet<PropertyRef>,
        strict: bool,
    ) -> Result<(), IrError> {
        self.item().add_properties(properties, strict)
    }

    /// Deduplicate structurally equal subtrees below this property
    pub fn compress_subtree(&self, level: usize) {
        compress_tree(&IrNode::Property(self.clone()), level);
    }

    /// Swap `destination` for `source` and rename the survivor through this
    /// property's mark
    pub(crate) fn replace_item(&self, source: &ItemRef, destination: &ItemRef) {
        let mut mark = {
            let mut property = self.0.borrow_mut();
            if !property.item.same(destination) {
                return;
            }
            property.item = source.clone();
            property.mark
        };
        source.change_name(&mut mark);
        self.0.borrow_mut().mark = mark;
    }
}

impl Element for PropertyRef {
    fn name(&self) -> String {
        PropertyRef::name(self)
    }

    fn same_element(&self, other: &Self) -> bool {
        self.same(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ScalarItem};
    use crate::types::ScalarKind;
    use serde_yaml::Mapping;

    fn mapping(text: &str) -> Mapping {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn kind_by_level() {
        assert_eq!(PropertyKind::from_level(0), PropertyKind::Top);
        assert_eq!(PropertyKind::from_level(1), PropertyKind::Top);
        assert_eq!(PropertyKind::from_level(2), PropertyKind::Nested);
    }

    #[test]
    fn missing_type_reports_path() {
        let data = mapping("default: 1");
        let err = PropertyRef::parse("port", &ParseContext::new(&data).with_prefix("net")).unwrap_err();
        assert_eq!(err, IrError::MissingType { path: "net_port".into() });
    }

    #[test]
    fn unsupported_type_reports_path() {
        let data = mapping("type: 12");
        let err = PropertyRef::parse("port", &ParseContext::new(&data)).unwrap_err();
        assert!(matches!(err, IrError::UnsupportedType { path, .. } if path == "port"));
    }

    #[test]
    fn id_is_always_required() {
        let data = mapping("type: string");
        let property = PropertyRef::parse("id", &ParseContext::new(&data).with_level(1)).unwrap();

        assert!(!property.item().is_null());
        assert_eq!(property.kind(), PropertyKind::Top);
    }

    #[test]
    fn mark_starts_after_prefix() {
        let data = mapping("type: string");
        let top = PropertyRef::parse("a", &ParseContext::new(&data)).unwrap();
        let nested = PropertyRef::parse("b", &ParseContext::new(&data).with_prefix("pet")).unwrap();

        assert_eq!(top.mark().begin(), 0);
        assert_eq!(nested.mark().begin(), 4);
    }

    #[test]
    fn null_default_is_not_a_default() {
        let data = mapping("type: string\ndefault: null");
        let property = PropertyRef::parse("a", &ParseContext::new(&data)).unwrap();
        assert!(!property.has_default());

        let data = mapping("type: string\ndefault: x");
        let property = PropertyRef::parse("a", &ParseContext::new(&data)).unwrap();
        assert!(property.has_default());
    }

    #[test]
    fn make_required_copies_item() {
        let item = ItemRef::new(Item::Scalar(ScalarItem::new(ScalarKind::Int, false)));
        let property = PropertyRef::new("count", item.clone(), PropertyKind::Top);

        assert!(property.make_required());
        assert!(!property.item().same(&item));
        assert!(item.is_null());
        assert!(!property.item().is_null());
        assert!(!property.make_required());
    }

    #[test]
    fn copy_shares_item() {
        let item = ItemRef::new(Item::Scalar(ScalarItem::new(ScalarKind::Int, false)));
        let property = PropertyRef::new("count", item, PropertyKind::Top);
        let copy = property.copy();

        assert!(!copy.same(&property));
        assert!(copy.item().same(&property.item()));
        assert!(!copy.same_element(&property));
    }
}
