//! Item IR
//!
//! [`Item`] is the sum type over the three node shapes a definition can
//! parse to. Items live behind [`ItemRef`] handles so that deduplicated
//! subtrees can be shared between several owning properties.

use crate::context::ParseContext;
use crate::error::IrError;
use crate::literal::Literal;
use crate::mark::Mark;
use crate::node::IrNode;
use crate::property::PropertyRef;
use crate::types::{classify_type, ScalarKind, TypeClass, TypeToken};
use schemagen_set::{Element, OrderedSet, SetError};
use serde_yaml::{Mapping, Value};
use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::trace;

/// Scalar leaf
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarItem {
    kind: ScalarKind,
    required: bool,
    nullable: bool,
    default: Option<Literal>,
}

impl ScalarItem {
    /// Create optional scalar without a default
    #[must_use]
    pub fn new(kind: ScalarKind, nullable: bool) -> Self {
        Self {
            kind,
            required: false,
            nullable,
            default: None,
        }
    }

    /// Set requiredness
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set default literal; a default makes the scalar required
    #[must_use]
    pub fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self.required = true;
        self
    }

    fn parse(kind: ScalarKind, nullable: bool, ctx: &ParseContext<'_>) -> Self {
        let default = ctx.defaults.and_then(Literal::from_value);
        let required = ctx.required || ctx.data.contains_key("default") || default.is_some();
        Self {
            kind,
            required,
            nullable,
            default,
        }
    }

    /// Canonical kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ScalarKind {
        &self.kind
    }

    /// Whether a value must be present
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the type union contained `null`
    #[inline]
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Default literal, if any
    #[inline]
    #[must_use]
    pub fn default_literal(&self) -> Option<&Literal> {
        self.default.as_ref()
    }

    /// Null-capable: nullable or optional
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.nullable || !self.required
    }

    fn fingerprint(&self) -> String {
        let default = self.default.as_ref().map(Literal::write).unwrap_or_default();
        format!("#{},{},{}", self.kind, self.is_null(), default)
    }
}

/// Sequence of one element item
#[derive(Debug, Clone)]
pub struct ArrayItem {
    element: ItemRef,
}

impl ArrayItem {
    /// Create array of `element`
    #[must_use]
    pub fn new(element: ItemRef) -> Self {
        Self { element }
    }

    /// Element item
    #[inline]
    #[must_use]
    pub fn element(&self) -> &ItemRef {
        &self.element
    }

    fn parse(ctx: &ParseContext<'_>) -> Result<Self, IrError> {
        let items = ctx
            .get("items")
            .and_then(Value::as_mapping)
            .ok_or_else(|| IrError::ArrayWithoutItems {
                path: ctx.prefix.to_string(),
            })?;
        let raw_type = items.get("type").ok_or_else(|| IrError::ItemsWithoutType {
            path: ctx.prefix.to_string(),
        })?;
        let class =
            classify_type(raw_type).ok_or_else(|| IrError::unsupported_type(ctx.prefix, raw_type))?;
        let element = ItemRef::parse(&ctx.with_data(items), class)?;
        Ok(Self { element })
    }
}

/// Named record of properties
#[derive(Debug, Clone)]
pub struct ObjectItem {
    type_name: String,
    properties: OrderedSet<PropertyRef>,
    required: BTreeSet<String>,
}

impl ObjectItem {
    /// Create empty object
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: OrderedSet::new(),
            required: BTreeSet::new(),
        }
    }

    /// Add property, replacing any with the same name
    #[must_use]
    pub fn with_property(mut self, property: PropertyRef) -> Self {
        self.properties.insert(property);
        self
    }

    /// Set names that inherited properties must be required under
    #[must_use]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Underscored type name
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Properties in name order
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &OrderedSet<PropertyRef> {
        &self.properties
    }

    /// Required names captured at the top level of a schema
    #[inline]
    #[must_use]
    pub fn required_names(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Check if the object has no properties
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn parse(ctx: &ParseContext<'_>) -> Result<Self, IrError> {
        let object = ctx.prefix;
        let required = parse_required(ctx.data).ok_or_else(|| IrError::BadRequired {
            object: object.to_string(),
        })?;
        let defaults = ctx.defaults.and_then(Value::as_mapping);

        let mut properties = OrderedSet::new();
        if let Some(raw) = ctx.get("properties") {
            let definitions = raw.as_mapping().ok_or_else(|| IrError::BadPropertiesShape {
                object: object.to_string(),
            })?;
            for (key, definition) in definitions {
                let name = key.as_str().ok_or_else(|| IrError::BadPropertyName {
                    object: object.to_string(),
                })?;
                let definition =
                    definition
                        .as_mapping()
                        .ok_or_else(|| IrError::BadPropertyDefinition {
                            object: object.to_string(),
                            property: name.to_string(),
                        })?;
                let child = ctx
                    .with_required(required.contains(name))
                    .with_data(definition)
                    .with_defaults(defaults.and_then(|map| map.get(name)));
                properties.insert(PropertyRef::parse(name, &child)?);
            }
        }

        Ok(Self {
            type_name: object.to_string(),
            properties,
            required: if ctx.level <= 1 { required } else { BTreeSet::new() },
        })
    }
}

/// `required` list of an object definition; `None` when malformed
fn parse_required(data: &Mapping) -> Option<BTreeSet<String>> {
    match data.get("required") {
        None => Some(BTreeSet::new()),
        Some(Value::Sequence(names)) => names
            .iter()
            .map(|name| name.as_str().map(str::to_string))
            .collect(),
        Some(_) => None,
    }
}

/// Node of the structural IR
#[derive(Debug, Clone)]
pub enum Item {
    /// Scalar leaf
    Scalar(ScalarItem),
    /// Array of one element type
    Array(ArrayItem),
    /// Object with named properties
    Object(ObjectItem),
}

impl Item {
    /// Local fingerprint used by structural hashing
    #[must_use]
    pub fn fingerprint(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.fingerprint(),
            Self::Array(_) => "#[]".to_string(),
            Self::Object(_) => "#*".to_string(),
        }
    }

    /// Null-capable; only scalars can be
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.is_null(),
            Self::Array(_) | Self::Object(_) => false,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "a plain item",
            Self::Array(_) => "an array",
            Self::Object(_) => "an object",
        }
    }
}

/// Shared handle to an [`Item`]
///
/// Cloning the handle shares the item; [`copy`](Self::copy) makes a new
/// node whose children are still shared.
#[derive(Debug, Clone)]
pub struct ItemRef(Rc<RefCell<Item>>);

impl ItemRef {
    /// Wrap an item
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self(Rc::new(RefCell::new(item)))
    }

    /// Parse a definition already classified as `class`
    ///
    /// # Errors
    /// Any parse error of the item or its descendants
    pub fn parse(ctx: &ParseContext<'_>, class: TypeClass) -> Result<Self, IrError> {
        let item = match class.token {
            TypeToken::Scalar(kind) => Item::Scalar(ScalarItem::parse(kind, class.nullable, ctx)),
            TypeToken::Array => Item::Array(ArrayItem::parse(ctx)?),
            TypeToken::Object => Item::Object(ObjectItem::parse(ctx)?),
        };
        Ok(Self::new(item))
    }

    /// Borrow the item
    #[inline]
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Item> {
        self.0.borrow()
    }

    /// Identity comparison
    #[inline]
    #[must_use]
    pub fn same(&self, other: &ItemRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Shallow structural clone with shared children
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::new(self.0.borrow().clone())
    }

    /// Object view of this item, if it is one
    #[must_use]
    pub fn as_object(&self) -> Option<ObjectRef> {
        self.is_object().then(|| ObjectRef::from_item(self.clone()))
    }

    /// Check if the item is an object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(&*self.0.borrow(), Item::Object(_))
    }

    /// Null-capable; only scalars can be
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.borrow().is_null()
    }

    /// Forbid null; only scalars change
    pub fn make_required(&self) {
        if let Item::Scalar(scalar) = &mut *self.0.borrow_mut() {
            scalar.required = true;
        }
    }

    /// True iff a descendant object carries at least one property
    #[must_use]
    pub fn contains_object(&self) -> bool {
        match &*self.0.borrow() {
            Item::Scalar(_) => false,
            Item::Array(array) => array.element.contains_object(),
            Item::Object(object) => !object.is_empty(),
        }
    }

    /// Local fingerprint used by structural hashing
    #[must_use]
    pub fn fingerprint(&self) -> String {
        self.0.borrow().fingerprint()
    }

    pub(crate) fn child_nodes(&self) -> Vec<IrNode> {
        match &*self.0.borrow() {
            Item::Scalar(_) => Vec::new(),
            Item::Array(array) => vec![IrNode::Item(array.element.clone())],
            Item::Object(object) => {
                object.properties.iter().cloned().map(IrNode::Property).collect()
            }
        }
    }

    /// Propagate a rename down the subtree
    ///
    /// Objects rename themselves through `mark`; when an object actually
    /// changed, its properties shift their own marks and pass the rename on.
    pub fn change_name(&self, mark: &mut Mark) {
        let next = match &mut *self.0.borrow_mut() {
            Item::Scalar(_) => return,
            Item::Array(array) => Descend::Element(array.element.clone()),
            Item::Object(object) => {
                let before = object.type_name.clone();
                if !mark.change(&mut object.type_name) {
                    return;
                }
                trace!(from = %before, to = %object.type_name, "renamed shared object");
                Descend::Properties(object.properties.to_vec())
            }
        };
        match next {
            Descend::Element(element) => element.change_name(mark),
            Descend::Properties(properties) => {
                for property in properties {
                    property.change_name(mark);
                }
            }
        }
    }

    /// Merge `properties` into this object
    ///
    /// Strict mode fails on any name collision. Otherwise existing
    /// properties win over the given ones. Afterwards, every merged property
    /// named in the object's required list is replaced by a required copy
    /// when it was null-capable.
    ///
    /// # Errors
    /// - [`IrError::CannotAddProperties`] for scalars and arrays
    /// - [`IrError::DuplicatePropertyName`] for a strict collision
    pub fn add_properties(
        &self,
        properties: &OrderedSet<PropertyRef>,
        strict: bool,
    ) -> Result<(), IrError> {
        let mut item = self.0.borrow_mut();
        let describe = item.describe();
        let Item::Object(object) = &mut *item else {
            return Err(IrError::CannotAddProperties {
                item: describe.to_string(),
            });
        };
        if properties.is_empty() {
            return Ok(());
        }

        let candidates = if strict {
            object
                .properties
                .safe_insert_all(properties)
                .map_err(|err| duplicate_property(&object.type_name, err))?;
            properties.to_vec()
        } else {
            let mut merged = properties.clone();
            merged.insert_all(&object.properties);
            object.properties = merged;
            object.properties.to_vec()
        };

        for property in candidates {
            if object.required.contains(&property.name()) {
                let copy = property.copy();
                if copy.make_required() {
                    object.properties.insert(copy);
                }
            }
        }
        Ok(())
    }

    /// Array compress: swap the element if it is `destination`
    pub(crate) fn replace_element(&self, source: &ItemRef, destination: &ItemRef) {
        if let Item::Array(array) = &mut *self.0.borrow_mut() {
            if array.element.same(destination) {
                array.element = source.clone();
            }
        }
    }

    /// Object compress: swap the property named like `destination`
    pub(crate) fn replace_property(&self, source: &PropertyRef, destination: &PropertyRef) {
        if let Item::Object(object) = &mut *self.0.borrow_mut() {
            if object.properties.contains(destination) {
                object.properties.remove(destination);
                object.properties.insert(source.clone());
            }
        }
    }
}

enum Descend {
    Element(ItemRef),
    Properties(Vec<PropertyRef>),
}

pub(crate) fn duplicate_property(object: &str, err: SetError) -> IrError {
    let SetError::DuplicateName { name } = err;
    IrError::DuplicatePropertyName {
        object: object.to_string(),
        name,
    }
}

pub(crate) fn duplicate_object(object: &str, err: SetError) -> IrError {
    let SetError::DuplicateName { name } = err;
    IrError::DuplicateObjectType {
        object: object.to_string(),
        name,
    }
}

/// Handle to an item known to be an object
///
/// Stored in sets keyed by type name.
#[derive(Debug, Clone)]
pub struct ObjectRef(ItemRef);

impl ObjectRef {
    /// Create a new object item
    #[must_use]
    pub fn new(object: ObjectItem) -> Self {
        Self(ItemRef::new(Item::Object(object)))
    }

    pub(crate) fn from_item(item: ItemRef) -> Self {
        Self(item)
    }

    /// Underlying item handle
    #[inline]
    #[must_use]
    pub fn item(&self) -> &ItemRef {
        &self.0
    }

    /// Underscored type name
    #[must_use]
    pub fn type_name(&self) -> String {
        self.with(|object| object.type_name.clone()).unwrap_or_default()
    }

    /// Properties in name order
    #[must_use]
    pub fn properties(&self) -> Vec<PropertyRef> {
        self.with(|object| object.properties.to_vec()).unwrap_or_default()
    }

    /// Check if the object has no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with(ObjectItem::is_empty).unwrap_or(true)
    }

    /// Required names captured at the top level of a schema
    #[must_use]
    pub fn required_names(&self) -> Vec<String> {
        self.with(|object| object.required.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn with<R>(&self, f: impl FnOnce(&ObjectItem) -> R) -> Option<R> {
        match &*self.0.borrow() {
            Item::Object(object) => Some(f(object)),
            Item::Scalar(_) | Item::Array(_) => None,
        }
    }
}

impl Element for ObjectRef {
    fn name(&self) -> String {
        self.type_name()
    }

    fn same_element(&self, other: &Self) -> bool {
        self.0.same(&other.0)
    }
}
