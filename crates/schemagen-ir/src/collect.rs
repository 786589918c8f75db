//! Level-bounded collectors
//!
//! Both walks take a `limit` (levels left to descend; negative means
//! unbounded) and an `offset` (levels to skip before results are recorded).
//! Objects count levels for [`collect_objects`](ItemRef::collect_objects),
//! properties count them for
//! [`collect_properties`](ItemRef::collect_properties); arrays are
//! transparent to both.
//!
//! Results are keyed by name. Meeting one node twice through shared
//! subtrees is fine, two distinct nodes with one name is an error.

use crate::error::IrError;
use crate::item::{duplicate_object, duplicate_property, Item, ItemRef, ObjectRef};
use crate::property::PropertyRef;
use schemagen_set::OrderedSet;

impl ItemRef {
    /// Objects at or below this item
    ///
    /// # Errors
    /// [`IrError::DuplicateObjectType`] when two distinct objects share a
    /// type name
    pub fn collect_objects(
        &self,
        limit: i32,
        offset: i32,
    ) -> Result<OrderedSet<ObjectRef>, IrError> {
        match &*self.borrow() {
            Item::Scalar(_) => Ok(OrderedSet::new()),
            Item::Array(array) => array.element().collect_objects(limit, offset),
            Item::Object(object) => {
                let mut result = OrderedSet::new();
                if limit == 0 {
                    return Ok(result);
                }
                if offset <= 0 {
                    result.insert(ObjectRef::from_item(self.clone()));
                }
                for property in object.properties() {
                    let nested = property.collect_objects(limit - 1, offset - 1)?;
                    result
                        .safe_insert_all(&nested)
                        .map_err(|err| duplicate_object(object.type_name(), err))?;
                }
                Ok(result)
            }
        }
    }

    /// Properties at or below this item
    ///
    /// # Errors
    /// [`IrError::DuplicatePropertyName`] when two distinct properties share
    /// a name
    pub fn collect_properties(
        &self,
        limit: i32,
        offset: i32,
    ) -> Result<OrderedSet<PropertyRef>, IrError> {
        match &*self.borrow() {
            Item::Scalar(_) => Ok(OrderedSet::new()),
            Item::Array(array) => array.element().collect_properties(limit, offset),
            Item::Object(object) => {
                let mut result = OrderedSet::new();
                for property in object.properties() {
                    let nested = property.collect_properties(limit, offset)?;
                    result
                        .safe_insert_all(&nested)
                        .map_err(|err| duplicate_property(object.type_name(), err))?;
                }
                Ok(result)
            }
        }
    }
}

impl PropertyRef {
    /// Objects held at or below this property
    ///
    /// # Errors
    /// See [`ItemRef::collect_objects`]
    pub fn collect_objects(
        &self,
        limit: i32,
        offset: i32,
    ) -> Result<OrderedSet<ObjectRef>, IrError> {
        self.item().collect_objects(limit, offset)
    }

    /// This property and the properties below it
    ///
    /// # Errors
    /// See [`ItemRef::collect_properties`]
    pub fn collect_properties(
        &self,
        limit: i32,
        offset: i32,
    ) -> Result<OrderedSet<PropertyRef>, IrError> {
        if limit == 0 {
            return Ok(OrderedSet::new());
        }
        let mut result = self.item().collect_properties(limit - 1, offset - 1)?;
        if offset <= 0 {
            result
                .safe_insert(self.clone())
                .map_err(|err| duplicate_property(&self.name(), err))?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::ParseContext;
    use crate::error::IrError;
    use crate::mark::COMMON;
    use crate::property::{PropertyKind, PropertyRef};
    use pretty_assertions::assert_eq;
    use schemagen_set::Element;
    use serde_yaml::Mapping;

    fn root(text: &str) -> PropertyRef {
        let data: Mapping = serde_yaml::from_str(text).unwrap();
        PropertyRef::parse("s", &ParseContext::new(&data).with_required(true)).unwrap()
    }

    fn property(root: &PropertyRef, name: &str) -> PropertyRef {
        root.item()
            .as_object()
            .unwrap()
            .properties()
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap()
    }

    fn element_type(property: &PropertyRef) -> String {
        property
            .item()
            .collect_objects(1, 0)
            .unwrap()
            .names()
            .remove(0)
    }

    const NESTED: &str = "
type: object
properties:
  owner:
    type: object
    properties:
      address:
        type: object
        properties:
          street: {type: string}
      name: {type: string}
  tag: {type: string}
";

    #[test]
    fn minimal_object() {
        let root = root("type: object\nproperties:\n  x: {type: string}\n");

        let objects = root.collect_objects(1, 0).unwrap();
        assert_eq!(objects.names(), vec!["s"]);

        let x = property(&root, "x");
        assert_eq!(x.kind(), PropertyKind::Top);
        assert!(x.item().is_null());
    }

    #[test]
    fn objects_by_level() {
        let root = root(NESTED);

        assert_eq!(root.collect_objects(1, 0).unwrap().names(), vec!["s"]);
        assert_eq!(
            root.collect_objects(-1, 0).unwrap().names(),
            vec!["s", "s_owner", "s_owner_address"]
        );
        assert_eq!(
            root.collect_objects(-1, 1).unwrap().names(),
            vec!["s_owner", "s_owner_address"]
        );
        assert!(root.collect_objects(0, 0).unwrap().is_empty());
    }

    #[test]
    fn properties_by_level() {
        let root = root(NESTED);

        assert_eq!(root.collect_properties(1, 0).unwrap().names(), vec!["s"]);
        assert_eq!(
            root.collect_properties(2, 1).unwrap().names(),
            vec!["owner", "tag"]
        );
        assert_eq!(
            root.collect_properties(-1, 0).unwrap().names(),
            vec!["address", "name", "owner", "s", "street", "tag"]
        );
    }

    #[test]
    fn duplicate_property_names_collide() {
        let root = root(
            "
type: object
properties:
  a:
    type: object
    properties:
      name: {type: string}
  b:
    type: object
    properties:
      name: {type: integer}
",
        );

        let err = root.collect_properties(-1, 0).unwrap_err();
        assert!(matches!(err, IrError::DuplicatePropertyName { name, .. } if name == "name"));
    }

    #[test]
    fn shared_subtree_counts_once() {
        let root = root(
            "
type: object
properties:
  a:
    type: array
    items:
      type: object
      properties:
        x: {type: string}
        y: {type: number}
  b:
    type: array
    items:
      type: object
      properties:
        x: {type: string}
        y: {type: number}
  c:
    type: array
    items:
      type: object
      properties:
        x: {type: string}
        y: {type: number}
  d:
    type: array
    items:
      type: object
      properties:
        x: {type: string}
        y: {type: string}
",
        );
        root.compress_subtree(2);

        let (a, b, c, d) = (
            property(&root, "a"),
            property(&root, "b"),
            property(&root, "c"),
            property(&root, "d"),
        );
        assert!(a.item().same(&b.item()));
        assert!(a.item().same(&c.item()));
        assert!(!a.item().same(&d.item()));

        let objects = root.collect_objects(-1, 0).unwrap();
        assert_eq!(objects.names(), vec!["s", "s_common", "s_d"]);
    }

    #[test]
    fn default_literal_inhibits_collapse() {
        let root = root(
            "
type: object
properties:
  a:
    type: object
    properties:
      x: {type: string, default: one}
  b:
    type: object
    properties:
      x: {type: string, default: two}
",
        );
        root.compress_subtree(2);

        assert!(!property(&root, "a").item().same(&property(&root, "b").item()));
        assert_eq!(
            root.collect_objects(-1, 1).unwrap().names(),
            vec!["s_a", "s_b"]
        );
    }

    #[test]
    fn nested_rename_is_stable() {
        let text = "
type: object
properties:
  p:
    type: array
    items:
      type: object
      properties:
        u:
          type: object
          properties:
            z: {type: string}
        v:
          type: object
          properties:
            z: {type: string}
  q:
    type: array
    items:
      type: object
      properties:
        u:
          type: object
          properties:
            z: {type: string}
        v:
          type: object
          properties:
            z: {type: string}
";
        let run = || {
            let root = root(text);
            root.compress_subtree(2);
            root.collect_objects(-1, 1).unwrap().names()
        };

        let names = run();
        assert_eq!(names, vec!["s_common", "s_common_common"]);
        assert!(names.iter().all(|name| name.ends_with(COMMON)));
        assert_eq!(run(), names);
    }

    #[test]
    fn renamed_element_keeps_own_property_marks() {
        let root = root(
            "
type: object
properties:
  p:
    type: array
    items:
      type: object
      properties:
        inner:
          type: object
          properties:
            z: {type: string}
  q:
    type: array
    items:
      type: object
      properties:
        inner:
          type: object
          properties:
            z: {type: string}
",
        );
        root.compress_subtree(2);

        let p = property(&root, "p");
        assert_eq!(element_type(&p), "s_common");
        let inner = p.item().collect_properties(1, 0).unwrap().get("inner").cloned().unwrap();
        assert_eq!(inner.mark().begin(), "s_common_".len());
        assert_eq!(
            root.collect_objects(-1, 1).unwrap().names(),
            vec!["s_common", "s_common_inner"]
        );
    }

    #[test]
    fn level_zero_leaves_tree_alone() {
        let root = root(
            "
type: object
properties:
  a: {type: object, properties: {x: {type: string}}}
  b: {type: object, properties: {x: {type: string}}}
",
        );
        root.compress_subtree(0);
        assert!(!property(&root, "a").item().same(&property(&root, "b").item()));
        assert!(property(&root, "a").same_element(&property(&root, "a")));
    }
}
