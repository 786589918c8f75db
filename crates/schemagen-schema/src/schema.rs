//! Schema: one resource definition wired into the IR

use crate::error::SchemaError;
use schemagen_ir::{add_name, IrError, ObjectRef, ParseContext, PropertyRef};
use schemagen_set::{Element, OrderedSet, SetError};
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Parsed schema
///
/// The root property is named after the schema id and always holds an
/// object. Clones share the IR tree.
#[derive(Debug, Clone)]
pub struct Schema {
    id: String,
    parent: Option<String>,
    extends: Vec<String>,
    root: PropertyRef,
}

impl Schema {
    /// Parse a schema map
    ///
    /// Adds the `<parent>_id` back-reference when a parent is named, then
    /// deduplicates structurally equal subtrees of the body.
    ///
    /// # Errors
    /// - [`SchemaError::SchemaWithoutId`], [`SchemaError::BadBaseList`],
    ///   [`SchemaError::SchemaWithoutBody`] for a malformed map
    /// - [`SchemaError::RootNotObject`] when the body is not an object
    /// - [`SchemaError::ParentCollision`] when the back-reference exists
    /// - [`SchemaError::Ir`] for any error inside the body
    pub fn parse(data: &Mapping) -> Result<Self, SchemaError> {
        let id = data
            .get("id")
            .and_then(Value::as_str)
            .ok_or(SchemaError::SchemaWithoutId)?
            .to_string();
        let parent = data.get("parent").and_then(Value::as_str).map(str::to_string);
        let extends = parse_bases(&id, data.get("extends"))?;

        let body = data
            .get("schema")
            .and_then(Value::as_mapping)
            .ok_or_else(|| SchemaError::SchemaWithoutBody { schema: id.clone() })?;
        let empty_body;
        let body = if body.is_empty() {
            empty_body = object_definition();
            &empty_body
        } else {
            body
        };

        let root = PropertyRef::parse(&id, &ParseContext::new(body).with_required(true))
            .map_err(|err| SchemaError::ir(&id, err))?;
        if !root.is_object() {
            return Err(SchemaError::RootNotObject { schema: id });
        }

        let schema = Self {
            id,
            parent,
            extends,
            root,
        };
        schema.add_parent()?;
        schema.root.compress_subtree(2);

        debug!(
            schema = %schema.id,
            parent = ?schema.parent,
            extends = ?schema.extends,
            "parsed schema"
        );
        Ok(schema)
    }

    fn add_parent(&self) -> Result<(), SchemaError> {
        let Some(parent) = &self.parent else {
            return Ok(());
        };
        let definition = string_definition();
        let property = PropertyRef::parse(
            &add_name(parent, "id"),
            &ParseContext::new(&definition).with_required(true),
        )
        .map_err(|err| SchemaError::ir(&self.id, err))?;

        let properties: OrderedSet<_> = [property].into_iter().collect();
        self.root
            .add_properties(&properties, true)
            .map_err(|err| match err {
                IrError::DuplicatePropertyName { .. } => SchemaError::ParentCollision {
                    schema: self.id.clone(),
                    parent: parent.clone(),
                },
                other => SchemaError::ir(&self.id, other),
            })
    }

    /// Schema id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parent schema id, if any
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Ids of base schemas
    #[inline]
    #[must_use]
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// Root property
    #[inline]
    #[must_use]
    pub fn root(&self) -> &PropertyRef {
        &self.root
    }

    /// Merge the top-level properties of `bases` into this schema
    ///
    /// Bases must already be joined with their own bases. Own properties
    /// win over inherited ones.
    ///
    /// # Errors
    /// - [`SchemaError::AmbiguousInheritance`] when two bases contribute
    ///   distinct properties with one name
    /// - [`SchemaError::Ir`] for failures while collecting or merging
    pub fn join(&self, bases: &[Schema]) -> Result<(), SchemaError> {
        let mut inherited = OrderedSet::new();
        for base in bases {
            let properties = base
                .root
                .collect_properties(2, 1)
                .map_err(|err| SchemaError::ir(&base.id, err))?;
            inherited.safe_insert_all(&properties).map_err(|err| {
                let SetError::DuplicateName { name } = err;
                SchemaError::AmbiguousInheritance {
                    schema: self.id.clone(),
                    name,
                }
            })?;
        }
        self.root
            .add_properties(&inherited, false)
            .map_err(|err| SchemaError::ir(&self.id, err))?;

        debug!(
            schema = %self.id,
            bases = ?bases.iter().map(Schema::id).collect::<Vec<_>>(),
            inherited = inherited.len(),
            "joined base schemas"
        );
        Ok(())
    }

    /// Objects of this schema
    ///
    /// # Errors
    /// [`SchemaError::Ir`] wrapping a duplicate object type
    pub fn collect_objects(
        &self,
        limit: i32,
        offset: i32,
    ) -> Result<OrderedSet<ObjectRef>, SchemaError> {
        self.root
            .collect_objects(limit, offset)
            .map_err(|err| SchemaError::ir(&self.id, err))
    }
}

impl Element for Schema {
    fn name(&self) -> String {
        self.id.clone()
    }

    fn same_element(&self, other: &Self) -> bool {
        self.root.same(&other.root)
    }
}

fn parse_bases(id: &str, raw: Option<&Value>) -> Result<Vec<String>, SchemaError> {
    let bad = || SchemaError::BadBaseList {
        schema: id.to_string(),
    };
    match raw {
        None => Ok(Vec::new()),
        Some(Value::Sequence(bases)) => bases
            .iter()
            .map(|base| base.as_str().map(str::to_string).ok_or_else(bad))
            .collect(),
        Some(_) => Err(bad()),
    }
}

fn definition(kind: &str) -> Mapping {
    let mut map = Mapping::new();
    map.insert(Value::from("type"), Value::from(kind));
    map
}

fn object_definition() -> Mapping {
    definition("object")
}

fn string_definition() -> Mapping {
    definition("string")
}

/// Parse every schema map
///
/// # Errors
/// [`SchemaError::DuplicateSchemaName`] for a repeated id, or any error of
/// [`Schema::parse`]
pub fn parse_all(data: &[Mapping]) -> Result<OrderedSet<Schema>, SchemaError> {
    let mut result = OrderedSet::new();
    for map in data {
        let schema = Schema::parse(map)?;
        result.safe_insert(schema).map_err(|err| {
            let SetError::DuplicateName { name } = err;
            SchemaError::DuplicateSchemaName { name }
        })?;
    }
    Ok(result)
}
