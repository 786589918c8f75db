//! Converter pipeline: schema maps to deduplicated object lists
//!
//! Parse → resolve inheritance → collect. Emission consumes [`Collected`].

use crate::error::SchemaError;
use crate::inheritance::resolve_inheritance;
use crate::schema::{parse_all, Schema};
use schemagen_ir::{IrError, ObjectRef};
use schemagen_set::{OrderedSet, SetError};
use tracing::info;

/// Objects ready for emission
#[derive(Debug, Clone, Default)]
pub struct Collected {
    top_level: OrderedSet<ObjectRef>,
    all: OrderedSet<ObjectRef>,
}

impl Collected {
    /// Root objects of the schemas to generate
    #[inline]
    #[must_use]
    pub fn top_level(&self) -> &OrderedSet<ObjectRef> {
        &self.top_level
    }

    /// Root objects plus every nested object
    #[inline]
    #[must_use]
    pub fn all(&self) -> &OrderedSet<ObjectRef> {
        &self.all
    }
}

/// Run the pipeline up to collection
///
/// `supplementary` schemas only serve as inheritance bases; objects are
/// collected from `to_generate` alone.
///
/// # Errors
/// Any parse, inheritance or collection error; a schema id present in both
/// sets is a [`SchemaError::DuplicateSchemaName`].
pub fn convert(
    supplementary: &[serde_yaml::Mapping],
    to_generate: &[serde_yaml::Mapping],
) -> Result<Collected, SchemaError> {
    let supplementary = parse_all(supplementary)?;
    let to_generate = parse_all(to_generate)?;

    let mut all = OrderedSet::new();
    for set in [&supplementary, &to_generate] {
        all.safe_insert_all(set).map_err(|err| {
            let SetError::DuplicateName { name } = err;
            SchemaError::DuplicateSchemaName { name }
        })?;
    }

    let joined = resolve_inheritance(&all, &to_generate)?;
    let collected = collect(&to_generate)?;

    info!(
        schemas = to_generate.len(),
        supplementary = supplementary.len(),
        joined = joined.len(),
        top_level = collected.top_level.len(),
        objects = collected.all.len(),
        "collected objects"
    );
    Ok(collected)
}

fn collect(schemas: &OrderedSet<Schema>) -> Result<Collected, SchemaError> {
    let mut top_level = OrderedSet::new();
    let mut nested = OrderedSet::new();
    for schema in schemas {
        top_level.insert_all(&schema.collect_objects(1, 0)?);
        nested
            .safe_insert_all(&schema.collect_objects(-1, 1)?)
            .map_err(|err| {
                let SetError::DuplicateName { name } = err;
                SchemaError::ir(
                    schema.id(),
                    IrError::DuplicateObjectType {
                        object: schema.id().to_string(),
                        name,
                    },
                )
            })?;
    }

    let mut all = top_level.clone();
    all.insert_all(&nested);
    Ok(Collected { top_level, all })
}
