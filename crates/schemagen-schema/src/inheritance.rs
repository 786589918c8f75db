//! Inheritance resolver
//!
//! Builds the `extends` graph reachable from the schemas to generate,
//! orders it so every base comes before the schemas extending it, and joins
//! each schema with its bases in that order. Grandparent properties thereby
//! reach a schema through its parent.

use crate::error::SchemaError;
use crate::schema::Schema;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use schemagen_set::OrderedSet;
use std::collections::BTreeMap;
use tracing::debug;

/// Join every schema reachable from `roots` with its bases
///
/// `all` must contain `roots` as well as every schema they may extend.
/// Returns the schemas in join order, bases first.
///
/// # Errors
/// - [`SchemaError::UnknownBase`] when a reachable schema extends an id
///   missing from `all`
/// - [`SchemaError::CyclicInheritance`] when the reachable graph has a cycle
/// - any error of [`Schema::join`]
pub fn resolve_inheritance(
    all: &OrderedSet<Schema>,
    roots: &OrderedSet<Schema>,
) -> Result<Vec<Schema>, SchemaError> {
    let graph = build_graph(all, roots)?;
    let order = toposort(&graph, None).map_err(|cycle| SchemaError::CyclicInheritance {
        schema: graph[cycle.node_id()].id().to_string(),
    })?;

    let mut joined = Vec::with_capacity(order.len());
    for index in order {
        let schema = &graph[index];
        let bases: Vec<Schema> = schema
            .extends()
            .iter()
            .filter_map(|base| all.get(base).cloned())
            .collect();
        if !bases.is_empty() {
            schema.join(&bases)?;
        }
        joined.push(schema.clone());
    }

    debug!(
        order = ?joined.iter().map(Schema::id).collect::<Vec<_>>(),
        "resolved inheritance"
    );
    Ok(joined)
}

/// Graph with an edge from each base to every schema extending it
fn build_graph(
    all: &OrderedSet<Schema>,
    roots: &OrderedSet<Schema>,
) -> Result<DiGraph<Schema, ()>, SchemaError> {
    let mut graph = DiGraph::new();
    let mut indices: BTreeMap<String, NodeIndex> = BTreeMap::new();
    let mut pending: Vec<Schema> = roots.iter().rev().cloned().collect();

    while let Some(schema) = pending.pop() {
        if indices.contains_key(schema.id()) {
            continue;
        }
        for base in schema.extends().iter().rev() {
            let found = all.get(base).ok_or_else(|| SchemaError::UnknownBase {
                schema: schema.id().to_string(),
                base: base.clone(),
            })?;
            pending.push(found.clone());
        }
        indices.insert(schema.id().to_string(), graph.add_node(schema));
    }

    for &child in indices.values() {
        let bases = graph[child].extends().to_vec();
        for base in bases {
            if let Some(&parent) = indices.get(&base) {
                graph.add_edge(parent, child, ());
            }
        }
    }
    Ok(graph)
}
