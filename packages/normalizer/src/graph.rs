//! Scene graph normalization pass
//!
//! Rewrites each node's `children` map: entries typed `noderef` are removed
//! and their target identifiers collected into a flat `nodesList`, in the
//! order the entries appeared. Inline children (meshes, primitives, lights,
//! anything without the `noderef` type) stay at their original slots.
//!
//! The rewrite is a rebuild: the old `children` map is scanned once into a
//! fresh map plus an ordered accumulator, then swapped in wholesale. Nothing
//! is deleted from a map while it is being iterated.

use crate::error::{NormalizeError, NormalizeResult};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Reserved `children` key that receives the extracted node identifiers.
const NODES_LIST_KEY: &str = "nodesList";

/// Advisory counters for one normalization run. Logged and shown to the
/// user; not part of the output contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Nodes seen in the graph, including ones without children.
    pub nodes_visited: usize,
    /// Nodes whose `children` map contained at least one reference entry.
    pub nodes_rewritten: usize,
    /// Reference entries that contributed an identifier to a `nodesList`.
    pub refs_extracted: usize,
}

/// Normalize the graph at `yasf.graph` inside `document`, in place.
///
/// Fails with [`NormalizeError::MissingStructure`] when `yasf` or
/// `yasf.graph` is absent or not an object. Every other shape oddity is
/// skipped unchanged: only object nodes with an object `children` value
/// are candidates for the rewrite.
pub fn normalize_graph(document: &mut Value) -> NormalizeResult<NormalizeStats> {
    let graph = graph_mut(document)?;
    let mut stats = NormalizeStats::default();

    for (node_id, node) in graph.iter_mut() {
        stats.nodes_visited += 1;

        let Some(children) = node.get_mut("children").and_then(Value::as_object_mut) else {
            continue;
        };

        if !has_reference_entries(children) {
            continue;
        }

        let refs = rewrite_children(children);
        stats.nodes_rewritten += 1;
        stats.refs_extracted += refs.len();
        debug!(node = %node_id, refs = refs.len(), "Rewrote node children");
    }

    info!(
        nodes = stats.nodes_visited,
        rewritten = stats.nodes_rewritten,
        refs = stats.refs_extracted,
        "Graph normalization complete"
    );

    Ok(stats)
}

/// Navigate to the graph object, failing on either missing level.
fn graph_mut(document: &mut Value) -> NormalizeResult<&mut Map<String, Value>> {
    let yasf = document
        .get_mut("yasf")
        .and_then(Value::as_object_mut)
        .ok_or(NormalizeError::missing_structure("yasf"))?;

    yasf.get_mut("graph")
        .and_then(Value::as_object_mut)
        .ok_or(NormalizeError::missing_structure("graph"))
}

fn is_reference(entry: &Value) -> bool {
    entry.get("type").and_then(Value::as_str) == Some("noderef")
}

fn has_reference_entries(children: &Map<String, Value>) -> bool {
    children.values().any(is_reference)
}

/// Rebuild a `children` map, splitting out reference entries.
///
/// Returns the extracted identifiers in scan order. A reference entry with
/// a missing, empty, or non-string `nodeId` is removed like any other but
/// contributes nothing to the list.
///
/// A pre-existing `nodesList` entry is carried over like any non-reference
/// entry, so the final insert overwrites its value at its original slot
/// (last write wins, no merge).
fn rewrite_children(children: &mut Map<String, Value>) -> Vec<String> {
    let mut kept = Map::new();
    let mut refs: Vec<String> = Vec::new();

    for (slot, entry) in std::mem::take(children) {
        if is_reference(&entry) {
            match entry.get("nodeId").and_then(Value::as_str) {
                Some(node_id) if !node_id.is_empty() => refs.push(node_id.to_string()),
                _ => debug!(slot = %slot, "Dropping reference entry without a nodeId"),
            }
        } else {
            kept.insert(slot, entry);
        }
    }

    if !refs.is_empty() {
        kept.insert(
            NODES_LIST_KEY.to_string(),
            Value::Array(refs.iter().cloned().map(Value::String).collect()),
        );
    }

    *children = kept;
    refs
}
