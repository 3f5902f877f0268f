//! Scene document round trip
//!
//! Documents stay untyped (`serde_json::Value`) so every field the pass does
//! not touch survives the rewrite unchanged, key order included. Output is
//! rendered fully in memory before any byte reaches the output path: a run
//! that fails never leaves a partial file behind.

use crate::error::NormalizeResult;
use crate::graph::{normalize_graph, NormalizeStats};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read and parse a scene document.
pub fn load_document(path: &Path) -> NormalizeResult<Value> {
    let source = fs::read_to_string(path)?;
    let document = serde_json::from_str(&source)?;
    Ok(document)
}

/// Render a document with stable 4-space indentation and a trailing newline.
pub fn to_pretty_json(document: &Value) -> NormalizeResult<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    out.push(b'\n');

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8(out).expect("serialized JSON is valid UTF-8"))
}

/// Render `document` and write it to `path` in a single call.
pub fn write_document(path: &Path, document: &Value) -> NormalizeResult<()> {
    let rendered = to_pretty_json(document)?;
    fs::write(path, rendered)?;
    Ok(())
}

/// Full pipeline: load `input`, normalize its graph, write to `output`.
///
/// This is the entire program. Any failure aborts before the output file
/// is created.
pub fn normalize_file(input: &Path, output: &Path) -> NormalizeResult<NormalizeStats> {
    info!(input = %input.display(), "Processing scene document");

    let mut document = load_document(input)?;
    let stats = normalize_graph(&mut document)?;
    write_document(output, &document)?;

    info!(
        output = %output.display(),
        nodes = stats.nodes_visited,
        refs = stats.refs_extracted,
        "Wrote normalized scene document"
    );

    Ok(stats)
}
