use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use log::debug;

use super::error::Error;
use common::types::WeightedEdge;

// Helper struct for record parsing
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: usize,
    destination: usize,
    weight: f64,
}

/// Reads the edge list of an instance file.
///
/// Each line holds one directed edge as three space-separated fields,
/// `source destination weight`. Exact duplicate triples are dropped before
/// the edges reach the solver; edges that share endpoints but not weight are
/// kept apart, since the triple is the edge's identity.
///
/// # Errors
/// Fails fast with path and line context on an unreadable file, a malformed
/// record, or a file with no edges at all; the solver never sees partial
/// data.
pub fn read_edges(path: &Path) -> Result<Vec<WeightedEdge>, Error> {
    let path_display = path.display().to_string();

    let file = File::open(path).map_err(|e| Error::Io {
        path: path_display.clone(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .trim(Trim::All)
        .from_reader(file);

    let mut edges: Vec<WeightedEdge> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;

        let record = result.map_err(|e| Error::MalformedRecord {
            path: path_display.clone(),
            line: fallback_line,
            detail: e.to_string(),
        })?;

        let line = record.position().map_or(fallback_line, |p| p.line());
        let parsed: EdgeRecord = record.deserialize(None).map_err(|_| Error::MalformedRecord {
            path: path_display.clone(),
            line,
            detail: format!(
                "expected `source destination weight`, got `{}`",
                record.iter().collect::<Vec<_>>().join(" ")
            ),
        })?;

        edges.push((parsed.source, parsed.destination, parsed.weight));
    }

    let before = edges.len();
    dedup_edges(&mut edges);
    if edges.len() < before {
        debug!(
            "{}: dropped {} duplicate edge records",
            path_display,
            before - edges.len()
        );
    }

    if edges.is_empty() {
        return Err(Error::EmptyInput { path: path_display });
    }

    Ok(edges)
}

/// Removes exact duplicate triples. Weights compare bitwise, so records that
/// differ only in weight both survive.
fn dedup_edges(edges: &mut Vec<WeightedEdge>) {
    edges.sort_by_key(|&(src, dst, weight)| (src, dst, weight.to_bits()));
    edges.dedup_by_key(|&mut (src, dst, weight)| (src, dst, weight.to_bits()));
}
