//! Board description loading.
//!
//! Format: a header line `<nodes> <edges>`, then `nodes` station lines, then
//! `edges` lines of `<a> <b> <mode>`. Mode names are case-insensitive.
//! Repeated edges between a pair accumulate modes. Blank lines use up a
//! slot but are otherwise ignored.

use std::fs;
use std::path::Path;

use crate::board::{Station, StationGraph, StationGraphBuilder, Transport};

/// Errors that can occur while reading a board description.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("board description is empty")]
    Empty,

    #[error("malformed header: '{0}'")]
    BadHeader(String),

    #[error("expected {expected} lines after header, found {found}")]
    MissingLines { expected: usize, found: usize },

    #[error("line {line}: malformed station '{text}'")]
    BadStation { line: usize, text: String },

    #[error("line {line}: duplicate station {station}")]
    DuplicateStation { line: usize, station: Station },

    #[error("line {line}: malformed edge '{text}'")]
    BadEdge { line: usize, text: String },

    #[error("line {line}: unknown transport mode '{mode}'")]
    UnknownMode { line: usize, mode: String },

    #[error("line {line}: edge references undeclared station {station}")]
    UndeclaredStation { line: usize, station: Station },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parses a board description.
pub fn parse_graph(content: &str) -> Result<StationGraph, GraphError> {
    let lines: Vec<&str> = content.lines().collect();
    let header = lines.first().ok_or(GraphError::Empty)?;
    let (nodes, edges) = parse_header(header)?;

    let total = nodes
        .checked_add(edges)
        .ok_or_else(|| GraphError::BadHeader(header.to_string()))?;

    let body = &lines[1..];
    if body.len() < total {
        return Err(GraphError::MissingLines {
            expected: total,
            found: body.len(),
        });
    }

    let mut builder = StationGraphBuilder::new();
    for (i, raw) in body[..nodes].iter().enumerate() {
        let line = i + 2;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let station: Station = text.parse().map_err(|_| GraphError::BadStation {
            line,
            text: text.to_string(),
        })?;
        if !builder.add_station(station) {
            return Err(GraphError::DuplicateStation { line, station });
        }
    }

    for (i, raw) in body[nodes..total].iter().enumerate() {
        let line = i + nodes + 2;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let (a, b, mode) = parse_edge(line, text)?;
        if !builder.add_edge(a, b, mode) {
            let station = if builder.contains(a) { b } else { a };
            return Err(GraphError::UndeclaredStation { line, station });
        }
    }

    Ok(builder.build())
}

/// Reads and parses a board description from disk.
pub fn load_graph(path: impl AsRef<Path>) -> Result<StationGraph, GraphError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_graph(&content)
}

fn parse_header(header: &str) -> Result<(usize, usize), GraphError> {
    let bad = || GraphError::BadHeader(header.to_string());
    let mut parts = header.split_whitespace();
    let nodes = parts.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    let edges = parts.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((nodes, edges))
}

fn parse_edge(line: usize, text: &str) -> Result<(Station, Station, Transport), GraphError> {
    let bad = || GraphError::BadEdge {
        line,
        text: text.to_string(),
    };
    let parts: Vec<&str> = text.split_whitespace().collect();
    let [a, b, mode] = parts.as_slice() else {
        return Err(bad());
    };
    let a: Station = a.parse().map_err(|_| bad())?;
    let b: Station = b.parse().map_err(|_| bad())?;
    let mode = Transport::from_name(mode).ok_or_else(|| GraphError::UnknownMode {
        line,
        mode: mode.to_string(),
    })?;
    Ok((a, b, mode))
}
