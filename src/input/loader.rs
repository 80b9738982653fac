// src/input/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::errors::Result;
use crate::input::parser::{ParsedInput, parse_steps};

/// Read and parse an input file.
///
/// Unreadable files are errors; unparseable lines are not (see
/// [`parse_steps`]).
pub fn load_steps(path: impl AsRef<Path>) -> Result<ParsedInput> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;

    let parsed = parse_steps(&text);
    info!(
        steps = parsed.graph.len(),
        edges = parsed.graph.edge_count(),
        skipped = parsed.diagnostics.len(),
        "steps parsed from input"
    );
    Ok(parsed)
}
