// src/input/parser.rs

//! Parser for the line-oriented dependency format:
//!
//! ```text
//! Step C must be finished before step A can begin.
//! ```
//!
//! meaning `C` is a dependency of `A`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::dag::StepGraph;

static STEP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Step (\w+) must be finished before step (\w+) can begin")
        .expect("step line pattern is a valid regex")
});

/// A non-blank line that did not match the expected pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
}

/// Graph built from input text plus every line that was skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub graph: StepGraph,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parse a single line into `(dependency, step)`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let caps = STEP_LINE.captures(line)?;
    let dep = caps.get(1)?.as_str();
    let step = caps.get(2)?.as_str();
    Some((dep, step))
}

/// Parse all lines of `text` into a step graph.
///
/// Blank lines are ignored. Lines that do not match are skipped, logged, and
/// recorded as [`ParseDiagnostic`]s; they never abort parsing. Every id seen
/// on either side of a rule becomes a node.
pub fn parse_steps(text: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some((dep, step)) => parsed.graph.add_dependency(step, dep),
            None => {
                info!(line_number = i + 1, line = %line, "does not match expected pattern; skipping");
                parsed.diagnostics.push(ParseDiagnostic {
                    line_number: i + 1,
                    line: line.to_string(),
                });
            }
        }
    }

    parsed
}
