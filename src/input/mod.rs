// src/input/mod.rs

//! Reading step rules from text.

pub mod loader;
pub mod parser;

pub use loader::load_steps;
pub use parser::{ParseDiagnostic, ParsedInput, parse_line, parse_steps};
