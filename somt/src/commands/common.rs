//! Common types and utilities for somt commands.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use somc_util::{Diagnostic, SourceMap};

use crate::error::{Result, SomtError};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND literal` line per token
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Read a source file, rejecting paths that are missing or not files.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SomtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(SomtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| SomtError::FileOperation(format!("{}: {}", path.display(), e)))
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a diagnostic header, its source snippet if the span resolves in
/// `map`, then one `= note:` or `= help:` line per attached message.
pub fn render_diagnostic(map: &SourceMap, diagnostic: &Diagnostic) -> String {
    let mut out = diagnostic.to_string();
    if let Some(snippet) = map.format_span(diagnostic.span) {
        out.push('\n');
        out.push_str(&snippet);
    }
    for note in &diagnostic.notes {
        out.push_str(&format!("\n    = note: {}", note));
    }
    for help in &diagnostic.helps {
        out.push_str(&format!("\n    = help: {}", help));
    }
    out
}

/// Escape control characters so a literal stays on one output line.
pub fn printable(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for ch in literal.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";
}
