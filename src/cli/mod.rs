//! CLI support for rsql-filter
//!
//! Provides programmatic access to the `rsql` commands so other tools can
//! embed them without going through a process boundary.

mod check;
mod docs;
mod tokens;

pub use check::{CheckOptions, CheckResult, OutputFormat, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use tokens::render_tokens;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query on the command line and nothing piped to stdin
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Unknown output format
    #[error("Unknown format: '{0}'. Valid formats are: tree, json, rsql")]
    UnknownFormat(String),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'rsql docs' to see available categories.")]
    UnknownCategory(String),
}
