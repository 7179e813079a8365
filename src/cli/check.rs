//! Parse filter queries and render the resulting AST

use std::str::FromStr;

use super::CliError;
use crate::output::{to_json_string, to_rsql};
use crate::parse;

/// How `check` renders a successfully parsed query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree
    #[default]
    Tree,
    /// JSON document
    Json,
    /// Canonical RSQL source
    Rsql,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "rsql" | "fiql" => Ok(OutputFormat::Rsql),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter query to parse
    pub query: String,
    /// Output rendering
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Only validate syntax, don't render
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query parsed and rendered in the requested format
    Rendered(String),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let node = parse(&options.query)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let rendered = match options.format {
        OutputFormat::Tree => node.to_string(),
        OutputFormat::Json => to_json_string(&node, options.pretty),
        OutputFormat::Rsql => to_rsql(&node),
    };
    Ok(CheckResult::Rendered(rendered))
}
