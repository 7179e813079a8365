//! Token listing for the `tokens` command

use crate::tokenize;

/// One line per token: byte offset, then the token.
pub fn render_tokens(query: &str) -> String {
    tokenize(query)
        .iter()
        .map(|token| format!("{:>4}  {}", token.offset, token))
        .collect::<Vec<_>>()
        .join("\n")
}
