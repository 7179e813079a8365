//! Serialization of filter ASTs.
//!
//! Two renderings are provided besides the indented tree of
//! [`Node::format_indented`](crate::Node::format_indented):
//!
//! - **JSON** via [`to_json()`] / [`to_json_string()`] - for handing the AST
//!   to tools outside Rust
//! - **Canonical RSQL** via [`to_rsql()`] - a source string that parses back
//!   into the same AST
//!
//! # Examples
//!
//! ```
//! use rsql_filter::parse;
//! use rsql_filter::output::{to_json_string, to_rsql};
//!
//! let node = parse("age>21 ; status=in=(active, pending)").unwrap();
//!
//! assert_eq!(to_rsql(&node), "age=gt=21;status=in=(active,pending)");
//! assert_eq!(
//!     to_json_string(&node, false),
//!     r#"{"nodes":[{"field":"age","operator":"gt","value":21},{"field":"status","operator":"in","value":["active","pending"]}],"operator":"and"}"#
//! );
//! ```

use serde_json::{Number, json};

use crate::ast::{Argument, Node};
use crate::value::Value;

/// Convert a value to JSON. Non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(n) => Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Null => serde_json::Value::Null,
    }
}

/// Convert a node to JSON.
///
/// Combinators become `{"operator": "and", "nodes": [...]}` and constraints
/// become `{"field": ..., "operator": "eq", "value": ...}`.
pub fn to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Logical(l) => json!({
            "operator": l.operator.name().to_lowercase(),
            "nodes": l.nodes.iter().map(to_json).collect::<Vec<_>>(),
        }),
        Node::Constraint(c) => {
            let value = match &c.value {
                Argument::Scalar(v) => value_to_json(v),
                Argument::List(values) => {
                    serde_json::Value::Array(values.iter().map(value_to_json).collect())
                }
            };
            json!({
                "field": c.field,
                "operator": c.operator.name().to_lowercase(),
                "value": value,
            })
        }
    }
}

/// Render a node as a JSON string, compact or pretty-printed.
pub fn to_json_string(node: &Node, pretty: bool) -> String {
    let value = to_json(node);
    if pretty {
        format!("{value:#}")
    } else {
        value.to_string()
    }
}

fn value_to_rsql(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(n) => n.to_string(),
        // Debug keeps the decimal point (`1.0`), so the literal lexes as a float.
        Value::Float(n) => format!("{n:?}"),
        Value::Boolean(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Render a node in canonical RSQL: FIQL spelling for every operator except
/// `==` and `!=`, no whitespace, parentheses only where precedence needs them.
///
/// For any AST produced by the parser, parsing the result yields an equal AST.
pub fn to_rsql(node: &Node) -> String {
    match node {
        Node::Constraint(c) => {
            let value = match &c.value {
                Argument::Scalar(v) => value_to_rsql(v),
                Argument::List(values) => {
                    let items: Vec<String> = values.iter().map(value_to_rsql).collect();
                    format!("({})", items.join(","))
                }
            };
            format!("{}{}{}", c.field, c.operator.symbol(), value)
        }
        Node::Logical(l) => {
            let parts: Vec<String> = l
                .nodes
                .iter()
                .map(|child| match child {
                    Node::Logical(inner) if inner.operator.precedence() <= l.operator.precedence() => {
                        format!("({})", to_rsql(child))
                    }
                    _ => to_rsql(child),
                })
                .collect();
            parts.join(l.operator.symbol())
        }
    }
}
