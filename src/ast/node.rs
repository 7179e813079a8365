use std::fmt;

use log::debug;

use crate::ast::{ComparisonOp, LogicalOp};
use crate::value::Value;

/// A node of the filter AST.
///
/// Nodes are built by the parser and never mutated afterwards. Two nodes are
/// structurally equal (`==`) when they are constraints with the same field,
/// operator and value, or combinators with the same operator and pairwise
/// equal children in the same order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `and` / `or` over one or more children
    ///
    /// # Example
    /// ```text
    /// age=gt=21;age=lt=65
    /// ```
    Logical(Logical),

    /// `field OP value`
    ///
    /// # Example
    /// ```text
    /// name==John
    /// city=in=(NY,LA)
    /// ```
    Constraint(Constraint),
}

/// Logical combinator.
///
/// Children built by the parser never contain an immediate child with the
/// same operator; chains like `a;b;c` are flattened into one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Logical {
    pub operator: LogicalOp,
    pub nodes: Vec<Node>,
}

/// Comparison constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub field: String,
    pub operator: ComparisonOp,
    pub value: Argument,
}

/// Right-hand side of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Single literal for `==`, `!=` and the relational operators
    Scalar(Value),

    /// Non-empty ordered list for `=in=` / `=out=`
    List(Vec<Value>),
}

impl Node {
    pub fn and(nodes: Vec<Node>) -> Self {
        Node::Logical(Logical {
            operator: LogicalOp::And,
            nodes,
        })
    }

    pub fn or(nodes: Vec<Node>) -> Self {
        Node::Logical(Logical {
            operator: LogicalOp::Or,
            nodes,
        })
    }

    pub fn constraint(field: impl Into<String>, operator: ComparisonOp, value: Argument) -> Self {
        Node::Constraint(Constraint {
            field: field.into(),
            operator,
            value,
        })
    }

    /// Shorthand for a single-valued constraint.
    pub fn compare(field: impl Into<String>, operator: ComparisonOp, value: impl Into<Value>) -> Self {
        Node::constraint(field, operator, Argument::Scalar(value.into()))
    }

    /// Combine two operands under `op`, splicing in the children of any
    /// operand that is already a combinator with the same operator.
    pub fn combine(op: LogicalOp, left: Node, right: Node) -> Self {
        let mut nodes = Vec::new();
        for operand in [left, right] {
            match operand {
                Node::Logical(logical) if logical.operator == op => {
                    debug!("flattening {} {} children", logical.nodes.len(), op);
                    nodes.extend(logical.nodes);
                }
                other => nodes.push(other),
            }
        }
        Node::Logical(Logical { operator: op, nodes })
    }

    pub fn as_logical(&self) -> Option<&Logical> {
        match self {
            Node::Logical(l) => Some(l),
            Node::Constraint(_) => None,
        }
    }

    pub fn as_constraint(&self) -> Option<&Constraint> {
        match self {
            Node::Constraint(c) => Some(c),
            Node::Logical(_) => None,
        }
    }

    /// Bracketed, tab-indented rendering for debugging.
    ///
    /// # Example
    /// ```text
    /// And [
    ///     age Gt 21,
    ///     age Lt 65
    /// ]
    /// ```
    pub fn format_indented(&self, indent: usize) -> String {
        let ind = "\t".repeat(indent);
        match self {
            Node::Constraint(c) => {
                format!("{}{} {} {}", ind, c.field, c.operator, c.value)
            }
            Node::Logical(l) => {
                let mut out = format!("{}{} [\n", ind, l.operator);
                for (i, node) in l.nodes.iter().enumerate() {
                    out.push_str(&node.format_indented(indent + 1));
                    if i < l.nodes.len() - 1 {
                        out.push_str(",\n");
                    } else {
                        out.push('\n');
                    }
                }
                out.push_str(&ind);
                out.push(']');
                out
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_indented(0))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Scalar(v) => write!(f, "{v}"),
            Argument::List(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

/// Structural equality where an absent node equals only another absent node.
pub fn same(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
