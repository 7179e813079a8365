use std::fmt;

use crate::ast::TokenKind;

/// Logical combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// Conjunction (`;`)
    And,
    /// Disjunction (`,`)
    Or,
}

impl LogicalOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(LogicalOp::And),
            TokenKind::Or => Some(LogicalOp::Or),
            _ => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            LogicalOp::And => Precedence::And,
            LogicalOp::Or => Precedence::Or,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => ";",
            LogicalOp::Or => ",",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogicalOp::And => "And",
            LogicalOp::Or => "Or",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// Equal (`==`, `=eq=`)
    Eq,
    /// Not equal (`!=`, `=ne=`)
    Ne,
    /// Member of list (`=in=`)
    In,
    /// Not member of list (`=out=`)
    Out,
    /// Less than (`<`, `=lt=`)
    Lt,
    /// Less than or equal (`<=`, `=le=`)
    Le,
    /// Greater than (`>`, `=gt=`)
    Gt,
    /// Greater than or equal (`>=`, `=ge=`)
    Ge,
}

impl ComparisonOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(ComparisonOp::Eq),
            TokenKind::Ne => Some(ComparisonOp::Ne),
            TokenKind::In => Some(ComparisonOp::In),
            TokenKind::Out => Some(ComparisonOp::Out),
            TokenKind::Lt => Some(ComparisonOp::Lt),
            TokenKind::Le => Some(ComparisonOp::Le),
            TokenKind::Gt => Some(ComparisonOp::Gt),
            TokenKind::Ge => Some(ComparisonOp::Ge),
            _ => None,
        }
    }

    /// Canonical source spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::In => "=in=",
            ComparisonOp::Out => "=out=",
            ComparisonOp::Lt => "=lt=",
            ComparisonOp::Le => "=le=",
            ComparisonOp::Gt => "=gt=",
            ComparisonOp::Ge => "=ge=",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "Eq",
            ComparisonOp::Ne => "Ne",
            ComparisonOp::In => "In",
            ComparisonOp::Out => "Out",
            ComparisonOp::Lt => "Lt",
            ComparisonOp::Le => "Le",
            ComparisonOp::Gt => "Gt",
            ComparisonOp::Ge => "Ge",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binding strength of the token in operator position, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Or,
    And,
    Comparison,
}

impl Precedence {
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Or => Precedence::Or,
            TokenKind::And => Precedence::And,
            k if k.belongs_to(crate::ast::tokens::COMPARISON) => Precedence::Comparison,
            _ => Precedence::Lowest,
        }
    }
}
