use std::num::{ParseFloatError, ParseIntError};

use log::debug;
use thiserror::Error;

use crate::{
    ast::{
        Argument, ComparisonOp, LogicalOp, Node, Precedence, Token, TokenKind,
        tokens::{ARGUMENT, COMPARISON, EQUALITY, LOGICAL, MEMBERSHIP},
    },
    lexer::Lexer,
    value::Value,
};

/// Errors produced while parsing a filter expression.
///
/// Every error is fatal; the parser stops at the first one.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid token {:?} at offset {}", .token.literal, .token.offset)]
    InvalidToken { token: Token },

    #[error("unexpected token {token} at offset {}", .token.offset)]
    UnexpectedToken { token: Token },

    #[error("expected comparison after field {field:?}, got {token} at offset {}", .token.offset)]
    ExpectedComparison { field: String, token: Token },

    #[error("expected argument after comparison for field {field:?}, got {token} at offset {}", .token.offset)]
    ExpectedArgument { field: String, token: Token },

    #[error("expected '(' after membership operator for field {field:?}, got {token} at offset {}", .token.offset)]
    ExpectedList { field: String, token: Token },

    #[error("empty list for membership operator on field {field:?}")]
    EmptyList { field: String },

    #[error("expected ',' or ')' between membership values for field {field:?}, got {token} at offset {}", .token.offset)]
    ExpectedListSeparator { field: String, token: Token },

    #[error("expected ')' to close group opened at offset {open}, got {token} at offset {}", .token.offset)]
    UnclosedGroup { open: usize, token: Token },

    #[error("unexpected token after expression: {token} at offset {}", .token.offset)]
    TrailingInput { token: Token },

    #[error("groups nested deeper than {limit} levels at offset {}", .token.offset)]
    NestingTooDeep { limit: usize, token: Token },

    #[error("operator {operator} on field {field:?} does not accept a {} argument", .value.type_name())]
    InvalidArgumentType {
        field: String,
        operator: ComparisonOp,
        value: Value,
    },

    #[error("invalid integer {:?} for field {field:?}: {source}", .token.literal)]
    InvalidInteger {
        field: String,
        token: Token,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float {:?} for field {field:?}: {source}", .token.literal)]
    InvalidFloat {
        field: String,
        token: Token,
        #[source]
        source: ParseFloatError,
    },

    #[error("float {:?} for field {field:?} is out of range", .token.literal)]
    FloatOutOfRange { field: String, token: Token },
}

impl ParseError {
    /// The field the error is about, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseError::ExpectedComparison { field, .. }
            | ParseError::ExpectedArgument { field, .. }
            | ParseError::ExpectedList { field, .. }
            | ParseError::EmptyList { field }
            | ParseError::ExpectedListSeparator { field, .. }
            | ParseError::InvalidArgumentType { field, .. }
            | ParseError::InvalidInteger { field, .. }
            | ParseError::InvalidFloat { field, .. }
            | ParseError::FloatOutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }

    /// The token the error points at, when there is one.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::InvalidToken { token }
            | ParseError::UnexpectedToken { token }
            | ParseError::ExpectedComparison { token, .. }
            | ParseError::ExpectedArgument { token, .. }
            | ParseError::ExpectedList { token, .. }
            | ParseError::ExpectedListSeparator { token, .. }
            | ParseError::UnclosedGroup { token, .. }
            | ParseError::TrailingInput { token }
            | ParseError::NestingTooDeep { token, .. }
            | ParseError::InvalidInteger { token, .. }
            | ParseError::InvalidFloat { token, .. }
            | ParseError::FloatOutOfRange { token, .. } => Some(token),
            ParseError::EmptyList { .. } | ParseError::InvalidArgumentType { .. } => None,
        }
    }
}

/// Maximum depth of parenthesized groups.
pub const MAX_NESTING: usize = 128;

/// Precedence-climbing parser with two tokens of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    peek_token: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            peek_token,
            depth: 0,
        }
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    /// The token after the current one.
    pub fn peek(&self) -> &Token {
        &self.peek_token
    }

    /// Error for a token that cannot start or continue a construct. Lexical
    /// errors take priority so `=foo=` is reported as what it is.
    fn unexpected(&self) -> ParseError {
        if self.check(TokenKind::Invalid) {
            ParseError::InvalidToken {
                token: self.current_token.clone(),
            }
        } else {
            ParseError::UnexpectedToken {
                token: self.current_token.clone(),
            }
        }
    }

    /// Convert the current argument token to a typed value and consume it.
    fn parse_literal(&mut self, field: &str) -> Result<Value, ParseError> {
        let token = &self.current_token;
        let value = match token.kind {
            TokenKind::Ident | TokenKind::String => Value::String(token.literal.clone()),
            TokenKind::Integer => {
                let n = token
                    .literal
                    .parse::<i64>()
                    .map_err(|source| ParseError::InvalidInteger {
                        field: field.to_string(),
                        token: token.clone(),
                        source,
                    })?;
                Value::Integer(n)
            }
            TokenKind::Float => {
                let n = token
                    .literal
                    .parse::<f64>()
                    .map_err(|source| ParseError::InvalidFloat {
                        field: field.to_string(),
                        token: token.clone(),
                        source,
                    })?;
                if !n.is_finite() {
                    return Err(ParseError::FloatOutOfRange {
                        field: field.to_string(),
                        token: token.clone(),
                    });
                }
                Value::Float(n)
            }
            TokenKind::True => Value::Boolean(true),
            TokenKind::False => Value::Boolean(false),
            TokenKind::Null => Value::Null,
            _ if self.check(TokenKind::Invalid) => return Err(self.unexpected()),
            _ => {
                return Err(ParseError::ExpectedArgument {
                    field: field.to_string(),
                    token: token.clone(),
                });
            }
        };
        self.advance();
        Ok(value)
    }

    /// Parse a literal that must be orderable (not boolean or null).
    fn parse_orderable(&mut self, field: &str, operator: ComparisonOp) -> Result<Value, ParseError> {
        let value = self.parse_literal(field)?;
        if !value.is_orderable() {
            return Err(ParseError::InvalidArgumentType {
                field: field.to_string(),
                operator,
                value,
            });
        }
        Ok(value)
    }

    /// Parse `( literal (, literal)* )` for `=in=` / `=out=`.
    fn parse_list(&mut self, field: &str, operator: ComparisonOp) -> Result<Vec<Value>, ParseError> {
        if !self.check(TokenKind::LParen) {
            if self.check(TokenKind::Invalid) {
                return Err(self.unexpected());
            }
            return Err(ParseError::ExpectedList {
                field: field.to_string(),
                token: self.current_token.clone(),
            });
        }
        self.advance(); // consume (

        if self.check(TokenKind::RParen) {
            return Err(ParseError::EmptyList {
                field: field.to_string(),
            });
        }

        let mut values = vec![];
        loop {
            values.push(self.parse_orderable(field, operator)?);

            match self.current_token.kind {
                TokenKind::RParen => {
                    self.advance();
                    return Ok(values);
                }
                // `,` doubles as the list separator
                TokenKind::Or => self.advance(),
                TokenKind::Invalid => return Err(self.unexpected()),
                _ => {
                    return Err(ParseError::ExpectedListSeparator {
                        field: field.to_string(),
                        token: self.current_token.clone(),
                    });
                }
            }
        }
    }

    /// Parse `field OP argument`; the current token is the field.
    fn parse_constraint(&mut self) -> Result<Node, ParseError> {
        let field = self.current_token.literal.clone();
        self.advance();

        if !self.current_token.belongs_to(COMPARISON) {
            if self.check(TokenKind::Invalid) {
                return Err(self.unexpected());
            }
            return Err(ParseError::ExpectedComparison {
                field,
                token: self.current_token.clone(),
            });
        }

        let kind = self.current_token.kind;
        let Some(operator) = ComparisonOp::from_token(kind) else {
            return Err(self.unexpected());
        };
        self.advance();

        let value = if kind.belongs_to(MEMBERSHIP) {
            Argument::List(self.parse_list(&field, operator)?)
        } else if !self.current_token.belongs_to(ARGUMENT) {
            if self.check(TokenKind::Invalid) {
                return Err(self.unexpected());
            }
            return Err(ParseError::ExpectedArgument {
                field,
                token: self.current_token.clone(),
            });
        } else if kind.belongs_to(EQUALITY) {
            Argument::Scalar(self.parse_literal(&field)?)
        } else {
            Argument::Scalar(self.parse_orderable(&field, operator)?)
        };

        Ok(Node::constraint(field, operator, value))
    }

    /// Parse a parenthesized group or a constraint.
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current_token.kind {
            TokenKind::LParen => {
                if self.depth >= MAX_NESTING {
                    return Err(ParseError::NestingTooDeep {
                        limit: MAX_NESTING,
                        token: self.current_token.clone(),
                    });
                }
                let open = self.current_token.offset;
                self.advance();
                self.depth += 1;
                let node = self.parse_expression(Precedence::Lowest);
                self.depth -= 1;
                let node = node?;
                if !self.check(TokenKind::RParen) {
                    if self.check(TokenKind::Invalid) {
                        return Err(self.unexpected());
                    }
                    return Err(ParseError::UnclosedGroup {
                        open,
                        token: self.current_token.clone(),
                    });
                }
                self.advance();
                Ok(node)
            }
            TokenKind::Ident => self.parse_constraint(),
            _ => Err(self.unexpected()),
        }
    }

    /// Parse operands joined by logical operators that bind tighter than
    /// `min_precedence`, flattening chains of the same operator.
    pub fn parse_expression(&mut self, min_precedence: Precedence) -> Result<Node, ParseError> {
        let mut left = self.parse_primary()?;

        while self.current_token.belongs_to(LOGICAL)
            && min_precedence < Precedence::of(self.current_token.kind)
        {
            let Some(op) = LogicalOp::from_token(self.current_token.kind) else {
                break;
            };
            self.advance();

            let right = self.parse_expression(op.precedence())?;
            left = Node::combine(op, left, right);
        }

        Ok(left)
    }

    /// Parse a complete expression; the whole input must be consumed.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let node = self.parse_expression(Precedence::Lowest)?;

        if !self.check(TokenKind::Eof) {
            if self.check(TokenKind::Invalid) {
                return Err(self.unexpected());
            }
            return Err(ParseError::TrailingInput {
                token: self.current_token.clone(),
            });
        }

        Ok(node)
    }
}

/// Parse a filter expression into its AST.
///
/// # Examples
///
/// ```
/// use rsql_filter::{parse, ComparisonOp, Node};
///
/// let node = parse("name==John").unwrap();
/// assert_eq!(node, Node::compare("name", ComparisonOp::Eq, "John"));
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    debug!("parsing {source:?}");
    let mut parser = Parser::new(Lexer::new(source));
    let result = parser.parse();
    match &result {
        Ok(node) => debug!("parsed {source:?} into {node:?}"),
        Err(err) => debug!("failed to parse {source:?}: {err}"),
    }
    result
}
