pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Argument, ComparisonOp, Constraint, Logical, LogicalOp, Node, Token, TokenKind, same};
pub use lexer::{Lexer, tokenize};
pub use output::{to_json, to_json_string, to_rsql};
pub use parser::{ParseError, Parser, parse};
pub use value::Value;
