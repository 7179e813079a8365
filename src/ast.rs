//! # RSQL Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens, operators and nodes of the RSQL/FIQL
//! filter language, a compact notation for predicates over named fields.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and bitmask token groups
//! - **[operators]** - Logical and comparison operators, precedence levels
//! - **[node]** - AST nodes (combinators and constraints)
//!
//! ## Quick Start
//!
//! ```text
//! status=in=(active,pending);age=ge=18
//! ```
//!
//! This query keeps records whose status is active or pending and whose age
//! is at least 18.
//!
//! ## Core Concepts
//!
//! ### Constraints
//!
//! A constraint compares a field with a literal:
//!
//! ```text
//! field OPERATOR argument
//! ```
//!
//! Operators have a symbolic and a FIQL spelling (`<=` and `=le=`). The
//! membership operators `=in=` and `=out=` take a parenthesized list.
//!
//! ### Combinators
//!
//! - **And** `;` binds tighter than **Or** `,`
//! - Parentheses group explicitly
//! - Chains of the same operator flatten into one n-ary node
//!
//! ### Literals
//!
//! There is no quoting. A bare run is classified as an integer, a float, an
//! identifier, one of the keywords `true` / `false` / `null`, or otherwise a
//! plain string.
//!
//! ## Examples
//!
//! ```text
//! name==John
//! age=gt=21;age=lt=65
//! (a==1,b==2);c==3
//! ```
pub mod node;
pub mod operators;
pub mod tokens;

pub use node::{Argument, Constraint, Logical, Node, same};
pub use operators::{ComparisonOp, LogicalOp, Precedence};
pub use tokens::{Token, TokenGroup, TokenKind};
