//! Ori IR - Token and AST Types
//!
//! This crate contains the data structures shared by the Ori front-end:
//! - Tokens and token kinds produced by the lexer
//! - Operator precedence levels
//! - AST nodes (declarations, statements, expressions, types)
//! - A read-only AST visitor
//! - The human-readable AST dump
//!
//! # Design
//!
//! - **Tokens by value**: nodes own copies of the tokens that delimit them,
//!   so positions survive without a side table.
//! - **Closed sums**: every node category is an enum; errors are the `Bad`
//!   variant of each category, never a separate channel.
//! - **Strict tree**: `File` owns everything below it; there are no
//!   back-pointers.

pub mod ast;
pub mod dump;
mod precedence;
mod token;
pub mod visitor;

pub use ast::{BadNode, Decl, Expr, File, Positioned, Stmt, TypeExpr};
pub use precedence::Precedence;
pub use token::{Pos, Token, TokenKind, ZERO_TOKEN};
