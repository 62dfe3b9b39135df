//! Grammar Modules
//!
//! Each module extends `Parser` with the methods for one family of
//! productions:
//!
//! - [`expr`]: Pratt expression parser (literals, operators, postfix forms)
//! - [`stmt`]: statements and blocks, including `for` and `switch`
//! - [`ty`]: type names, parameter lists and function results
//! - [`item`]: file header and file-scope declarations
//!
//! Productions return `Result<Node, BadNode>`. The caller that owns a
//! node slot turns an `Err` into that slot's `Bad` variant after skipping
//! to a synchronization point.

mod expr;
mod item;
mod stmt;
mod ty;
