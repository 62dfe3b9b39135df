//! Lexer and parser phase tests.
//!
//! - `lexer` - token streams as the parser sees them
//! - `program` - a realistic multi-declaration file
//! - `recovery` - several errors in one file

mod lexer;
mod program;
mod recovery;
