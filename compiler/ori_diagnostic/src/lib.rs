//! Diagnostic system for front-end error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - The offending token (where it went wrong, and what was found)
//!
//! The lexer and parser never fail: they accumulate [`Diagnostic`]s and
//! keep going, and the CLI renders them through an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{expected, illegal_token, Diagnostic, Severity};
pub use error_code::ErrorCode;
