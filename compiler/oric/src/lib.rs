//! Ori front-end driver.
//!
//! Library half of the `ori` binary: source discovery, the `lex` and
//! `parse` commands, and logging setup. The binary only parses arguments
//! and maps the result to an exit code.
//!
//! ```text
//! --file / --directory
//!     │  discover()
//!     ▼
//! source text ──► ori_lexer::lex ──► ori_parse::parse ──► dump / diagnostics
//! ```

pub mod commands;
mod discover;
mod error;
pub mod tracing_setup;

pub use commands::Status;
pub use discover::{discover, Inputs};
pub use error::CliError;
