//! Core diagnostic type for structured error reporting.
//!
//! A [`Diagnostic`] names the offending token instead of a byte span: the
//! front-end reports `line:col message (got Kind "value")`, and the token
//! carries everything needed to print that.

use std::fmt;

use ori_ir::{Pos, Token};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Severity {
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single report from the lexer or parser.
///
/// Built with the builder methods:
///
/// ```text
/// Diagnostic::error(ErrorCode::E1001)
///     .with_message("expected ')'")
///     .with_token(parser.peek().clone())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// The token the parser was looking at; its position is the report's.
    pub got: Token,
    /// Extra context lines, printed after the header.
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            got: Token::ZERO,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_token(mut self, got: Token) -> Self {
        self.got = got;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn pos(&self) -> Pos {
        self.got.pos()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `line:col message (got Kind "value")`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} (got {} {:?})",
            self.got.line, self.got.column, self.message, self.got.kind, self.got.value
        )
    }
}

/// `expected X` at the current token.
pub fn expected(code: ErrorCode, what: &str, got: &Token) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(format!("expected {what}"))
        .with_token(got.clone())
}

/// Report an `Illegal` token by what the lexer could not make sense of.
pub fn illegal_token(got: &Token) -> Diagnostic {
    let (code, message) = match got.value.bytes().next() {
        Some(b'"') => (ErrorCode::E0001, "unterminated string literal"),
        Some(b'0'..=b'9' | b'.') => (ErrorCode::E0003, "malformed number literal"),
        _ => (ErrorCode::E0002, "invalid character"),
    };
    Diagnostic::error(code)
        .with_message(message)
        .with_token(got.clone())
}
