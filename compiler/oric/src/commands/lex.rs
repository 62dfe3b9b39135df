//! `ori lex`: print the token stream.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use ori_diagnostic::emitter::TerminalEmitter;
use ori_diagnostic::illegal_token;
use ori_ir::TokenKind;
use tracing::debug;

use super::{emit_reports, process_all, FileReport, Status};
use crate::CliError;

/// One line per token, `line:col Kind "value"`, ending with `EOF`.
///
/// Every `Illegal` token also becomes a lexical diagnostic.
pub fn lex_report(path: &Path, source: &str) -> FileReport {
    let tokens = ori_lexer::lex(source);
    debug!(tokens = tokens.len(), "lexed");

    let mut output = String::new();
    let mut diagnostics = Vec::new();
    for token in &tokens {
        let _ = writeln!(
            output,
            "{}:{} {} {:?}",
            token.line, token.column, token.kind, token.value
        );
        if token.kind == TokenKind::Illegal {
            diagnostics.push(illegal_token(token));
        }
    }

    FileReport {
        path: path.to_path_buf(),
        output,
        diagnostics,
    }
}

pub fn lex_files<W: Write>(
    paths: &[PathBuf],
    out: &mut impl Write,
    emitter: &mut TerminalEmitter<W>,
) -> Result<Status, CliError> {
    let reports = process_all(paths, lex_report)?;
    emit_reports(&reports, out, emitter)
}
