//! Command handlers for the `ori` CLI.
//!
//! Each subcommand turns one source file into a [`FileReport`]: the text
//! for stdout plus the diagnostics for stderr. Files are processed in
//! parallel and reported in input order, so output does not depend on
//! scheduling.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ori_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use ori_diagnostic::Diagnostic;
use rayon::prelude::*;
use tracing::debug_span;

use crate::CliError;

mod lex;
mod parse;

pub use lex::{lex_files, lex_report};
pub use parse::{parse_files, parse_report};

/// Outcome of a command over all of its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// At least one file produced a diagnostic.
    Errors,
}

/// What one file contributes to a command's output.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and process every path, keeping input order.
fn process_all<F>(paths: &[PathBuf], process: F) -> Result<Vec<FileReport>, CliError>
where
    F: Fn(&Path, &str) -> FileReport + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let source = read_source(path)?;
            let span = debug_span!("file", path = %path.display());
            Ok(span.in_scope(|| process(path, &source)))
        })
        .collect()
}

/// Write each report's output to `out` and its diagnostics to `emitter`.
///
/// A header line names the file when there is more than one.
pub fn emit_reports<W: Write>(
    reports: &[FileReport],
    out: &mut impl Write,
    emitter: &mut TerminalEmitter<W>,
) -> Result<Status, CliError> {
    let many = reports.len() > 1;
    let mut errors = 0;

    for report in reports {
        if many {
            writeln!(out, "== {} ==", report.path.display())?;
        }
        out.write_all(report.output.as_bytes())?;

        emitter.set_path(report.path.display().to_string());
        emitter.emit_all(&report.diagnostics);
        errors += report.diagnostics.len();
    }
    out.flush()?;

    emitter.emit_summary(errors);
    emitter.flush();

    Ok(if errors == 0 {
        Status::Clean
    } else {
        Status::Errors
    })
}

#[cfg(test)]
mod tests;
