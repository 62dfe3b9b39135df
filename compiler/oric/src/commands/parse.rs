//! `ori parse`: print the AST dump.

use std::io::Write;
use std::path::{Path, PathBuf};

use ori_diagnostic::emitter::TerminalEmitter;
use ori_ir::dump::dump_file;

use super::{emit_reports, process_all, FileReport, Status};
use crate::CliError;

/// Parse `source`. With `quiet` only the diagnostics are kept.
pub fn parse_report(path: &Path, source: &str, quiet: bool) -> FileReport {
    let parsed = ori_parse::parse_source(source);
    let output = if quiet {
        String::new()
    } else {
        dump_file(&parsed.file)
    };
    FileReport {
        path: path.to_path_buf(),
        output,
        diagnostics: parsed.diagnostics,
    }
}

pub fn parse_files<W: Write>(
    paths: &[PathBuf],
    quiet: bool,
    out: &mut impl Write,
    emitter: &mut TerminalEmitter<W>,
) -> Result<Status, CliError> {
    let reports = process_all(paths, |path, source| parse_report(path, source, quiet))?;
    emit_reports(&reports, out, emitter)
}
