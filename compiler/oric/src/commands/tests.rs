#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use ori_diagnostic::emitter::ColorMode;
use ori_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

fn emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

/// Run `emit_reports` and return (status, stdout, stderr).
fn emit(reports: &[FileReport]) -> (Status, String, String) {
    let mut out = Vec::new();
    let mut emitter = emitter();
    let status = emit_reports(reports, &mut out, &mut emitter).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(emitter.into_inner()).unwrap(),
    )
}

#[test]
fn test_lex_report_lines() {
    let report = lex_report(Path::new("a.ori"), "package main");
    let lines: Vec<&str> = report.output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1:1 Package \"package\"");
    assert_eq!(lines[1], "1:9 Ident \"main\"");
    assert!(lines[2].ends_with(" EOF \"\""), "{}", lines[2]);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_lex_report_illegal_tokens() {
    let report = lex_report(Path::new("a.ori"), "package main\n& \"open");
    let codes: Vec<ErrorCode> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0002, ErrorCode::E0001]);
    assert!(report.output.contains("2:1 Illegal \"&\"\n"));
}

#[test]
fn test_parse_report_dump_and_quiet() {
    let source = "package main\nfunc main() {}\n";
    let loud = parse_report(Path::new("a.ori"), source, false);
    assert!(loud.output.starts_with("File\n  Package: \"package\" @1:1"));
    assert!(loud.diagnostics.is_empty());

    let quiet = parse_report(Path::new("a.ori"), source, true);
    assert_eq!(quiet.output, "");
}

#[test]
fn test_parse_report_keeps_diagnostics() {
    let source = "package main\nfunc f() {\nx = a < b < c\n}\n";
    let report = parse_report(Path::new("a.ori"), source, true);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, ErrorCode::E1006);
}

#[test]
fn test_emit_single_clean_report() {
    let report = FileReport {
        path: PathBuf::from("a.ori"),
        output: "dump\n".to_string(),
        diagnostics: Vec::new(),
    };
    let (status, stdout, stderr) = emit(&[report]);
    assert_eq!(status, Status::Clean);
    assert_eq!(stdout, "dump\n");
    assert_eq!(stderr, "");
}

#[test]
fn test_emit_many_reports_with_headers() {
    let clean = parse_report(Path::new("a.ori"), "package a\n", true);
    let broken = lex_report(Path::new("b.ori"), "package b\n&");
    let (status, stdout, stderr) = emit(&[clean, broken]);

    assert_eq!(status, Status::Errors);
    assert!(stdout.starts_with("== a.ori ==\n== b.ori ==\n1:1 Package"), "{stdout}");
    assert_eq!(
        stderr,
        "error[E0002]: b.ori:2:1 invalid character (got Illegal \"&\")\n\
         error: 1 syntax error reported\n"
    );
}

#[test]
fn test_files_processed_in_input_order() {
    let dir = tempdir().unwrap();
    let mut paths = Vec::new();
    for name in ["z", "m", "a"] {
        let path = dir.path().join(format!("{name}.ori"));
        fs::write(&path, format!("package {name}\n")).unwrap();
        paths.push(path);
    }

    let mut out = Vec::new();
    let mut emitter = emitter();
    let status = lex_files(&paths, &mut out, &mut emitter).unwrap();
    assert_eq!(status, Status::Clean);

    let stdout = String::from_utf8(out).unwrap();
    let headers: Vec<&str> = stdout.lines().filter(|l| l.starts_with("==")).collect();
    let expected: Vec<String> = paths
        .iter()
        .map(|p| format!("== {} ==", p.display()))
        .collect();
    assert_eq!(headers, expected);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.ori");
    let mut out = Vec::new();
    let err = parse_files(&[missing], false, &mut out, &mut emitter()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read "));
}
