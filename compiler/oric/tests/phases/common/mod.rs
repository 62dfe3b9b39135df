//! Shared test utilities for phase tests.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::TokenKind;
use ori_parse::{parse_source, ParseOutput};

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  [{}] {d}\n", d.code))
        .collect()
}

/// Parse `source` and assert it produced no diagnostics.
pub fn parse_ok(source: &str) -> ParseOutput {
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "expected a clean parse, got:\n{}",
        render(&output.diagnostics)
    );
    output
}

/// Parse `source` and assert the diagnostic codes, in order.
pub fn parse_err(source: &str, codes: &[ErrorCode]) -> ParseOutput {
    let output = parse_source(source);
    let got: Vec<ErrorCode> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(got, codes, "diagnostics:\n{}", render(&output.diagnostics));
    output
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    ori_lexer::lex(source).iter().map(|t| t.kind).collect()
}
