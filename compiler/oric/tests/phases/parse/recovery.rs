use indoc::indoc;
use ori_diagnostic::ErrorCode;
use ori_ir::{Decl, Stmt};
use pretty_assertions::assert_eq;

use crate::common::parse_err;

const BROKEN: &str = indoc! {"
    package main

    func broken(a int,) {
    }

    func good() {
        x = a < b < c
        if y = 1 {
        }
        break
        z = 1
    }

    var g int = 1

    type t struct { x int }
"};

#[test]
fn test_each_error_reported_once_in_order() {
    parse_err(
        BROKEN,
        &[
            ErrorCode::E1005,
            ErrorCode::E1006,
            ErrorCode::E1007,
            ErrorCode::E1008,
            ErrorCode::E1013,
        ],
    );
}

#[test]
fn test_declarations_after_errors_survive() {
    let file = parse_err(
        BROKEN,
        &[
            ErrorCode::E1005,
            ErrorCode::E1006,
            ErrorCode::E1007,
            ErrorCode::E1008,
            ErrorCode::E1013,
        ],
    )
    .file;

    assert_eq!(file.decls.len(), 3);
    assert!(matches!(file.decls[0], Decl::Bad(_)));
    assert!(matches!(file.decls[2], Decl::Bad(_)));
    assert_eq!(file.structs.len(), 1);

    let Decl::Func(good) = &file.decls[1] else {
        panic!("expected a function, got {:?}", file.decls[1]);
    };
    let shapes: Vec<&str> = good
        .body
        .stmts
        .iter()
        .map(|stmt| match stmt {
            Stmt::Assign(_) => "assign",
            Stmt::Bad(_) => "bad",
            _ => "other",
        })
        .collect();
    assert_eq!(shapes, vec!["assign", "bad", "bad", "assign"]);
}

#[test]
fn test_diagnostic_positions() {
    let output = parse_err(
        BROKEN,
        &[
            ErrorCode::E1005,
            ErrorCode::E1006,
            ErrorCode::E1007,
            ErrorCode::E1008,
            ErrorCode::E1013,
        ],
    );
    let lines: Vec<String> = output.diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "3:19 unexpected ',' before ')' (got RParen \")\")");
    assert!(lines[1].starts_with("7:15 "), "{}", lines[1]);
    assert_eq!(
        lines[2],
        "8:10 assignment not allowed in if condition; use == (got Assign \"=\")"
    );
    assert_eq!(
        lines[3],
        "10:5 expected 'break' inside 'for' loop (got Break \"break\")"
    );
    assert!(lines[4].starts_with("14:1 unsupported statement"), "{}", lines[4]);
}
