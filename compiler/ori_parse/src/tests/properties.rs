//! Invariants that hold for any input, checked over random token soup.

use ori_ir::dump::dump_file;
use ori_ir::visitor::{walk_decl, walk_expr, walk_file, walk_stmt, Visitor};
use ori_ir::{Decl, Expr, Positioned, Stmt};
use proptest::prelude::*;

use super::{count_bad, rhs, sexpr};
use crate::parse_source;

const WORDS: &[&str] = &[
    "package", "main", "func", "f", "x", "y", "(", ")", "{", "}", "[", "]", ",", ";", ":",
    ".", "=", ":=", "+=", "++", "+", "-", "*", "<", "==", "&&", "!", "1", "2.5", "\"s\"",
    "true", "if", "else", "for", "range", "switch", "case", "default", "break", "continue",
    "fallthrough", "return", "type", "struct", "interface", "enum", "sum", "implements",
    "const", "var", "import", "int", "string", "&", "\n",
];

fn source() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(prop::sample::select(WORDS), 0..60),
    )
        .prop_map(|(header, words)| {
            let body = words.join(" ");
            if header {
                format!("package main\n{body}")
            } else {
                body
            }
        })
}

/// Records nodes whose first token comes after their last.
#[derive(Default)]
struct SpanChecker {
    inverted: Vec<String>,
}

impl SpanChecker {
    fn check(&mut self, name: &str, node: &impl Positioned) {
        if node.start().pos() > node.end().pos() {
            self.inverted.push(format!(
                "{name} {} > {}",
                node.start(),
                node.end()
            ));
        }
    }
}

impl<'ast> Visitor<'ast> for SpanChecker {
    fn visit_decl(&mut self, decl: &'ast Decl) {
        self.check(decl.node_name(), decl);
        walk_decl(self, decl);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        self.check(stmt.node_name(), stmt);
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.check(expr.node_name(), expr);
        walk_expr(self, expr);
    }
}

#[derive(Clone, Copy, Debug)]
struct Op {
    symbol: &'static str,
    level: u8,
    comparison: bool,
}

const fn op(symbol: &'static str, level: u8, comparison: bool) -> Op {
    Op {
        symbol,
        level,
        comparison,
    }
}

const OPS: &[Op] = &[
    op("||", 1, false),
    op("&&", 2, false),
    op("==", 3, true),
    op("!=", 3, true),
    op("<", 4, true),
    op("<=", 4, true),
    op(">", 4, true),
    op(">=", 4, true),
    op("+", 5, false),
    op("-", 5, false),
    op("*", 6, false),
    op("/", 6, false),
    op("%", 6, false),
];

proptest! {
    #[test]
    fn parsing_is_deterministic(source in source()) {
        let first = parse_source(&source);
        let second = parse_source(&source);
        prop_assert_eq!(dump_file(&first.file), dump_file(&second.file));
        prop_assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn diagnostics_iff_bad_nodes(source in source()) {
        let output = parse_source(&source);
        let bad = count_bad(&output.file);
        prop_assert_eq!(
            output.diagnostics.is_empty(),
            bad == 0,
            "{} diagnostics, {} bad nodes in {:?}",
            output.diagnostics.len(),
            bad,
            source
        );
    }

    #[test]
    fn node_spans_are_ordered(source in source()) {
        let output = parse_source(&source);
        let mut checker = SpanChecker::default();
        walk_file(&mut checker, &output.file);
        prop_assert!(checker.inverted.is_empty(), "{:?} in {:?}", checker.inverted, source);
    }

    #[test]
    fn binary_operators_follow_the_precedence_table(
        first in prop::sample::select(OPS),
        second in prop::sample::select(OPS),
    ) {
        prop_assume!(!(first.comparison && second.comparison));

        let (expr, diagnostics) = rhs(&format!("a {} b {} c", first.symbol, second.symbol));
        prop_assert!(diagnostics.is_empty(), "{:?}", diagnostics);

        let expected = if first.level < second.level {
            format!("({} a ({} b c))", first.symbol, second.symbol)
        } else {
            format!("({} ({} a b) c)", second.symbol, first.symbol)
        };
        prop_assert_eq!(sexpr(&expr), expected);
    }
}
