use super::*;
use crate::ast::{BasicLit, IdentExpr, ValueDecl};
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, value: &str, line: u32, column: u32) -> Token {
    Token::new(kind, value, line, column)
}

#[test]
fn empty_main_function() {
    let file = File {
        package_kw: tok(TokenKind::Package, "package", 1, 1),
        name: tok(TokenKind::Ident, "main", 1, 9),
        decls: vec![Decl::Func(FuncDecl {
            func_kw: tok(TokenKind::Func, "func", 2, 1),
            name: tok(TokenKind::Ident, "main", 2, 6),
            params: ParamList {
                lparen: tok(TokenKind::LParen, "(", 2, 10),
                params: Vec::new(),
                rparen: tok(TokenKind::RParen, ")", 2, 11),
            },
            results: None,
            body: BlockStmt {
                lbrace: tok(TokenKind::LBrace, "{", 2, 13),
                stmts: Vec::new(),
                rbrace: tok(TokenKind::RBrace, "}", 2, 14),
            },
        })],
        ..File::default()
    };

    let expected = r#"File
  Package: "package" @1:1 (kind=41)
  Name: "main" @1:9 (kind=3)
  ConstDecls: (none)
  Decls:
    FuncDecl
      Func: "func" @2:1 (kind=43)
      Name: "main" @2:6 (kind=3)
      Params: (none)
      Body:
        BlockStmt
          LBrace: "{" @2:13 (kind=10)
          Stmts: (none)
          RBrace: "}" @2:14 (kind=11)
  Structs: (none)
  Interfaces: (none)
  Enums: (none)
  Sums: (none)
  Implements: (none)
"#;
    assert_eq!(dump_file(&file), expected);
}

#[test]
fn const_decl_with_type() {
    let stmt = Stmt::ConstDecl(ValueDecl {
        keyword: tok(TokenKind::Const, "const", 2, 1),
        name: tok(TokenKind::Ident, "a", 2, 7),
        ty: Some(TypeExpr::Name(crate::ast::NameType {
            name: tok(TokenKind::Float, "float", 2, 9),
        })),
        eq: tok(TokenKind::Assign, "=", 2, 15),
        init: Expr::FloatLit(BasicLit {
            value: tok(TokenKind::FloatLit, "3.14", 2, 17),
        }),
    });

    let expected = r#"ConstDecl
  Keyword: "const" @2:1 (kind=45)
  Name: "a" @2:7 (kind=3)
  Type:
    NameType
      Name: "float" @2:9 (kind=72)
  Eq: "=" @2:15 (kind=19)
  Init:
    FloatLitExpr
      Value: "3.14" @2:17 (kind=5)
"#;
    assert_eq!(dump(&stmt), expected);
}

#[test]
fn bad_nodes_print_reason_and_span() {
    let expr = Expr::Bad(BadNode::new(
        tok(TokenKind::Lt, "<", 1, 7),
        tok(TokenKind::Ident, "c", 1, 9),
        "use && (e.g. a < b && b < c)",
    ));

    let expected = r#"BadExpr
  Reason: use && (e.g. a < b && b < c)
  From: "<" @1:7 (kind=34)
  To: "c" @1:9 (kind=3)
"#;
    assert_eq!(dump(&expr), expected);
}

#[test]
fn bare_tokens_and_absent_nodes() {
    let token = tok(TokenKind::Ident, "x", 3, 4);
    assert_eq!(dump(&token), "Token \"x\" @3:4 (kind=3)\n");

    let absent: Option<Expr> = None;
    assert_eq!(dump(&absent), "(nil)\n");

    let present = Some(Expr::Ident(IdentExpr { name: token }));
    assert_eq!(dump(&present), "IdentExpr\n  Name: \"x\" @3:4 (kind=3)\n");
}

#[test]
fn struct_fields_show_default_and_visibility() {
    let decl = StructType {
        type_kw: tok(TokenKind::Type, "type", 1, 1),
        name: tok(TokenKind::Ident, "t", 1, 6),
        struct_kw: tok(TokenKind::Struct, "struct", 1, 8),
        lbrace: tok(TokenKind::LBrace, "{", 1, 15),
        fields: vec![FieldDecl {
            name: tok(TokenKind::Ident, "x", 1, 17),
            ty: TypeExpr::Name(crate::ast::NameType {
                name: tok(TokenKind::Int, "int", 1, 19),
            }),
            eq: Some(tok(TokenKind::Assign, "=", 1, 23)),
            default: Some(Expr::IntLit(BasicLit {
                value: tok(TokenKind::IntLit, "5", 1, 25),
            })),
            public: false,
        }],
        rbrace: tok(TokenKind::RBrace, "}", 1, 27),
        public: false,
    };

    let out = dump(&decl);
    assert!(out.starts_with("StructType\n"), "{out}");
    assert!(out.contains("    FieldDecl\n      Name: \"x\" @1:17 (kind=3)\n"), "{out}");
    assert!(out.contains("      Eq: \"=\" @1:23 (kind=19)\n"), "{out}");
    assert!(out.contains("      Default:\n        IntLitExpr\n"), "{out}");
    assert!(out.ends_with("  Public: false\n"), "{out}");
}
