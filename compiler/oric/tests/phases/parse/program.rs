use indoc::indoc;
use ori_ir::ast::{InterfaceMember, Results};
use ori_ir::dump::dump_file;
use ori_ir::{Decl, Stmt, TokenKind};
use pretty_assertions::assert_eq;

use crate::common::{kinds, parse_ok};

const PROGRAM: &str = indoc! {r#"
    package shapes

    // Shapes and their areas.
    const Pi float64 = 3.141,592,653,59

    type Shape interface {
        Area() float64
        Name() (string, bool)
    }

    type Circle struct {
        Radius float64 = 1.0
        label string
    }

    type Kind enum { Round; Square }

    type Outcome sum {
        Ok(value float64)
        Failed
    }

    Circle implements Shape

    func Area(c Circle) float64 {
        return Pi * c.Radius * c.Radius
    }

    func count(limit int) (total int, ok bool) {
        total := 0
        for i := 0; i < limit; i++ {
            if i % 2 == 0 && !skip(i) {
                continue
            } else if i > 10 {
                break
            }
            total += i
        }
        for k, v := range items {
            log(k, v)
        }
        switch k := kind(); k {
        case 0, 1:
            log("small")
            fallthrough
        default:
            log("other")
        }
        return total, true
    }
"#};

#[test]
fn test_program_lexes_without_illegal_tokens() {
    assert!(!kinds(PROGRAM).contains(&TokenKind::Illegal));
}

#[test]
fn test_program_buckets() {
    let file = parse_ok(PROGRAM).file;
    assert_eq!(file.name.value, "shapes");
    assert_eq!(file.const_decls.len(), 1);
    assert_eq!(file.decls.len(), 2);
    assert_eq!(file.structs.len(), 1);
    assert_eq!(file.interfaces.len(), 1);
    assert_eq!(file.enums.len(), 1);
    assert_eq!(file.sums.len(), 1);
    assert_eq!(file.implements.len(), 1);
    assert_eq!(file.item_count(), 8);
}

#[test]
fn test_program_type_declarations() {
    let file = parse_ok(PROGRAM).file;

    let shape = &file.interfaces[0];
    assert!(shape.public);
    assert_eq!(shape.members.len(), 2);
    let InterfaceMember::Method(method) = &shape.members[1] else {
        panic!("expected a method, got {:?}", shape.members[1]);
    };
    assert!(matches!(method.results, Some(Results::List(_))));

    let circle = &file.structs[0];
    let public: Vec<bool> = circle.fields.iter().map(|f| f.public).collect();
    assert_eq!(public, vec![true, false]);
    assert!(circle.fields[0].default.is_some());

    let variants: Vec<&str> = file.enums[0].variants.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(variants, vec!["Round", "Square"]);

    let sum = &file.sums[0];
    assert!(sum.variants[0].params.is_some());
    assert!(sum.variants[1].params.is_none());

    let implements = &file.implements[0];
    assert_eq!(implements.type_name.value, "Circle");
    assert_eq!(implements.interface.name.value, "Shape");
}

#[test]
fn test_program_function_bodies() {
    let file = parse_ok(PROGRAM).file;
    let Decl::Func(count) = &file.decls[1] else {
        panic!("expected a function, got {:?}", file.decls[1]);
    };
    assert_eq!(count.name.value, "count");

    let kinds: Vec<&str> = count
        .body
        .stmts
        .iter()
        .map(|stmt| match stmt {
            Stmt::Assign(_) => "assign",
            Stmt::For(_) => "for",
            Stmt::Range(_) => "range",
            Stmt::Switch(_) => "switch",
            Stmt::Return(_) => "return",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["assign", "for", "range", "switch", "return"]);

    let Stmt::Switch(switch) = &count.body.stmts[3] else {
        unreachable!()
    };
    assert!(switch.init.is_some());
    assert!(switch.tag.is_some());
    assert_eq!(switch.cases.len(), 2);
}

#[test]
fn test_program_dump_is_stable() {
    let first = dump_file(&parse_ok(PROGRAM).file);
    let second = dump_file(&parse_ok(PROGRAM).file);
    assert_eq!(first, second);
    assert!(first.contains("RangeStmt"));
    assert!(first.contains("FallThroughStmt"));
}
