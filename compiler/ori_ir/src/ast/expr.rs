//! Expression nodes.

use super::{BadNode, Positioned};
use crate::token::Token;

/// Expression node.
///
/// Children are boxed; the enclosing statement owns the whole subtree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    Ident(IdentExpr),
    IntLit(BasicLit),
    FloatLit(BasicLit),
    BoolLit(BasicLit),
    /// The literal's value keeps its quotes.
    StringLit(BasicLit),
    Paren(ParenExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Call(CallExpr),
    Bad(BadNode),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdentExpr {
    pub name: Token,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BasicLit {
    pub value: Token,
}

/// `( inner )`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParenExpr {
    pub left: Token,
    pub inner: Box<Expr>,
    pub right: Token,
}

/// `-x`, `!x`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnaryExpr {
    pub op: Token,
    pub right: Box<Expr>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

/// `x.selector`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SelectorExpr {
    pub x: Box<Expr>,
    pub dot: Token,
    pub selector: Token,
}

/// `x[index]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub lbracket: Token,
    pub index: Box<Expr>,
    pub rbracket: Token,
}

/// `callee(args...)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub lparen: Token,
    pub args: Vec<Expr>,
    pub rparen: Token,
}

impl Expr {
    /// Targets allowed on the left of an assignment or `++`/`--`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Selector(_) | Expr::Index(_))
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Expr::Call(_))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Expr::Bad(_))
    }

    /// Operator token of a binary expression.
    pub fn binary_op(&self) -> Option<&Token> {
        match self {
            Expr::Binary(binary) => Some(&binary.op),
            _ => None,
        }
    }

    /// Node name used by the AST dump.
    pub fn node_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "IdentExpr",
            Expr::IntLit(_) => "IntLitExpr",
            Expr::FloatLit(_) => "FloatLitExpr",
            Expr::BoolLit(_) => "BoolLitExpr",
            Expr::StringLit(_) => "StringLitExpr",
            Expr::Paren(_) => "ParenExpr",
            Expr::Unary(_) => "UnaryExpr",
            Expr::Binary(_) => "BinaryExpr",
            Expr::Selector(_) => "SelectorExpr",
            Expr::Index(_) => "IndexExpr",
            Expr::Call(_) => "CallExpr",
            Expr::Bad(_) => "BadExpr",
        }
    }
}

impl Positioned for Expr {
    fn start(&self) -> &Token {
        match self {
            Expr::Ident(ident) => &ident.name,
            Expr::IntLit(lit) | Expr::FloatLit(lit) | Expr::BoolLit(lit) | Expr::StringLit(lit) => {
                &lit.value
            }
            Expr::Paren(paren) => &paren.left,
            Expr::Unary(unary) => &unary.op,
            Expr::Binary(binary) => binary.left.start(),
            Expr::Selector(selector) => selector.x.start(),
            Expr::Index(index) => index.x.start(),
            Expr::Call(call) => call.callee.start(),
            Expr::Bad(bad) => bad.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            Expr::Ident(ident) => &ident.name,
            Expr::IntLit(lit) | Expr::FloatLit(lit) | Expr::BoolLit(lit) | Expr::StringLit(lit) => {
                &lit.value
            }
            Expr::Paren(paren) => &paren.right,
            Expr::Unary(unary) => unary.right.end(),
            Expr::Binary(binary) => binary.right.end(),
            Expr::Selector(selector) => &selector.selector,
            Expr::Index(index) => &index.rbracket,
            Expr::Call(call) => &call.rparen,
            Expr::Bad(bad) => bad.end(),
        }
    }
}
