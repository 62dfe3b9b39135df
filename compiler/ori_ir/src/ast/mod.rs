//! AST node definitions for the Ori front-end.
//!
//! The tree is strictly owned: the [`File`] is the root, every child has a
//! single owner, and nodes hold copies of the tokens that delimit them.
//! Node categories are closed sums:
//!
//! - [`TypeExpr`]: `NameType` or `BadType`
//! - [`Expr`]: literals, identifiers, unary/binary, paren, selector, index,
//!   call, `BadExpr`
//! - [`Stmt`]: blocks, const/var, assign, inc/dec, if, for, range, switch,
//!   branches, return, expression statements, `BadStmt`
//! - [`Decl`]: functions, struct/interface/enum/sum types, implements,
//!   `BadDecl`
//!
//! Syntax errors surface only as [`BadNode`]s (wrapped in the `Bad` variant
//! of each category); each one corresponds to a reported diagnostic.

pub mod decl;
pub mod expr;
pub mod stmt;


pub use decl::{
    is_public_name, Decl, EnumType, FieldDecl, FuncDecl, ImplementsDecl, InterfaceMember,
    InterfaceType, MethodSpec, Param, ParamList, QualifiedName, Results, StructType, SumType,
    SumVariant,
};
pub use expr::{
    BasicLit, BinaryExpr, CallExpr, Expr, IdentExpr, IndexExpr, ParenExpr, SelectorExpr,
    UnaryExpr,
};
pub use stmt::{
    AssignStmt, BlockStmt, BranchStmt, CaseClause, ExprStmt, ForStmt, IfStmt, IncDecStmt,
    RangeStmt, ReturnStmt, Stmt, SwitchStmt, ValueDecl,
};

use crate::token::{Token, ZERO_TOKEN};

/// Source extent of a node, expressed as its first and last tokens.
///
/// Composite nodes delegate to their leftmost and rightmost children.
/// Nodes without a natural position return the zero token.
pub trait Positioned {
    fn start(&self) -> &Token;
    fn end(&self) -> &Token;
}

/// Placeholder for a construct that failed to parse.
///
/// `from` and `to` delimit the tokens the parser skipped or could not use.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BadNode {
    pub from: Token,
    pub to: Token,
    pub reason: String,
}

impl BadNode {
    pub fn new(from: Token, to: Token, reason: impl Into<String>) -> Self {
        BadNode {
            from,
            to,
            reason: reason.into(),
        }
    }
}

impl Positioned for BadNode {
    fn start(&self) -> &Token {
        &self.from
    }

    fn end(&self) -> &Token {
        &self.to
    }
}

/// A type reference.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// A builtin type keyword, `interface`, `func`, or a user type name.
    Name(NameType),
    Bad(BadNode),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NameType {
    pub name: Token,
}

impl TypeExpr {
    pub fn is_bad(&self) -> bool {
        matches!(self, TypeExpr::Bad(_))
    }
}

impl Positioned for TypeExpr {
    fn start(&self) -> &Token {
        match self {
            TypeExpr::Name(name) => &name.name,
            TypeExpr::Bad(bad) => bad.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            TypeExpr::Name(name) => &name.name,
            TypeExpr::Bad(bad) => bad.end(),
        }
    }
}

/// A parsed source file.
///
/// Top-level declarations are sorted into buckets by kind. `decls` holds
/// functions plus every `BadDecl`; it never holds variable declarations.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct File {
    pub package_kw: Token,
    pub name: Token,
    /// `ConstDecl` statements, or `BadStmt` for malformed ones.
    pub const_decls: Vec<Stmt>,
    pub decls: Vec<Decl>,
    pub structs: Vec<StructType>,
    pub interfaces: Vec<InterfaceType>,
    pub enums: Vec<EnumType>,
    pub sums: Vec<SumType>,
    pub implements: Vec<ImplementsDecl>,
}

impl File {
    /// Number of top-level items across all buckets.
    pub fn item_count(&self) -> usize {
        self.const_decls.len()
            + self.decls.len()
            + self.structs.len()
            + self.interfaces.len()
            + self.enums.len()
            + self.sums.len()
            + self.implements.len()
    }

    fn item_ends(&self) -> impl Iterator<Item = &Token> {
        self.const_decls
            .iter()
            .map(Positioned::end)
            .chain(self.decls.iter().map(Positioned::end))
            .chain(self.structs.iter().map(Positioned::end))
            .chain(self.interfaces.iter().map(Positioned::end))
            .chain(self.enums.iter().map(Positioned::end))
            .chain(self.sums.iter().map(Positioned::end))
            .chain(self.implements.iter().map(Positioned::end))
    }
}

impl Positioned for File {
    fn start(&self) -> &Token {
        &self.package_kw
    }

    fn end(&self) -> &Token {
        self.item_ends()
            .chain(std::iter::once(&self.name))
            .max_by_key(|token| token.pos())
            .unwrap_or(&ZERO_TOKEN)
    }
}
