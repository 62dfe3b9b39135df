//! Declaration nodes: functions, type declarations, `implements`.

use super::{BadNode, BlockStmt, Expr, Positioned, TypeExpr};
use crate::token::Token;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    Func(FuncDecl),
    Struct(StructType),
    Interface(InterfaceType),
    Enum(EnumType),
    Sum(SumType),
    Implements(ImplementsDecl),
    Bad(BadNode),
}

/// `func NAME ( PARAMS ) RESULTS? BODY`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncDecl {
    pub func_kw: Token,
    pub name: Token,
    pub params: ParamList,
    pub results: Option<Results>,
    pub body: BlockStmt,
}

/// Parenthesized parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParamList {
    pub lparen: Token,
    pub params: Vec<Param>,
    pub rparen: Token,
}

/// `NAME TYPE`, or a bare `TYPE` inside a raw result list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Option<Token>,
    pub ty: TypeExpr,
}

/// Function or method results.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Results {
    /// A single type without parentheses.
    Type(TypeExpr),
    /// `(int, int)` or `(a int, b int)`.
    List(ParamList),
}

/// `type NAME struct { FIELDS }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructType {
    pub type_kw: Token,
    pub name: Token,
    pub struct_kw: Token,
    pub lbrace: Token,
    pub fields: Vec<FieldDecl>,
    pub rbrace: Token,
    pub public: bool,
}

/// `NAME TYPE [= DEFAULT]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub name: Token,
    pub ty: TypeExpr,
    pub eq: Option<Token>,
    pub default: Option<Expr>,
    pub public: bool,
}

/// `type NAME interface { MEMBERS }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InterfaceType {
    pub type_kw: Token,
    pub name: Token,
    pub interface_kw: Token,
    pub lbrace: Token,
    pub members: Vec<InterfaceMember>,
    pub rbrace: Token,
    pub public: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum InterfaceMember {
    Method(MethodSpec),
    Embed(QualifiedName),
}

/// `NAME ( PARAMS ) RESULTS?` inside an interface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodSpec {
    pub name: Token,
    pub params: ParamList,
    pub results: Option<Results>,
}

/// `NAME` or `QUALIFIER.NAME`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedName {
    pub qualifier: Option<Token>,
    pub dot: Option<Token>,
    pub name: Token,
}

/// `type NAME enum { A; B; C }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumType {
    pub type_kw: Token,
    pub name: Token,
    pub enum_kw: Token,
    pub lbrace: Token,
    pub variants: Vec<Token>,
    pub rbrace: Token,
    pub public: bool,
}

/// `type NAME sum { A; B(x int) }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SumType {
    pub type_kw: Token,
    pub name: Token,
    pub sum_kw: Token,
    pub lbrace: Token,
    pub variants: Vec<SumVariant>,
    pub rbrace: Token,
    pub public: bool,
}

/// A sum member; `params` is absent for zero-argument variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SumVariant {
    pub name: Token,
    pub params: Option<ParamList>,
}

/// `TYPE implements [PKG.]INTERFACE`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImplementsDecl {
    pub type_name: Token,
    pub implements_kw: Token,
    pub interface: QualifiedName,
}

/// Names starting with an ASCII uppercase letter are exported.
pub fn is_public_name(name: &str) -> bool {
    name.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
}

impl Decl {
    pub fn is_bad(&self) -> bool {
        matches!(self, Decl::Bad(_))
    }

    /// Node name used by the AST dump.
    pub fn node_name(&self) -> &'static str {
        match self {
            Decl::Func(_) => "FuncDecl",
            Decl::Struct(_) => "StructType",
            Decl::Interface(_) => "InterfaceType",
            Decl::Enum(_) => "EnumType",
            Decl::Sum(_) => "SumType",
            Decl::Implements(_) => "ImplementsDecl",
            Decl::Bad(_) => "BadDecl",
        }
    }
}

impl Positioned for Decl {
    fn start(&self) -> &Token {
        match self {
            Decl::Func(func) => &func.func_kw,
            Decl::Struct(decl) => decl.start(),
            Decl::Interface(decl) => decl.start(),
            Decl::Enum(decl) => decl.start(),
            Decl::Sum(decl) => decl.start(),
            Decl::Implements(decl) => decl.start(),
            Decl::Bad(bad) => bad.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            Decl::Func(func) => func.body.end(),
            Decl::Struct(decl) => decl.end(),
            Decl::Interface(decl) => decl.end(),
            Decl::Enum(decl) => decl.end(),
            Decl::Sum(decl) => decl.end(),
            Decl::Implements(decl) => decl.end(),
            Decl::Bad(bad) => bad.end(),
        }
    }
}

macro_rules! braced_type_positions {
    ($($ty:ty),*) => {
        $(
            impl Positioned for $ty {
                fn start(&self) -> &Token {
                    &self.type_kw
                }

                fn end(&self) -> &Token {
                    &self.rbrace
                }
            }
        )*
    };
}

braced_type_positions!(StructType, InterfaceType, EnumType, SumType);

impl Positioned for ImplementsDecl {
    fn start(&self) -> &Token {
        &self.type_name
    }

    fn end(&self) -> &Token {
        &self.interface.name
    }
}

impl Positioned for ParamList {
    fn start(&self) -> &Token {
        &self.lparen
    }

    fn end(&self) -> &Token {
        &self.rparen
    }
}

impl Positioned for Results {
    fn start(&self) -> &Token {
        match self {
            Results::Type(ty) => ty.start(),
            Results::List(list) => list.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            Results::Type(ty) => ty.end(),
            Results::List(list) => list.end(),
        }
    }
}

impl Positioned for Param {
    fn start(&self) -> &Token {
        self.name.as_ref().unwrap_or_else(|| self.ty.start())
    }

    fn end(&self) -> &Token {
        self.ty.end()
    }
}

impl Positioned for FieldDecl {
    fn start(&self) -> &Token {
        &self.name
    }

    fn end(&self) -> &Token {
        match &self.default {
            Some(default) => default.end(),
            None => self.ty.end(),
        }
    }
}

impl Positioned for MethodSpec {
    fn start(&self) -> &Token {
        &self.name
    }

    fn end(&self) -> &Token {
        match &self.results {
            Some(results) => results.end(),
            None => self.params.end(),
        }
    }
}

impl Positioned for QualifiedName {
    fn start(&self) -> &Token {
        self.qualifier.as_ref().unwrap_or(&self.name)
    }

    fn end(&self) -> &Token {
        &self.name
    }
}

impl Positioned for InterfaceMember {
    fn start(&self) -> &Token {
        match self {
            InterfaceMember::Method(method) => method.start(),
            InterfaceMember::Embed(name) => name.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            InterfaceMember::Method(method) => method.end(),
            InterfaceMember::Embed(name) => name.end(),
        }
    }
}

impl Positioned for SumVariant {
    fn start(&self) -> &Token {
        &self.name
    }

    fn end(&self) -> &Token {
        match &self.params {
            Some(params) => params.end(),
            None => &self.name,
        }
    }
}
