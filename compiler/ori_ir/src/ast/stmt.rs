//! Statement nodes.

use super::{BadNode, Decl, Expr, Positioned, TypeExpr};
use crate::token::{Token, TokenKind};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    Block(BlockStmt),
    ConstDecl(ValueDecl),
    VarDecl(ValueDecl),
    Assign(AssignStmt),
    IncDec(IncDecStmt),
    Expr(ExprStmt),
    Return(ReturnStmt),
    If(IfStmt),
    For(ForStmt),
    Range(RangeStmt),
    Switch(SwitchStmt),
    /// Only appears inside [`SwitchStmt::cases`].
    Case(CaseClause),
    Break(BranchStmt),
    Continue(BranchStmt),
    FallThrough(BranchStmt),
    /// A type declaration inside a block.
    Decl(Box<Decl>),
    Bad(BadNode),
}

/// `{ stmts }`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockStmt {
    pub lbrace: Token,
    pub stmts: Vec<Stmt>,
    pub rbrace: Token,
}

/// `const NAME TYPE = INIT` or `var NAME TYPE = INIT`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueDecl {
    pub keyword: Token,
    pub name: Token,
    pub ty: Option<TypeExpr>,
    pub eq: Token,
    pub init: Expr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AssignStmt {
    pub left: Expr,
    pub op: Token,
    pub right: Expr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IncDecStmt {
    pub x: Expr,
    pub op: Token,
}

/// A call evaluated for its effects.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReturnStmt {
    pub return_kw: Token,
    pub values: Vec<Expr>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub if_kw: Token,
    pub condition: Expr,
    pub then: BlockStmt,
    /// Either another `If` or a `Block`.
    pub else_: Option<Box<Stmt>>,
}

/// `for {}`, `for COND {}` and `for INIT; COND; POST {}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ForStmt {
    pub for_kw: Token,
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
}

/// `for [KEY [, VALUE] OP] range X {}`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RangeStmt {
    pub for_kw: Token,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    /// `=` or `:=`; absent for the bare `for range X` form.
    pub op: Option<Token>,
    pub range_kw: Token,
    pub x: Expr,
    pub body: BlockStmt,
}

/// `switch [INIT;] [TAG] { cases }`
///
/// Both `init` and `tag` may be present at once.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchStmt {
    pub switch_kw: Token,
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    pub lbrace: Token,
    /// `Stmt::Case` clauses, or `Stmt::Bad` for rejected ones.
    pub cases: Vec<Stmt>,
    pub rbrace: Token,
}

/// `case V1, V2: body` or `default: body`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseClause {
    /// The `case` or `default` keyword.
    pub case_kw: Token,
    /// Empty for `default`.
    pub values: Vec<Expr>,
    pub colon: Token,
    pub body: Vec<Stmt>,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        self.case_kw.kind == TokenKind::Default
    }
}

/// `break`, `continue` or `fallthrough`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BranchStmt {
    pub keyword: Token,
}

impl Stmt {
    pub fn is_bad(&self) -> bool {
        matches!(self, Stmt::Bad(_))
    }

    /// True for an expression statement wrapping a call.
    pub fn is_call(&self) -> bool {
        matches!(self, Stmt::Expr(stmt) if stmt.expr.is_call())
    }

    /// Node name used by the AST dump.
    pub fn node_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "BlockStmt",
            Stmt::ConstDecl(_) => "ConstDecl",
            Stmt::VarDecl(_) => "VarDecl",
            Stmt::Assign(_) => "AssignStmt",
            Stmt::IncDec(_) => "IncDecStmt",
            Stmt::Expr(_) => "ExprStmt",
            Stmt::Return(_) => "ReturnStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::Range(_) => "RangeStmt",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::Case(_) => "CaseClause",
            Stmt::Break(_) => "BreakStmt",
            Stmt::Continue(_) => "ContinueStmt",
            Stmt::FallThrough(_) => "FallThroughStmt",
            Stmt::Decl(_) => "DeclStmt",
            Stmt::Bad(_) => "BadStmt",
        }
    }
}

impl Positioned for BlockStmt {
    fn start(&self) -> &Token {
        &self.lbrace
    }

    fn end(&self) -> &Token {
        &self.rbrace
    }
}

impl Positioned for CaseClause {
    fn start(&self) -> &Token {
        &self.case_kw
    }

    fn end(&self) -> &Token {
        self.body.last().map_or(&self.colon, Positioned::end)
    }
}

impl Positioned for Stmt {
    fn start(&self) -> &Token {
        match self {
            Stmt::Block(block) => block.start(),
            Stmt::ConstDecl(decl) | Stmt::VarDecl(decl) => &decl.keyword,
            Stmt::Assign(assign) => assign.left.start(),
            Stmt::IncDec(inc_dec) => inc_dec.x.start(),
            Stmt::Expr(stmt) => stmt.expr.start(),
            Stmt::Return(ret) => &ret.return_kw,
            Stmt::If(stmt) => &stmt.if_kw,
            Stmt::For(stmt) => &stmt.for_kw,
            Stmt::Range(stmt) => &stmt.for_kw,
            Stmt::Switch(stmt) => &stmt.switch_kw,
            Stmt::Case(clause) => clause.start(),
            Stmt::Break(branch) | Stmt::Continue(branch) | Stmt::FallThrough(branch) => {
                &branch.keyword
            }
            Stmt::Decl(decl) => decl.start(),
            Stmt::Bad(bad) => bad.start(),
        }
    }

    fn end(&self) -> &Token {
        match self {
            Stmt::Block(block) => block.end(),
            Stmt::ConstDecl(decl) | Stmt::VarDecl(decl) => decl.init.end(),
            Stmt::Assign(assign) => assign.right.end(),
            Stmt::IncDec(inc_dec) => &inc_dec.op,
            Stmt::Expr(stmt) => stmt.expr.end(),
            Stmt::Return(ret) => ret.values.last().map_or(&ret.return_kw, Positioned::end),
            Stmt::If(stmt) => match &stmt.else_ {
                Some(else_) => else_.end(),
                None => stmt.then.end(),
            },
            Stmt::For(stmt) => stmt.body.end(),
            Stmt::Range(stmt) => stmt.body.end(),
            Stmt::Switch(stmt) => &stmt.rbrace,
            Stmt::Case(clause) => clause.end(),
            Stmt::Break(branch) | Stmt::Continue(branch) | Stmt::FallThrough(branch) => {
                &branch.keyword
            }
            Stmt::Decl(decl) => decl.end(),
            Stmt::Bad(bad) => bad.end(),
        }
    }
}
