//! Token types for the Ori lexer.
//!
//! A [`Token`] is a small record: its kind, the exact source slice it was
//! scanned from, and the 1-based line/column of its first byte. Tokens the
//! parser invents during recovery carry the `(0, 0)` position.

use std::fmt;

/// A line/column position in the source.
///
/// Ordering is line-major, so comparing two positions tells which one
/// comes first in the file.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Pos { line, column }
    }

    /// Synthetic positions belong to tokens invented by the parser.
    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with its original spelling and position.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Token {
    pub kind: TokenKind,
    /// Source slice, including the quotes of string literals and the
    /// leading `//` of comments.
    pub value: String,
    pub line: u32,
    pub column: u32,
}

/// The zero token: returned as the position of nodes that have none.
pub static ZERO_TOKEN: Token = Token::ZERO;

impl Token {
    /// Illegal kind, empty value, synthetic position.
    pub const ZERO: Token = Token {
        kind: TokenKind::Illegal,
        value: String::new(),
        line: 0,
        column: 0,
    };

    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// A token invented during recovery (or an absent EOF).
    pub fn synthetic(kind: TokenKind) -> Self {
        Token {
            kind,
            value: String::new(),
            line: 0,
            column: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.column)
    }

    /// Position one past the last byte of the token on its line.
    pub fn end_pos(&self) -> Pos {
        if self.is_synthetic() {
            return Pos::default();
        }
        let len = u32::try_from(self.value.len()).unwrap_or(u32::MAX);
        Pos::new(self.line, self.column.saturating_add(len))
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.pos().is_synthetic()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.value, self.pos())
    }
}

/// Renders as `"value" @line:col (kind=N)`, the form used by the AST dump.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @{}:{} (kind={})",
            self.value,
            self.line,
            self.column,
            self.kind.index()
        )
    }
}

/// Token kinds for Ori.
///
/// The discriminant order is stable: the AST dump prints it as `kind=N`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(u8)]
pub enum TokenKind {
    /// Malformed lexeme or stray character; also the zero token's kind.
    #[default]
    Illegal,
    Eof,
    /// `// ...` up to the end of the line.
    Comment,

    Ident,
    IntLit,
    FloatLit,
    /// String literal; the value keeps its quotes.
    StringLit,
    /// `true` / `false`.
    BoolLit,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Comma,
    Semicolon,
    Colon,
    Dot,
    Pipe,

    /// `=`
    Assign,
    /// `:=`
    Define,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    Plus,
    Minus,
    Star,
    Slash,
    Modulo,
    /// `++`
    Inc,
    /// `--`
    Dec,

    /// `==`
    Eq,
    /// `!=`
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,

    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    Package,
    Import,
    Func,
    Var,
    Const,
    Type,
    Struct,
    Interface,
    Enum,
    Sum,
    Implements,
    If,
    Else,
    For,
    Range,
    Break,
    Continue,
    Switch,
    Case,
    Default,
    Fallthrough,
    Return,

    // Builtin type keywords
    Bool,
    Int,
    Int8,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint32,
    Uint64,
    Float,
    Float32,
    Float64,
    String,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::String as usize + 1;

    /// Discriminant, as printed by the AST dump.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Resolve an identifier-shaped lexeme against the keyword table.
    ///
    /// `true` and `false` are reserved and resolve to [`TokenKind::BoolLit`].
    /// Matching is exact and case-sensitive.
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme {
            "package" => TokenKind::Package,
            "import" => TokenKind::Import,
            "func" => TokenKind::Func,
            "var" => TokenKind::Var,
            "const" => TokenKind::Const,
            "type" => TokenKind::Type,
            "struct" => TokenKind::Struct,
            "interface" => TokenKind::Interface,
            "enum" => TokenKind::Enum,
            "sum" => TokenKind::Sum,
            "implements" => TokenKind::Implements,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "range" => TokenKind::Range,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            "fallthrough" => TokenKind::Fallthrough,
            "return" => TokenKind::Return,
            "bool" => TokenKind::Bool,
            "int" => TokenKind::Int,
            "int8" => TokenKind::Int8,
            "int32" => TokenKind::Int32,
            "int64" => TokenKind::Int64,
            "uint" => TokenKind::Uint,
            "uint8" => TokenKind::Uint8,
            "uint32" => TokenKind::Uint32,
            "uint64" => TokenKind::Uint64,
            "float" => TokenKind::Float,
            "float32" => TokenKind::Float32,
            "float64" => TokenKind::Float64,
            "string" => TokenKind::String,
            "true" | "false" => TokenKind::BoolLit,
            _ => return None,
        };
        Some(kind)
    }

    /// Variant name, used in diagnostics (`got Ident "x"`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "Comment",
            TokenKind::Ident => "Ident",
            TokenKind::IntLit => "IntLit",
            TokenKind::FloatLit => "FloatLit",
            TokenKind::StringLit => "StringLit",
            TokenKind::BoolLit => "BoolLit",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Colon => "Colon",
            TokenKind::Dot => "Dot",
            TokenKind::Pipe => "Pipe",
            TokenKind::Assign => "Assign",
            TokenKind::Define => "Define",
            TokenKind::PlusEq => "PlusEq",
            TokenKind::MinusEq => "MinusEq",
            TokenKind::StarEq => "StarEq",
            TokenKind::SlashEq => "SlashEq",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Modulo => "Modulo",
            TokenKind::Inc => "Inc",
            TokenKind::Dec => "Dec",
            TokenKind::Eq => "Eq",
            TokenKind::Neq => "Neq",
            TokenKind::Lt => "Lt",
            TokenKind::Lte => "Lte",
            TokenKind::Gt => "Gt",
            TokenKind::Gte => "Gte",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::Package => "Package",
            TokenKind::Import => "Import",
            TokenKind::Func => "Func",
            TokenKind::Var => "Var",
            TokenKind::Const => "Const",
            TokenKind::Type => "Type",
            TokenKind::Struct => "Struct",
            TokenKind::Interface => "Interface",
            TokenKind::Enum => "Enum",
            TokenKind::Sum => "Sum",
            TokenKind::Implements => "Implements",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::For => "For",
            TokenKind::Range => "Range",
            TokenKind::Break => "Break",
            TokenKind::Continue => "Continue",
            TokenKind::Switch => "Switch",
            TokenKind::Case => "Case",
            TokenKind::Default => "Default",
            TokenKind::Fallthrough => "Fallthrough",
            TokenKind::Return => "Return",
            TokenKind::Bool => "Bool",
            TokenKind::Int => "Int",
            TokenKind::Int8 => "Int8",
            TokenKind::Int32 => "Int32",
            TokenKind::Int64 => "Int64",
            TokenKind::Uint => "Uint",
            TokenKind::Uint8 => "Uint8",
            TokenKind::Uint32 => "Uint32",
            TokenKind::Uint64 => "Uint64",
            TokenKind::Float => "Float",
            TokenKind::Float32 => "Float32",
            TokenKind::Float64 => "Float64",
            TokenKind::String => "String",
        }
    }

    /// Fixed source spelling, for kinds that have one.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Pipe => "|",
            TokenKind::Assign => "=",
            TokenKind::Define => ":=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Modulo => "%",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Lte => "<=",
            TokenKind::Gt => ">",
            TokenKind::Gte => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Not => "!",
            TokenKind::Package => "package",
            TokenKind::Import => "import",
            TokenKind::Func => "func",
            TokenKind::Var => "var",
            TokenKind::Const => "const",
            TokenKind::Type => "type",
            TokenKind::Struct => "struct",
            TokenKind::Interface => "interface",
            TokenKind::Enum => "enum",
            TokenKind::Sum => "sum",
            TokenKind::Implements => "implements",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::Range => "range",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Fallthrough => "fallthrough",
            TokenKind::Return => "return",
            TokenKind::Bool => "bool",
            TokenKind::Int => "int",
            TokenKind::Int8 => "int8",
            TokenKind::Int32 => "int32",
            TokenKind::Int64 => "int64",
            TokenKind::Uint => "uint",
            TokenKind::Uint8 => "uint8",
            TokenKind::Uint32 => "uint32",
            TokenKind::Uint64 => "uint64",
            TokenKind::Float => "float",
            TokenKind::Float32 => "float32",
            TokenKind::Float64 => "float64",
            TokenKind::String => "string",
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Comment
            | TokenKind::Ident
            | TokenKind::IntLit
            | TokenKind::FloatLit
            | TokenKind::StringLit
            | TokenKind::BoolLit => return None,
        };
        Some(text)
    }

    /// Reserved words, including the builtin type names.
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Package
    }

    /// `int`, `int8` … `float64`.
    pub fn is_numeric_type(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Int8
                | TokenKind::Int32
                | TokenKind::Int64
                | TokenKind::Uint
                | TokenKind::Uint8
                | TokenKind::Uint32
                | TokenKind::Uint64
                | TokenKind::Float
                | TokenKind::Float32
                | TokenKind::Float64
        )
    }

    /// Type kinds accepted after the name in `const` / `var` declarations
    /// and in struct fields.
    pub fn is_var_const_type(self) -> bool {
        self.is_numeric_type()
            || matches!(
                self,
                TokenKind::String | TokenKind::Bool | TokenKind::Interface | TokenKind::Ident
            )
    }

    /// Type kinds accepted for function parameters and results.
    pub fn is_func_param_type(self) -> bool {
        self.is_var_const_type() || self == TokenKind::Func
    }

    /// `=`, `:=`, `+=`, `-=`, `*=`, `/=`.
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Define
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::SlashEq
        )
    }

    pub fn is_inc_dec(self) -> bool {
        matches!(self, TokenKind::Inc | TokenKind::Dec)
    }

    /// `==`, `!=`, `<`, `<=`, `>`, `>=`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::Lte
                | TokenKind::Gt
                | TokenKind::Gte
        )
    }

    /// Kinds the parser resynchronizes on; error paths never consume them.
    pub fn is_closing(self) -> bool {
        matches!(
            self,
            TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Semicolon
                | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
