//! Error recovery for the parser.
//!
//! Token sets and skip routines used to resynchronize after a syntax
//! error. Every routine keeps `{`/`}` balanced so a recovered statement
//! never swallows the brace that closes its enclosing block.

use super::cursor::Cursor;
use ori_ir::TokenKind;

/// A set of token kinds as a bitset over `TokenKind` discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }
}

/// Keywords that open a file-scope declaration.
pub const DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Package)
    .with(TokenKind::Import)
    .with(TokenKind::Func)
    .with(TokenKind::Const)
    .with(TokenKind::Var)
    .with(TokenKind::Type);

/// Tokens that end a statement inside a block.
pub const STMT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace);

/// Tokens that end a case body inside a switch.
pub const CASE_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Case)
    .with(TokenKind::Default)
    .with(TokenKind::RBrace);

/// Advance until a token in `recovery` at brace depth zero, or EOF.
///
/// An unmatched `}` stops the scan only when `recovery` contains it;
/// otherwise it is skipped like any other token. Returns `true` if a
/// recovery token was found.
pub fn synchronize(cursor: &mut Cursor, recovery: TokenSet) -> bool {
    let mut depth = 0usize;
    loop {
        if cursor.at_eof() {
            return false;
        }
        let kind = cursor.kind();
        if depth == 0 && recovery.contains(kind) {
            return true;
        }
        match kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth = depth.saturating_sub(1),
            _ => {}
        }
        cursor.next();
    }
}

/// Skip the rest of a broken statement.
///
/// Stops (without consuming) at `;`, at an unmatched `}`, or at the first
/// token on a new line while outside any braces.
pub fn skip_statement(cursor: &mut Cursor) {
    let mut depth = 0usize;
    loop {
        if cursor.at_eof() {
            return;
        }
        let kind = cursor.kind();
        if depth == 0 && (STMT_END.contains(kind) || cursor.newline_since_prev()) {
            return;
        }
        match kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.next();
    }
}

/// Skip an expression nested too deeply to parse.
///
/// `()`, `[]` and `{}` stay balanced. Outside them the scan stops (without
/// consuming) at `,`, `;`, `:`, `{`, a closing delimiter, or the first
/// token on a new line.
pub fn skip_nested(cursor: &mut Cursor) {
    let mut depth = 0usize;
    loop {
        if cursor.at_eof() {
            return;
        }
        let kind = cursor.kind();
        if depth == 0
            && (kind.is_closing()
                || cursor.newline_since_prev()
                || matches!(kind, TokenKind::Comma | TokenKind::Colon | TokenKind::LBrace))
        {
            return;
        }
        match kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.next();
    }
}

/// Skip to the end of a delimited list and consume its closing token.
///
/// Nested `open`/`close` pairs are balanced. The scan gives up, without
/// consuming, at a brace or `;` that belongs to the enclosing construct.
pub fn skip_list(cursor: &mut Cursor, open: TokenKind, close: TokenKind) {
    let mut depth = 0usize;
    loop {
        let kind = cursor.kind();
        if kind == close {
            cursor.next();
            if depth == 0 {
                return;
            }
            depth -= 1;
            continue;
        }
        if kind == open {
            depth += 1;
        } else if depth == 0
            && matches!(
                kind,
                TokenKind::Eof | TokenKind::LBrace | TokenKind::RBrace | TokenKind::Semicolon
            )
        {
            return;
        } else if kind == TokenKind::Eof {
            return;
        }
        cursor.next();
    }
}

/// Skip a braced body whose `{` was already consumed, up to and including
/// its matching `}`.
pub fn skip_block(cursor: &mut Cursor) {
    let mut depth = 0usize;
    loop {
        match cursor.kind() {
            TokenKind::Eof => return,
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                cursor.next();
                if depth == 0 {
                    return;
                }
                depth -= 1;
                continue;
            }
            _ => {}
        }
        cursor.next();
    }
}

/// Skip what is left of a broken `for` or `switch` header together with
/// the block after it.
///
/// `;` belongs to these headers, so only the body's `{`, an unmatched `}`
/// or a new line ends the scan.
pub fn skip_compound(cursor: &mut Cursor) {
    loop {
        match cursor.kind() {
            TokenKind::Eof | TokenKind::RBrace => return,
            TokenKind::LBrace => {
                cursor.next();
                skip_block(cursor);
                return;
            }
            _ if cursor.newline_since_prev() => return,
            _ => {
                cursor.next();
            }
        }
    }
}
