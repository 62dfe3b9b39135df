//! Operator precedence levels.
//!
//! ```text
//! Lowest < Or (||) < And (&&) < Equality (==, !=) < Compare (<, <=, >, >=)
//!        < Additive (+, -) < Multiplicative (*, /, %) < Prefix (-x, !x)
//!        < Postfix (x.y, x[i], f())
//! ```

use crate::token::TokenKind;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
    Lowest,
    Or,
    And,
    Equality,
    Compare,
    Additive,
    Multiplicative,
    Prefix,
    Postfix,
}

impl Precedence {
    /// The next tighter level; `Postfix` saturates.
    pub const fn tighter(self) -> Precedence {
        match self {
            Precedence::Lowest => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Compare,
            Precedence::Compare => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Prefix,
            Precedence::Prefix | Precedence::Postfix => Precedence::Postfix,
        }
    }
}

impl TokenKind {
    /// Binding power of this kind in infix or postfix position.
    ///
    /// Kinds that never continue an expression return `Lowest`.
    pub const fn precedence(self) -> Precedence {
        match self {
            TokenKind::Or => Precedence::Or,
            TokenKind::And => Precedence::And,
            TokenKind::Eq | TokenKind::Neq => Precedence::Equality,
            TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => Precedence::Compare,
            TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
            TokenKind::Star | TokenKind::Slash | TokenKind::Modulo => Precedence::Multiplicative,
            TokenKind::Dot | TokenKind::LBracket | TokenKind::LParen => Precedence::Postfix,
            _ => Precedence::Lowest,
        }
    }

    pub const fn is_postfix(self) -> bool {
        matches!(self, TokenKind::Dot | TokenKind::LBracket | TokenKind::LParen)
    }
}
