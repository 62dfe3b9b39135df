//! Numeric literal classification.
//!
//! The scanner hands over a maximal run of digits, dots, `_` and `,`
//! separators. Whether that run is an integer, a float or malformed is
//! decided here.

use ori_ir::TokenKind;

/// Classify a numeric run.
///
/// - more than one dot, a dot at either end, or a trailing `_` or `,`
///   is [`TokenKind::Illegal`];
/// - one dot is [`TokenKind::FloatLit`];
/// - otherwise [`TokenKind::IntLit`].
pub fn classify_number(lexeme: &str) -> TokenKind {
    let bytes = lexeme.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return TokenKind::Illegal;
    };
    if !bytes.iter().any(u8::is_ascii_digit) {
        return TokenKind::Illegal;
    }

    let dots = bytes.iter().filter(|&&b| b == b'.').count();
    if dots > 1 || first == b'.' || matches!(last, b'.' | b'_' | b',') {
        return TokenKind::Illegal;
    }

    if dots == 1 {
        TokenKind::FloatLit
    } else {
        TokenKind::IntLit
    }
}
