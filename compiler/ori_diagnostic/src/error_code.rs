//! Error codes for front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Malformed number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token, or a missing delimiter or keyword
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,
    /// Unsupported type in this position
    E1004,
    /// Malformed list (leading, trailing or missing comma)
    E1005,
    /// Chained comparison
    E1006,
    /// Assignment in `if` condition
    E1007,
    /// `break` / `continue` outside a loop
    E1008,
    /// Misplaced `fallthrough`, or junk after a branch statement
    E1009,
    /// Multiple `default` clauses in a switch
    E1010,
    /// Invalid `for` init or post clause
    E1011,
    /// Unsupported statement
    E1012,
    /// Declaration not allowed at file scope
    E1013,
    /// Enum or sum type without members
    E1014,
    /// Expressions or statements nested too deeply
    E1015,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 18] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1006"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
