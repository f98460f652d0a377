use super::lexer::TokenKind;
use crate::common::UInt;
use std::fmt;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    Empty,
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    UnexpectedString {
        expected: Vec<TokenKind>,
    },
    ZeroDice,
    ZeroSides,
    TooManyDice {
        max: UInt,
    },
    IntegerOverflow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no dice to roll"),
            Self::UnexpectedToken { found, expected } => {
                match found {
                    Some(found) => write!(f, "unexpected token: found {}, expected ", found)?,
                    None => f.write_str("unexpected end of notation: expected ")?,
                }
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                f.write_str("expected ")?;
                fmt_expected(expected, f)
            }
            Self::ZeroDice => f.write_str("at least one die must be rolled"),
            Self::ZeroSides => f.write_str("dice must have at least one side"),
            Self::TooManyDice { max } => write!(f, "cannot roll more than {} dice at once", max),
            Self::IntegerOverflow => f.write_str("number is too large"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => f.write_str("end of notation"),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: ParseErrorKind) -> String {
        ParseError {
            kind,
            span: 2..3,
            slice: "x".to_string(),
        }
        .to_string()
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            message(ParseErrorKind::TooManyDice { max: 100 }),
            "error at position 2 (\"x\"): cannot roll more than 100 dice at once"
        );
        assert_eq!(
            message(ParseErrorKind::UnexpectedToken {
                found: Some(TokenKind::Integer),
                expected: vec![],
            }),
            "error at position 2 (\"x\"): unexpected token: found <integer>, expected end of notation"
        );
        assert_eq!(
            message(ParseErrorKind::UnexpectedString {
                expected: vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Explode],
            }),
            "error at position 2 (\"x\"): expected '+', '-', or 'e'"
        );
        assert_eq!(
            message(ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec![TokenKind::Integer],
            }),
            "error at position 2 (\"x\"): unexpected end of notation: expected <integer>"
        );
    }
}
