use crate::parse::{ParseError, ParseErrorKind};

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("invalid dice notation: {0}")]
    InvalidNotation(#[from] ParseError),
}

impl RollError {
    pub(crate) fn invalid(kind: ParseErrorKind, slice: impl ToString) -> Self {
        let slice = slice.to_string();
        Self::InvalidNotation(ParseError {
            kind,
            span: 0..slice.len(),
            slice,
        })
    }

    /// The part of the notation that could not be accepted.
    pub fn offending_text(&self) -> &str {
        match self {
            Self::InvalidNotation(err) => &err.slice,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        match self {
            Self::InvalidNotation(err) => &err.kind,
        }
    }
}
