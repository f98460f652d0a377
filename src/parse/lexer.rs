use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    #[regex(r"[0-9]*[dD][0-9]+")]
    Dice,
    #[regex(r"[0-9]+")]
    Integer,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[kK]")]
    #[regex(r"[kK][hH]")]
    KeepHighest,
    #[regex(r"[kK][lL]")]
    KeepLowest,
    #[regex(r"[lL]")]
    #[regex(r"[dD][lL]")]
    DropLowest,
    #[regex(r"[dD][hH]")]
    DropHighest,
    #[regex(r"[eE]")]
    #[token("!")]
    Explode,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const MODIFIERS: &'static [Self] = &[
        Self::Plus,
        Self::Minus,
        Self::KeepHighest,
        Self::KeepLowest,
        Self::DropLowest,
        Self::DropHighest,
        Self::Explode,
    ];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Dice => "<dice>",
            Integer => "<integer>",
            Plus => "'+'",
            Minus => "'-'",
            KeepHighest => "'k'",
            KeepLowest => "'kl'",
            DropLowest => "'l'",
            DropHighest => "'dh'",
            Explode => "'e'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
