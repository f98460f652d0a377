pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::TokenKind;

use crate::limits::Limits;

pub(crate) fn parse(s: &str, limits: Limits) -> Result<ast::DiceExpression, ParseError> {
    parser::Parser::new(s, limits).parse()
}
