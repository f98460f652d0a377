use super::ast::DiceExpression;
use super::error::{ParseError, ParseErrorKind};
use super::lexer::*;
use crate::common::*;
use crate::limits::Limits;
use crate::ops::{Drop, Explode, Flat, Keep, Modifier};
use logos_iter::LogosIter;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    limits: Limits,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, limits: Limits) -> Self {
        Self {
            source,
            lexer: lexer(source),
            limits,
        }
    }

    pub fn parse(mut self) -> PResult<DiceExpression> {
        if self.lexer.peek().is_none() {
            return self.error_at(ParseErrorKind::Empty, 0..self.source.len());
        }

        let mut expr = self.parse_dice()?;
        expr.modifier = self.parse_modifier()?;
        self.consume_end()?;
        Ok(expr)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn consume_end(&mut self) -> PResult<()> {
        if self.lexer.peek().is_none() {
            Ok(())
        } else {
            self.unexpected_token(vec![])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        let span = self.lexer.span();
        self.error_at(kind, span)
    }

    fn error_at<T>(&self, kind: ParseErrorKind, span: Range<usize>) -> PResult<T> {
        let slice = self.source.get(span.clone()).unwrap_or_default().to_string();
        Err(ParseError { kind, span, slice })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.advance() {
            None => {
                let end = self.source.len();
                self.error_at(ParseErrorKind::UnexpectedToken { found: None, expected }, end..end)
            }
            Some(TokenKind::Error) => self.error(ParseErrorKind::UnexpectedString { expected }),
            found => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
        }
    }

    fn parse_dice(&mut self) -> PResult<DiceExpression> {
        self.consume(TokenKind::Dice)?;
        let span = self.lexer.span();

        // The lexer only produces dice tokens of the form `[0-9]*[dD][0-9]+`
        let Some(delim) = self.source[span.clone()].find(|c: char| c.eq_ignore_ascii_case(&'d')) else {
            return self.error(ParseErrorKind::UnexpectedString {
                expected: vec![TokenKind::Dice],
            });
        };
        let delim = span.start + delim;
        let count_span = span.start..delim;
        let sides_span = delim + 1..span.end;

        let count = if count_span.is_empty() {
            1
        } else {
            self.parse_uint(count_span.clone())?
        };
        let Some(count) = NonZeroUInt::new(count) else {
            return self.error_at(ParseErrorKind::ZeroDice, count_span);
        };
        if count.get() > self.limits.max_dice() {
            let max = self.limits.max_dice();
            return self.error_at(ParseErrorKind::TooManyDice { max }, count_span);
        }

        let sides = self.parse_uint(sides_span.clone())?;
        let Some(sides) = NonZeroUInt::new(sides) else {
            return self.error_at(ParseErrorKind::ZeroSides, sides_span);
        };

        Ok(DiceExpression::new(count, sides))
    }

    fn parse_modifier(&mut self) -> PResult<Option<Modifier>> {
        let Some(&kind) = self.lexer.peek() else {
            return Ok(None);
        };
        if !TokenKind::MODIFIERS.contains(&kind) {
            return self.unexpected_token(TokenKind::MODIFIERS.to_vec());
        }
        self.advance();

        let modifier: Modifier = match kind {
            TokenKind::Plus => Flat::add(self.parse_integer()?).into(),
            TokenKind::Minus => Flat::subtract(self.parse_integer()?).into(),
            TokenKind::KeepHighest => Keep::highest(self.parse_selection_count()?).into(),
            TokenKind::KeepLowest => Keep::lowest(self.parse_selection_count()?).into(),
            TokenKind::DropLowest => Drop::lowest(self.parse_selection_count()?).into(),
            TokenKind::DropHighest => Drop::highest(self.parse_selection_count()?).into(),
            _ => Explode.into(),
        };
        Ok(Some(modifier))
    }

    fn parse_integer(&mut self) -> PResult<UInt> {
        self.consume(TokenKind::Integer)?;
        let span = self.lexer.span();
        self.parse_uint(span)
    }

    /// Keep and drop counts are optional and default to one die.
    ///
    /// A count past `UInt::MAX` saturates.
    fn parse_selection_count(&mut self) -> PResult<UInt> {
        if !self.matches(TokenKind::Integer) {
            return Ok(1);
        }
        self.advance();
        let span = self.lexer.span();
        Ok(self.source[span].parse().unwrap_or(UInt::MAX))
    }

    fn parse_uint(&self, span: Range<usize>) -> PResult<UInt> {
        match self.source[span.clone()].parse() {
            Ok(x) => Ok(x),
            Err(_) => self.error_at(ParseErrorKind::IntegerOverflow, span),
        }
    }
}
