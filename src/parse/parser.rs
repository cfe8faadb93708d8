use super::error::ParseError;
use super::lexer::{lexer, Lexer, TokenKind};
use super::spec::DiceSpec;
use crate::common::Int;

type PResult<T> = Result<T, ParseError>;

/// Recursive-descent parser for a single dice term.
///
/// Grammar, after the lexer has skipped whitespace:
/// an optional count (default 1), the letter `d`, the faces value, and an
/// optional explicitly signed modifier (default 0). Nothing may follow.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: lexer(input),
        }
    }

    pub fn parse(mut self) -> PResult<DiceSpec> {
        let count = match self.lexer.peek() {
            Some(&TokenKind::Integer(n)) => {
                self.lexer.next();
                n
            }
            _ => 1,
        };
        self.consume(TokenKind::D)?;
        let faces = self.integer()?;
        let modifier = match self.lexer.next() {
            None => 0,
            Some(TokenKind::Plus) => self.integer()?,
            Some(TokenKind::Minus) => -self.integer()?,
            Some(_) => return self.invalid_format(),
        };
        if self.lexer.next().is_some() {
            return self.invalid_format();
        }
        DiceSpec::new(count, faces, modifier)
    }

    fn integer(&mut self) -> PResult<Int> {
        match self.lexer.next() {
            Some(TokenKind::Integer(n)) => Ok(n),
            _ => self.invalid_format(),
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.invalid_format()
        }
    }

    // Syntax errors carry the original text, spaces and all.
    fn invalid_format<T>(&self) -> PResult<T> {
        Err(ParseError::InvalidFormat(self.input.to_string()))
    }
}
