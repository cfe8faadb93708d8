use crate::common::Int;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    // A run of digits too large for `Int` fails the callback and lexes
    // as `Error`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[token("d")]
    #[token("D")]
    D,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_term() {
        assert_eq!(
            lex("2d4+6"),
            vec![
                TokenKind::Integer(2),
                TokenKind::D,
                TokenKind::Integer(4),
                TokenKind::Plus,
                TokenKind::Integer(6),
            ]
        );
    }

    #[test]
    fn test_lex_skips_whitespace() {
        assert_eq!(lex(" 2 d\t4 "), lex("2d4"));
    }

    #[test]
    fn test_lex_upper_case_d() {
        assert_eq!(lex("D"), vec![TokenKind::D]);
    }

    #[test]
    fn test_lex_garbage() {
        assert_eq!(lex("x"), vec![TokenKind::Error]);
    }

    #[test]
    fn test_lex_oversized_integer() {
        assert_eq!(lex("99999999999999999999"), vec![TokenKind::Error]);
    }
}
