mod error;
mod lexer;
mod parser;
mod spec;

pub use error::ParseError;
pub use spec::DiceSpec;

use crate::common::NonEmpty;

/// Parses a single dice term such as `2d6+1` or `d4`.
pub fn parse(input: &str) -> Result<DiceSpec, ParseError> {
    parser::Parser::new(input).parse()
}

/// Splits `input` on runs of commas, semicolons, and whitespace, then parses
/// every term in order, stopping at the first failure.
pub fn parse_all(input: &str) -> Result<NonEmpty<DiceSpec>, ParseError> {
    let specs = input
        .split(is_separator)
        .filter(|term| !term.is_empty())
        .map(parse)
        .collect::<Result<Vec<_>, _>>()?;
    NonEmpty::try_from_vec(specs).map_err(|_| ParseError::InvalidFormat(input.to_string()))
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}
