//! Parsing and rolling of tabletop dice notation such as `2d6+1` or
//! `d4; 2d6, 3d8+4`.
//!
//! [parse()] turns one term into a validated [DiceSpec], [parse_all()]
//! handles separated lists. [roll::summed] rolls die by die; [roll::ranged] makes a
//! single draw over the term's whole range. Both take any [Roller], so
//! callers control the entropy source.

mod common;
pub mod parse;
pub mod roll;

pub use common::{
    Int, NonEmpty, MAXIMAL_DICES_COUNT, MAXIMAL_FACES_COUNT, MINIMAL_DICES_COUNT,
    MINIMAL_FACES_COUNT,
};
pub use parse::{parse, parse_all, DiceSpec, ParseError};
pub use roll::{DefaultRoller, RangedRoll, Roller};

/// Parses `input` and rolls every term die by die with the thread-local rng.
pub fn roll(input: &str) -> Result<NonEmpty<Int>, ParseError> {
    let mut rng = rand::thread_rng();
    Ok(parse_all(input)?.mapped(|spec| roll::summed(spec, &mut rng)))
}

/// Parses `input` and estimates every term with a single ranged draw.
pub fn roll_ranged(input: &str) -> Result<NonEmpty<RangedRoll>, ParseError> {
    let mut rng = rand::thread_rng();
    Ok(parse_all(input)?.mapped(|spec| roll::ranged(spec, &mut rng)))
}
