use crate::common::{
    Int, MAXIMAL_DICES_COUNT, MAXIMAL_FACES_COUNT, MINIMAL_DICES_COUNT, MINIMAL_FACES_COUNT,
};
use thiserror::Error;

/// Everything that can go wrong while turning text into a [DiceSpec].
///
/// Variants carry only the offending raw value; the rendered message is a
/// presentation concern and lives in the `#[error]` attributes.
///
/// [DiceSpec]: super::DiceSpec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format {0}")]
    InvalidFormat(String),
    #[error(
        "Invalid dices count {0} (min {min}, max {max})",
        min = MINIMAL_DICES_COUNT,
        max = MAXIMAL_DICES_COUNT
    )]
    InvalidDicesCount(Int),
    #[error(
        "Invalid faces count {0} (min {min}, max {max})",
        min = MINIMAL_FACES_COUNT,
        max = MAXIMAL_FACES_COUNT
    )]
    InvalidFacesCount(Int),
}
