mod outcome;
mod roller;

use crate::common::Int;
use crate::parse::DiceSpec;

pub use outcome::RangedRoll;
pub use roller::Roller;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Rolls every die separately and sums the draws: `count` calls to the
/// roller, each over `[1, faces]`, plus the modifier.
pub fn summed<R: Roller>(spec: DiceSpec, roller: &mut R) -> Int {
    let draws: Int = (0..spec.count())
        .map(|_| roller.uniform(1, spec.faces()))
        .sum();
    draws + spec.modifier()
}

/// Estimates a roll with a single draw over the whole range of the dice.
/// Exactly one call to the roller, regardless of the count.
pub fn ranged<R: Roller>(spec: DiceSpec, roller: &mut R) -> RangedRoll {
    let minimal = spec.minimal();
    let maximal = spec.maximal();
    RangedRoll {
        value: roller.uniform(minimal, maximal),
        minimal,
        maximal,
    }
}
