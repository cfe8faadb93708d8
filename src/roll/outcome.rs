use crate::common::Int;
use std::fmt;

/// Outcome of a ranged roll: the drawn value together with the interval it
/// was drawn from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RangedRoll {
    pub value: Int,
    pub minimal: Int,
    pub maximal: Int,
}

impl fmt::Display for RangedRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}..{})", self.value, self.minimal, self.maximal)
    }
}
