use super::error::ParseError;
use crate::common::{
    Int, MAXIMAL_DICES_COUNT, MAXIMAL_FACES_COUNT, MINIMAL_DICES_COUNT, MINIMAL_FACES_COUNT,
};
use std::fmt;
use std::str::FromStr;

/// A validated dice term: `count` dice with `faces` faces each, plus a flat
/// `modifier`.
///
/// A `DiceSpec` can only be obtained with its bounds already checked, either
/// through [DiceSpec::new] or by parsing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceSpec {
    count: Int,
    faces: Int,
    modifier: Int,
}

impl DiceSpec {
    /// Checks `count` against `[MINIMAL_DICES_COUNT, MAXIMAL_DICES_COUNT]`,
    /// then `faces` against `[MINIMAL_FACES_COUNT, MAXIMAL_FACES_COUNT]`.
    /// The modifier is unrestricted.
    pub fn new(count: Int, faces: Int, modifier: Int) -> Result<Self, ParseError> {
        if !(MINIMAL_DICES_COUNT..=MAXIMAL_DICES_COUNT).contains(&count) {
            return Err(ParseError::InvalidDicesCount(count));
        }
        if !(MINIMAL_FACES_COUNT..=MAXIMAL_FACES_COUNT).contains(&faces) {
            return Err(ParseError::InvalidFacesCount(faces));
        }
        Ok(Self {
            count,
            faces,
            modifier,
        })
    }

    pub const fn count(&self) -> Int {
        self.count
    }

    pub const fn faces(&self) -> Int {
        self.faces
    }

    pub const fn modifier(&self) -> Int {
        self.modifier
    }

    /// Smallest value a roll of these dice can produce.
    pub const fn minimal(&self) -> Int {
        self.count + self.modifier
    }

    /// Largest value a roll of these dice can produce.
    pub const fn maximal(&self) -> Int {
        self.count * self.faces + self.modifier
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{}", m),
            m => write!(f, "{}", m),
        }
    }
}

impl FromStr for DiceSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_count_before_faces() {
        assert_eq!(
            DiceSpec::new(0, 0, 0),
            Err(ParseError::InvalidDicesCount(0))
        );
        assert_eq!(
            DiceSpec::new(2, 1, 0),
            Err(ParseError::InvalidFacesCount(1))
        );
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(DiceSpec::new(1, 2, 0).is_ok());
        assert!(DiceSpec::new(100, 1_000_000, -42).is_ok());
    }

    #[test]
    fn test_minimal_maximal() {
        let spec = DiceSpec::new(2, 4, -2).unwrap();
        assert_eq!(spec.minimal(), 0);
        assert_eq!(spec.maximal(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceSpec::new(2, 6, 1).unwrap().to_string(), "2d6+1");
        assert_eq!(DiceSpec::new(3, 8, -2).unwrap().to_string(), "3d8-2");
        assert_eq!(DiceSpec::new(1, 4, 0).unwrap().to_string(), "1d4");
    }

    #[test]
    fn test_from_str_round_trip() {
        let spec: DiceSpec = "3d8-2".parse().unwrap();
        assert_eq!(spec, DiceSpec::new(3, 8, -2).unwrap());
        assert_eq!(spec.to_string().parse::<DiceSpec>().unwrap(), spec);
    }
}
