pub use vec1::vec1;

/// The integer type used for counts, faces, modifiers, and roll outcomes.
pub type Int = i64;

pub type NonEmpty<T> = vec1::Vec1<T>;

pub const MINIMAL_DICES_COUNT: Int = 1;
pub const MAXIMAL_DICES_COUNT: Int = 100;
pub const MINIMAL_FACES_COUNT: Int = 2;
pub const MAXIMAL_FACES_COUNT: Int = 1_000_000;
