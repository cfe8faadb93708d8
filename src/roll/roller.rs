use crate::common::Int;
use rand::Rng;

/// A source of uniform random draws over a closed interval.
///
/// The calculator never owns entropy; callers inject whatever implements
/// this, which is how tests substitute deterministic draws.
pub trait Roller {
    /// Draws one integer uniformly from `[lo, hi]` inclusive.
    fn uniform(&mut self, lo: Int, hi: Int) -> Int;
}

impl<R: Rng> Roller for R {
    fn uniform(&mut self, lo: Int, hi: Int) -> Int {
        self.gen_range(lo..=hi)
    }
}

#[cfg(test)]
pub(crate) use mock::MockRoller;

#[cfg(test)]
mod mock {
    use super::*;

    enum Draw {
        Lo,
        Hi,
    }

    /// Records every requested interval and answers with its low or high
    /// bound.
    pub(crate) struct MockRoller {
        draw: Draw,
        pub calls: Vec<(Int, Int)>,
    }

    impl MockRoller {
        pub fn lo() -> Self {
            Self {
                draw: Draw::Lo,
                calls: Vec::new(),
            }
        }

        pub fn hi() -> Self {
            Self {
                draw: Draw::Hi,
                calls: Vec::new(),
            }
        }
    }

    impl Roller for MockRoller {
        fn uniform(&mut self, lo: Int, hi: Int) -> Int {
            self.calls.push((lo, hi));
            match self.draw {
                Draw::Lo => lo,
                Draw::Hi => hi,
            }
        }
    }
}
