//! The engine's random source.
//!
//! Every random decision in combat, rest, and loot goes through [`Dice`],
//! which callers construct and pass in explicitly. Seeding a
//! [`StdRng`] reproduces an entire campaign session.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random draws.
pub trait Dice {
    /// Uniform integer in `lo..=hi`. Returns `lo` when `hi <= lo`.
    fn roll(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform float in `[0, 1)`, used for percentage checks.
    fn chance(&mut self) -> f64;
}

impl Dice for StdRng {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..=hi)
    }

    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::Dice;

    /// Replays fixed draws. Once a queue runs dry, rolls return the low
    /// bound and chances return 0.99 (no crit, no loot, no bonus).
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedDice {
        rolls: VecDeque<i32>,
        chances: VecDeque<f64>,
    }

    impl ScriptedDice {
        pub(crate) fn new(rolls: &[i32], chances: &[f64]) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                chances: chances.iter().copied().collect(),
            }
        }
    }

    impl Dice for ScriptedDice {
        fn roll(&mut self, lo: i32, hi: i32) -> i32 {
            match self.rolls.pop_front() {
                Some(v) => {
                    assert!(
                        (lo..=hi.max(lo)).contains(&v),
                        "scripted roll {v} outside {lo}..={hi}"
                    );
                    v
                }
                None => lo,
            }
        }

        fn chance(&mut self) -> f64 {
            self.chances.pop_front().unwrap_or(0.99)
        }
    }
}
