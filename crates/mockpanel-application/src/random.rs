//! Injectable randomness.
//!
//! Question choice, transition phrases and the closing speaker are all drawn
//! through [`RandomSource`], so tests can replay an exact sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Uniform index picker.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is never 0.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Production source backed by an OS-seeded `StdRng`.
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for demos and property checks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of raw values, each reduced modulo `len`.
///
/// When the sequence runs out it starts over; an empty sequence always
/// yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: VecDeque<usize>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, len: usize) -> usize {
        match self.values.pop_front() {
            Some(value) => {
                self.values.push_back(value);
                value % len
            }
            None => 0,
        }
    }
}
