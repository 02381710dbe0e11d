//! Uniform random draws behind an injectable capability
//!
//! The models never seed or persist the stream; the host decides whether
//! draws come from the thread-local generator, a seeded generator for
//! reproducible runs, or a scripted sequence in tests.

use rand::Rng;

/// Uniform-integer randomness consumed by the scaling models
pub trait RandomSource {
    /// Draw uniformly from `[min, max_inclusive]`
    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32;
}

/// Adapter exposing any `rand::Rng` as a [`RandomSource`]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32 {
        self.0.gen_range(min..=max_inclusive)
    }
}

/// RandomSource over the thread-local generator
pub fn thread_random() -> RngSource<rand::rngs::ThreadRng> {
    RngSource(rand::thread_rng())
}

/// Replays a fixed sequence of draws, ignoring the requested ranges.
///
/// Intended for tests that pin down a specific branch. Panics when the
/// sequence runs out.
pub struct SequenceSource {
    values: Vec<i32>,
    next: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        SequenceSource {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceSource {
    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32 {
        assert!(
            self.next < self.values.len(),
            "SequenceSource exhausted after {} draws",
            self.next
        );
        let value = self.values[self.next];
        self.next += 1;
        debug_assert!(
            value >= min && value <= max_inclusive,
            "scripted draw {value} outside requested range [{min}, {max_inclusive}]"
        );
        value
    }
}
