//! Seeded pseudo-random source
//!
//! A small mulberry32 generator. Output depends only on the seed, so puzzles
//! generated from the same seed are identical on every platform and run.

use crate::error::EmptyInputError;
use rand::RngCore;

/// 2^32, the divisor mapping a raw `u32` into `[0, 1)`
const U32_RANGE: f64 = 4_294_967_296.0;

/// Reproducible random sequence
///
/// Each instance owns its state; create a fresh one per generation call.
///
/// # Examples
/// ```
/// use word_rung::core::SeededRandom;
///
/// let mut a = SeededRandom::new(7);
/// let mut b = SeededRandom::new(7);
/// assert_eq!(a.next_f64(), b.next_f64());
/// assert_eq!(a.shuffle(&[1, 2, 3, 4]), b.shuffle(&[1, 2, 3, 4]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a generator from a seed
    ///
    /// Only the low 32 bits of the seed are used.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Advance the state and return the next raw 32-bit output
    fn advance(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.advance()) / U32_RANGE
    }

    /// Next integer in `[0, n)`; always 0 when `n` is 0
    pub fn int_below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize
    }

    /// Pick one element
    ///
    /// # Errors
    /// Returns `EmptyInputError` if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, EmptyInputError> {
        if items.is_empty() {
            return Err(EmptyInputError);
        }
        Ok(&items[self.int_below(items.len())])
    }

    /// Fisher-Yates shuffle into a new vector, leaving `items` untouched
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.int_below(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.advance());
        let high = u64::from(self.advance());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
