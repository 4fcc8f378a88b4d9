//! Core domain types for word ladders
//!
//! This module contains the fundamental value types: validated words, puzzle
//! date keys and the seeded random source. All types here are pure and
//! deterministic.

mod date;
mod random;
mod word;

pub use date::{DateError, DateKey};
pub use random::SeededRandom;
pub use word::{WILDCARD, WORD_LENGTH, Word, WordError, normalize};
