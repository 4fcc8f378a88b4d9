//! Engine error types

use crate::core::{DateError, Word, WordError};
use thiserror::Error;

/// A random pick was requested from an empty candidate list
///
/// This points at a logic or data error (for example an empty dictionary),
/// never at bad player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick from an empty collection")]
pub struct EmptyInputError;

/// Failure to produce a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No ladder satisfied the par band within the attempt budget
    #[error(
        "unable to generate ladder {ladder} (par {min_par}..={max_par}) after {attempts} attempts"
    )]
    Exhausted {
        ladder: usize,
        min_par: usize,
        max_par: usize,
        attempts: usize,
    },

    /// Batch size outside the allowed bound; rejected before any generation
    #[error("puzzle batch size must be between {min} and {max}, got {count}")]
    InvalidBatchSize { count: usize, min: usize, max: usize },

    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// A persisted ladder or puzzle that does not satisfy the puzzle invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("maxMoves ({max_moves}) must be at least par ({par})")]
    MovesBelowPar { par: usize, max_moves: usize },

    #[error("a puzzle must have exactly {expected} ladders, got {actual}")]
    LadderCount { expected: usize, actual: usize },

    #[error("solution of ladder {ladder} starts at \"{found}\" instead of \"{expected}\"")]
    SolutionStart {
        ladder: String,
        expected: Word,
        found: Word,
    },

    #[error("solution of ladder {ladder} ends at \"{found}\" instead of \"{expected}\"")]
    SolutionEnd {
        ladder: String,
        expected: Word,
        found: Word,
    },

    #[error("ladder {ladder} has par {par} but its solution takes {moves} moves")]
    ParMismatch {
        ladder: String,
        par: usize,
        moves: usize,
    },

    #[error("ladder {ladder} steps from \"{from}\" to \"{to}\", which are not one letter apart")]
    NotAdjacent { ladder: String, from: Word, to: Word },

    #[error("ladder {ladder} uses \"{word}\" more than once")]
    RepeatedWord { ladder: String, word: Word },

    #[error("\"{word}\" appears in the solutions of both {first} and {second}")]
    SharedWord {
        word: Word,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Date(#[from] DateError),
}
