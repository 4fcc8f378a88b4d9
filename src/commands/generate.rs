//! Generate command
//!
//! Produces the puzzle for one date, or a batch of consecutive dates.

use crate::core::DateKey;
use crate::engine::PuzzleEngine;
use crate::error::GenerationError;
use crate::puzzle::DailyPuzzle;
use std::time::{Duration, Instant};

/// Result of generating one or more puzzles
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub puzzles: Vec<DailyPuzzle>,
    pub duration: Duration,
}

/// Generate the puzzle for `date` with the given seed offset
///
/// # Errors
///
/// Returns the generator's error if no puzzle can be built for the date.
pub fn generate_puzzle(
    engine: &PuzzleEngine,
    date: DateKey,
    offset: u64,
) -> Result<GenerateResult, GenerationError> {
    let start = Instant::now();
    let puzzle = engine.generate_with_offset(date, offset)?;

    Ok(GenerateResult {
        puzzles: vec![puzzle],
        duration: start.elapsed(),
    })
}

/// Generate `count` puzzles for consecutive dates starting at `start_date`
///
/// # Errors
///
/// Returns `GenerationError::InvalidBatchSize` for an out-of-range `count`,
/// or the first generation failure.
pub fn generate_batch(
    engine: &PuzzleEngine,
    start_date: DateKey,
    count: usize,
) -> Result<GenerateResult, GenerationError> {
    let start = Instant::now();
    let puzzles = engine.generate_puzzle_batch(start_date, count)?;

    Ok(GenerateResult {
        puzzles,
        duration: start.elapsed(),
    })
}
