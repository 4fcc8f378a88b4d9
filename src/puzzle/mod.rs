//! Daily puzzle model and generation
//!
//! Puzzles are generated from the date alone, so every instance of the engine
//! agrees on the puzzle of the day without sharing state.

mod config;
mod generator;
mod types;

pub use config::GeneratorConfig;
pub use generator::PuzzleGenerator;
pub use types::{
    ClientPuzzle, DailyPuzzle, LADDERS_PER_PUZZLE, Ladder, LadderRecord, LadderShape,
    MAX_MOVES_RANGE, PAR_RANGE, PublicLadder, PublicPuzzle, PuzzleRecord, sanitize_for_client,
};
