//! Evaluate command
//!
//! Checks a player's entries for an arbitrary start/end pair and suggests the
//! next step.

use crate::core::Word;
use crate::engine::PuzzleEngine;
use crate::game::{Hint, LadderEvaluation, solve_ladder};
use crate::puzzle::PublicLadder;
use anyhow::{Result, bail};

/// Result of evaluating entries against an ad-hoc ladder
#[derive(Debug, Clone)]
pub struct EvaluateResult {
    pub ladder: PublicLadder,
    pub evaluation: LadderEvaluation,
    pub hint: Option<Hint>,
}

/// Evaluate `entries` on the ladder from `start` to `end`
///
/// The ladder's par is the shortest path length within `max_moves`.
///
/// # Errors
///
/// Returns an error if either endpoint is not a valid dictionary word, or if
/// the end cannot be reached from the start within `max_moves`.
pub fn evaluate_entries(
    engine: &PuzzleEngine,
    start: &str,
    end: &str,
    max_moves: usize,
    entries: &[String],
) -> Result<EvaluateResult> {
    let start = Word::new(start)?;
    let end = Word::new(end)?;

    for word in [&start, &end] {
        if !engine.dictionary().contains(word.text()) {
            bail!("\"{word}\" is not in the dictionary");
        }
    }

    let mut ladder = PublicLadder {
        id: "custom".to_string(),
        start,
        end,
        par: 0,
        max_moves,
    };

    let Some(path) = solve_ladder(engine.graph(), &ladder) else {
        bail!(
            "no ladder from \"{}\" to \"{}\" within {max_moves} moves",
            ladder.start,
            ladder.end
        );
    };
    ladder.par = path.len() - 1;

    let evaluation = engine.evaluate_attempt(&ladder, entries);
    let hint = if evaluation.is_solved() {
        None
    } else {
        engine.find_hint(&ladder, entries)
    };

    Ok(EvaluateResult {
        ladder,
        evaluation,
        hint,
    })
}
