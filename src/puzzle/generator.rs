//! Daily puzzle generation
//!
//! A puzzle is a pure function of its date (and an optional seed offset):
//! the date's digits seed one `SeededRandom` per ladder, and every collection
//! the generator draws from is iterated in sorted order.

use super::config::GeneratorConfig;
use super::types::{DailyPuzzle, LADDERS_PER_PUZZLE, Ladder};
use crate::core::{DateKey, SeededRandom, Word};
use crate::error::GenerationError;
use crate::graph::{WordGraph, distances_from, shortest_path};
use crate::wordlists::Dictionary;
use log::{debug, trace, warn};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

const NAME_ADJECTIVES: [&str; 8] = [
    "Clever", "Bright", "Swift", "Sharp", "Nimble", "Bold", "Neat", "Tricky",
];

const NAME_NOUNS: [&str; 6] = ["Rungs", "Bridges", "Ladders", "Jumps", "Links", "Threads"];

/// Deterministic daily puzzle generator
///
/// Borrows the shared dictionary and graph; holds no mutable state, so one
/// generator can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    dictionary: &'a Dictionary,
    graph: &'a WordGraph,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Create a generator over a dictionary and the graph built from it
    #[must_use]
    pub const fn new(
        dictionary: &'a Dictionary,
        graph: &'a WordGraph,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            dictionary,
            graph,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the puzzle for `date`
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Exhausted` if any ladder cannot be built within
    /// the attempt budget, or `GenerationError::EmptyInput` for an empty dictionary.
    pub fn generate_daily_puzzle(&self, date: DateKey) -> Result<DailyPuzzle, GenerationError> {
        self.generate_with_offset(date, 0)
    }

    /// Generate the puzzle for `date` with its seed shifted by `seed_offset`
    ///
    /// Offset 0 is the canonical puzzle for the date. Callers can retry a
    /// failed date with another offset; the generator never does so itself.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_daily_puzzle`].
    pub fn generate_with_offset(
        &self,
        date: DateKey,
        seed_offset: u64,
    ) -> Result<DailyPuzzle, GenerationError> {
        let seed = date
            .seed()
            .wrapping_add(seed_offset.wrapping_mul(self.config.offset_seed_stride));

        let mut blocked: FxHashSet<Word> = FxHashSet::default();
        let mut ladders = Vec::with_capacity(LADDERS_PER_PUZZLE);

        for index in 0..LADDERS_PER_PUZZLE {
            let (min_par, max_par) = self.config.par_band_for(index);
            let ladder_seed =
                seed.wrapping_add(index as u64 * self.config.ladder_seed_stride);

            let ladder = self.generate_ladder(index, min_par, max_par, &blocked, ladder_seed)?;
            blocked.extend(ladder.solution.iter().cloned());
            ladders.push(ladder);
        }

        Ok(DailyPuzzle {
            id: format!("puzzle-{date}"),
            puzzle_date: date,
            name: puzzle_name(seed),
            seed,
            created_at: date.timestamp(),
            ladders,
        })
    }

    /// Generate `count` consecutive daily puzzles starting at `start`
    ///
    /// Puzzle `i` is the puzzle for `start + i` days with seed offset `i`.
    /// Dates are generated in parallel; the result is in date order and equal
    /// to generating them one by one.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidBatchSize` before doing any work if
    /// `count` is outside `1..=max_batch_size`, otherwise the failure of the
    /// earliest date that could not be generated.
    pub fn generate_puzzle_batch(
        &self,
        start: DateKey,
        count: usize,
    ) -> Result<Vec<DailyPuzzle>, GenerationError> {
        let max = self.config.max_batch_size;
        if !(1..=max).contains(&count) {
            return Err(GenerationError::InvalidBatchSize { count, min: 1, max });
        }

        let dates = (0..count)
            .map(|offset| -> Result<(DateKey, u64), GenerationError> {
                let date = start.add_days(offset as i64)?;
                Ok((date, offset as u64))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let results: Vec<Result<DailyPuzzle, GenerationError>> = dates
            .into_par_iter()
            .map(|(date, offset)| self.generate_with_offset(date, offset))
            .collect();

        results.into_iter().collect()
    }

    /// Build one ladder whose par lies in `min_par..=max_par` and whose
    /// solution avoids every `blocked` word
    fn generate_ladder(
        &self,
        index: usize,
        min_par: usize,
        max_par: usize,
        blocked: &FxHashSet<Word>,
        seed: u64,
    ) -> Result<Ladder, GenerationError> {
        let mut random = SeededRandom::new(seed);
        let max_depth = self.config.search_depth(max_par);
        let vocabulary = self.dictionary.words();
        let par_band = min_par..=max_par;

        for attempt in 0..self.config.attempt_limit {
            let start = random.pick(vocabulary)?;
            if blocked.contains(start) {
                continue;
            }

            let candidates: Vec<&Word> = distances_from(self.graph, start.text(), max_depth)
                .into_iter()
                .filter(|&(word, distance)| {
                    word != start && !blocked.contains(word) && par_band.contains(&distance)
                })
                .map(|(word, _)| word)
                .collect();
            let candidates = random.shuffle(&candidates);

            for end in candidates.into_iter().take(self.config.candidate_sample) {
                let Some(path) = shortest_path(self.graph, start.text(), end.text(), max_depth)
                else {
                    continue;
                };

                let par = path.len() - 1;
                if !par_band.contains(&par) {
                    trace!("{start}->{end}: par {par} outside {min_par}..={max_par}");
                    continue;
                }

                if path
                    .iter()
                    .any(|word| blocked.contains(word) || !self.dictionary.contains(word.text()))
                {
                    trace!("{start}->{end}: path reuses a blocked word");
                    continue;
                }

                debug!(
                    "ladder L{} {start}->{end} par {par} after {} attempt(s)",
                    index + 1,
                    attempt + 1
                );

                return Ok(Ladder {
                    id: format!("L{}", index + 1),
                    start: start.clone(),
                    end: end.clone(),
                    par,
                    max_moves: par + self.config.extra_move_allowance,
                    solution: path,
                });
            }
        }

        warn!(
            "no ladder with par {min_par}..={max_par} for seed {seed} after {} attempts",
            self.config.attempt_limit
        );

        Err(GenerationError::Exhausted {
            ladder: index + 1,
            min_par,
            max_par,
            attempts: self.config.attempt_limit,
        })
    }
}

/// Display name such as "Neat Threads #206"
fn puzzle_name(seed: u64) -> String {
    let adjective = NAME_ADJECTIVES[(seed % NAME_ADJECTIVES.len() as u64) as usize];
    let noun = NAME_NOUNS[((seed / 7) % NAME_NOUNS.len() as u64) as usize];
    let digits = seed.to_string();
    let tag = &digits[digits.len().saturating_sub(3)..];
    format!("{adjective} {noun} #{tag}")
}
