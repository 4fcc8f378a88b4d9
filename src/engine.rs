//! Engine handle tying the dictionary, graph and generator together

use crate::core::DateKey;
use crate::error::GenerationError;
use crate::game::{Hint, LadderEvaluation, evaluate_attempt, find_hint, is_valid_solution_path};
use crate::graph::WordGraph;
use crate::puzzle::{
    ClientPuzzle, DailyPuzzle, GeneratorConfig, Ladder, LadderShape, PuzzleGenerator,
    sanitize_for_client,
};
use crate::wordlists::Dictionary;

/// Word ladder puzzle engine
///
/// Owns the dictionary and the graph built from it. The graph is built once in
/// the constructor and never mutated, so a single engine can be shared by
/// reference (or behind an `Arc`) across threads.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    dictionary: Dictionary,
    graph: WordGraph,
    config: GeneratorConfig,
}

impl PuzzleEngine {
    /// Create an engine with the default generator settings
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, GeneratorConfig::default())
    }

    #[must_use]
    pub fn with_config(dictionary: Dictionary, config: GeneratorConfig) -> Self {
        let graph = WordGraph::build(dictionary.words());
        Self {
            dictionary,
            graph,
            config,
        }
    }

    /// Engine over the embedded dictionary
    ///
    /// # Examples
    /// ```
    /// use word_rung::core::DateKey;
    /// use word_rung::engine::PuzzleEngine;
    ///
    /// let engine = PuzzleEngine::embedded();
    /// let date = DateKey::parse("2026-02-06").unwrap();
    /// let puzzle = engine.generate_daily_puzzle(date).unwrap();
    ///
    /// assert_eq!(puzzle.ladders.len(), 3);
    /// assert_eq!(puzzle, engine.generate_daily_puzzle(date).unwrap());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Dictionary::embedded())
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generator borrowing this engine's dictionary and graph
    #[must_use]
    pub const fn generator(&self) -> PuzzleGenerator<'_> {
        PuzzleGenerator::new(&self.dictionary, &self.graph, self.config)
    }

    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_daily_puzzle`].
    pub fn generate_daily_puzzle(&self, date: DateKey) -> Result<DailyPuzzle, GenerationError> {
        self.generator().generate_daily_puzzle(date)
    }

    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_offset`].
    pub fn generate_with_offset(
        &self,
        date: DateKey,
        seed_offset: u64,
    ) -> Result<DailyPuzzle, GenerationError> {
        self.generator().generate_with_offset(date, seed_offset)
    }

    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_puzzle_batch`].
    pub fn generate_puzzle_batch(
        &self,
        start: DateKey,
        count: usize,
    ) -> Result<Vec<DailyPuzzle>, GenerationError> {
        self.generator().generate_puzzle_batch(start, count)
    }

    #[must_use]
    pub fn sanitize_for_client(&self, puzzle: &DailyPuzzle, include_solution: bool) -> ClientPuzzle {
        sanitize_for_client(puzzle, include_solution)
    }

    /// Evaluate player entries against this engine's dictionary
    pub fn evaluate_attempt<L, S>(&self, ladder: &L, entries: &[S]) -> LadderEvaluation
    where
        L: LadderShape + ?Sized,
        S: AsRef<str>,
    {
        evaluate_attempt(ladder, &self.dictionary, entries)
    }

    #[must_use]
    pub fn find_hint<L, S>(&self, ladder: &L, entries: &[S]) -> Option<Hint>
    where
        L: LadderShape + ?Sized,
        S: AsRef<str>,
    {
        find_hint(&self.graph, ladder, entries)
    }

    #[must_use]
    pub fn is_valid_solution_path(&self, ladder: &Ladder) -> bool {
        is_valid_solution_path(ladder, &self.dictionary)
    }
}
