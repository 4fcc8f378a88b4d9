//! Player attempt validation
//!
//! Rules are checked in a fixed order and the first failure wins, so the
//! player always sees the earliest problem in their ladder.

use crate::core::{WORD_LENGTH, Word, normalize};
use crate::puzzle::{Ladder, LadderShape};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// Outcome of evaluating one ladder attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    /// The chain reaches the end word
    Solved,
    /// The chain breaks a rule
    Invalid,
    /// The chain is valid so far but does not reach the end word yet
    Incomplete,
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Solved => "solved",
            Self::Invalid => "invalid",
            Self::Incomplete => "incomplete",
        };
        f.write_str(label)
    }
}

/// Result of [`evaluate_attempt`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderEvaluation {
    pub status: EvaluationStatus,
    /// Human-readable explanation of the status
    pub message: String,
    pub moves_used: usize,
    /// Normalized entries accepted before the evaluation stopped
    pub words: Vec<Word>,
}

impl LadderEvaluation {
    fn new(
        status: EvaluationStatus,
        message: impl Into<String>,
        moves_used: usize,
        words: Vec<Word>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            moves_used,
            words,
        }
    }

    fn invalid(message: impl Into<String>, moves_used: usize, words: Vec<Word>) -> Self {
        Self::new(EvaluationStatus::Invalid, message, moves_used, words)
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == EvaluationStatus::Solved
    }
}

/// Evaluate a player's intermediate words for a ladder
///
/// `entries` are the words between start and end, top to bottom. Blank
/// entries are allowed only after the last filled one. A move is one word
/// change, so `moves_used` is the number of filled entries plus the final
/// step onto the end word.
///
/// Never fails: every problem is reported through the returned status.
///
/// # Examples
/// ```
/// use word_rung::core::Word;
/// use word_rung::game::{EvaluationStatus, evaluate_attempt};
/// use word_rung::puzzle::Ladder;
/// use word_rung::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm"]);
/// let ladder = Ladder {
///     id: "L1".to_string(),
///     start: Word::new("cold").unwrap(),
///     end: Word::new("warm").unwrap(),
///     par: 4,
///     max_moves: 8,
///     solution: Vec::new(),
/// };
///
/// let result = evaluate_attempt(&ladder, &dictionary, &["cord", "card", "ward"]);
/// assert_eq!(result.status, EvaluationStatus::Solved);
/// assert_eq!(result.moves_used, 4);
/// ```
pub fn evaluate_attempt<L, S>(ladder: &L, dictionary: &Dictionary, entries: &[S]) -> LadderEvaluation
where
    L: LadderShape + ?Sized,
    S: AsRef<str>,
{
    let mut words: Vec<Word> = Vec::with_capacity(entries.len());
    let mut hit_gap = false;

    for raw in entries {
        let entry = normalize(raw.as_ref());
        if entry.is_empty() {
            hit_gap = true;
            continue;
        }

        if hit_gap {
            return LadderEvaluation::invalid(
                "Fill in words from top to bottom with no gaps.",
                0,
                words,
            );
        }

        let Ok(word) = Word::new(&entry) else {
            let moves_used = words.len();
            return LadderEvaluation::invalid(
                format!("\"{entry}\" must be exactly {WORD_LENGTH} letters."),
                moves_used,
                words,
            );
        };

        if !dictionary.contains(word.text()) {
            let moves_used = words.len();
            return LadderEvaluation::invalid(
                format!("\"{entry}\" is not in the dictionary."),
                moves_used,
                words,
            );
        }

        words.push(word);
    }

    let moves_used = words.len() + 1;
    if moves_used > ladder.max_moves() {
        return LadderEvaluation::invalid(
            format!("This ladder allows at most {} moves.", ladder.max_moves()),
            moves_used,
            words,
        );
    }

    let mut visited: FxHashSet<&Word> = FxHashSet::default();
    visited.insert(ladder.start());
    let mut current = ladder.start();

    for word in &words {
        if !visited.insert(word) {
            return LadderEvaluation::invalid(
                "You cannot reuse words in the same ladder.",
                moves_used,
                words.clone(),
            );
        }

        if !current.is_adjacent(word) {
            return LadderEvaluation::invalid(
                format!("\"{word}\" must differ from \"{current}\" by one letter."),
                moves_used,
                words.clone(),
            );
        }

        current = word;
    }

    if visited.contains(ladder.end()) {
        return LadderEvaluation::invalid(
            "The target word can only appear at the end.",
            moves_used,
            words,
        );
    }

    if !current.is_adjacent(ladder.end()) {
        return LadderEvaluation::new(
            EvaluationStatus::Incomplete,
            "Not connected yet. Add another bridge word.",
            moves_used,
            words,
        );
    }

    LadderEvaluation::new(EvaluationStatus::Solved, "Solved!", moves_used, words)
}

/// Check a ladder's stored solution against the ladder invariants
///
/// The solution must run from `start` to `end` in exactly `par` moves using
/// distinct dictionary words, each one letter away from the previous.
#[must_use]
pub fn is_valid_solution_path(ladder: &Ladder, dictionary: &Dictionary) -> bool {
    let solution = &ladder.solution;
    if solution.len() != ladder.par + 1 {
        return false;
    }

    if solution.first() != Some(&ladder.start) || solution.last() != Some(&ladder.end) {
        return false;
    }

    let mut used: FxHashSet<&Word> = FxHashSet::default();
    for (index, word) in solution.iter().enumerate() {
        if !dictionary.contains(word.text()) || !used.insert(word) {
            return false;
        }
        if index > 0 && !solution[index - 1].is_adjacent(word) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateKey;
    use crate::graph::WordGraph;
    use crate::puzzle::{GeneratorConfig, PuzzleGenerator};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "bold",
        ])
    }

    fn cold_to_warm() -> Ladder {
        Ladder {
            id: "L1".to_string(),
            start: word("cold"),
            end: word("warm"),
            par: 4,
            max_moves: 8,
            solution: ["cold", "cord", "card", "ward", "warm"]
                .into_iter()
                .map(word)
                .collect(),
        }
    }

    fn evaluate(entries: &[&str]) -> LadderEvaluation {
        evaluate_attempt(&cold_to_warm(), &dictionary(), entries)
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn valid_chain_is_solved() {
        let result = evaluate(&["cord", "card", "ward"]);
        assert_eq!(result.status, EvaluationStatus::Solved);
        assert_eq!(result.moves_used, 4);
        assert_eq!(result.message, "Solved!");
        assert!(result.is_solved());
    }

    #[test]
    fn longer_chain_uses_more_moves() {
        // cold -> cord -> word -> worm -> warm is also legal, at par
        let result = evaluate(&["cord", "word", "worm"]);
        assert_eq!(result.status, EvaluationStatus::Solved);
        assert_eq!(result.moves_used, 4);

        let result = evaluate(&["cord", "core", "wore", "word", "ward"]);
        assert_eq!(result.status, EvaluationStatus::Solved);
        assert_eq!(result.moves_used, 6);
    }

    #[test]
    fn unconnected_chain_is_incomplete() {
        let result = evaluate(&["cord"]);
        assert_eq!(result.status, EvaluationStatus::Incomplete);
        assert_eq!(result.moves_used, 2);
        assert!(result.message.contains("Not connected yet"));
    }

    #[test]
    fn no_entries_is_incomplete() {
        let result = evaluate(&[]);
        assert_eq!(result.status, EvaluationStatus::Incomplete);
        assert_eq!(result.moves_used, 1);

        let result = evaluate(&["", "  "]);
        assert_eq!(result.status, EvaluationStatus::Incomplete);
        assert_eq!(result.moves_used, 1);
    }

    #[test]
    fn dictionary_misses_are_invalid() {
        let result = evaluate(&["zzzz"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert!(result.message.contains("not in the dictionary"));
        assert_eq!(result.moves_used, 0);
    }

    #[test]
    fn gaps_are_invalid() {
        let result = evaluate(&["cord", "", "card"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert!(result.message.contains("no gaps"));
        assert_eq!(result.moves_used, 0);
        assert_eq!(texts(&result.words), vec!["cord"]);
    }

    #[test]
    fn trailing_blanks_are_ignored() {
        let result = evaluate(&["cord", "card", "ward", "", ""]);
        assert_eq!(result.status, EvaluationStatus::Solved);
        assert_eq!(result.moves_used, 4);
    }

    #[test]
    fn entries_are_normalized() {
        let result = evaluate(&[" CORD ", "Card", "wARD"]);
        assert_eq!(result.status, EvaluationStatus::Solved);
        assert_eq!(texts(&result.words), vec!["cord", "card", "ward"]);
    }

    #[test]
    fn malformed_entries_name_the_word() {
        let result = evaluate(&["cord", "cards"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert_eq!(result.message, "\"cards\" must be exactly 4 letters.");
        assert_eq!(result.moves_used, 1);

        let result = evaluate(&["c0rd"]);
        assert_eq!(result.message, "\"c0rd\" must be exactly 4 letters.");
    }

    #[test]
    fn too_many_moves_is_invalid() {
        let mut ladder = cold_to_warm();
        ladder.max_moves = 4;
        let result = evaluate_attempt(
            &ladder,
            &dictionary(),
            &["cord", "core", "wore", "word", "ward"],
        );
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert_eq!(result.message, "This ladder allows at most 4 moves.");
        assert_eq!(result.moves_used, 6);
    }

    #[test]
    fn reused_words_are_invalid() {
        let result = evaluate(&["cord", "cold"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert_eq!(result.message, "You cannot reuse words in the same ladder.");

        let result = evaluate(&["cord", "card", "cord"]);
        assert!(result.message.contains("reuse"));
    }

    #[test]
    fn non_adjacent_step_names_both_words() {
        let result = evaluate(&["cord", "ward"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert_eq!(result.message, "\"ward\" must differ from \"cord\" by one letter.");
        assert_eq!(result.moves_used, 3);
    }

    #[test]
    fn end_word_cannot_be_entered() {
        let result = evaluate(&["cord", "card", "ward", "warm"]);
        assert_eq!(result.status, EvaluationStatus::Invalid);
        assert_eq!(result.message, "The target word can only appear at the end.");
    }

    #[test]
    fn works_on_the_public_projection() {
        let public = cold_to_warm().to_public();
        let result = evaluate_attempt(&public, &dictionary(), &["cord", "card", "ward"]);
        assert_eq!(result.status, EvaluationStatus::Solved);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&evaluate(&["cord"])).unwrap();
        assert!(json.contains("\"status\":\"incomplete\""));
        assert!(json.contains("\"movesUsed\":2"));
        assert!(json.contains("\"words\":[\"cord\"]"));
    }

    #[test]
    fn solution_path_checks() {
        let dictionary = dictionary();
        assert!(is_valid_solution_path(&cold_to_warm(), &dictionary));

        let mut wrong_par = cold_to_warm();
        wrong_par.par = 3;
        assert!(!is_valid_solution_path(&wrong_par, &dictionary));

        let mut wrong_end = cold_to_warm();
        wrong_end.end = word("worm");
        assert!(!is_valid_solution_path(&wrong_end, &dictionary));

        let mut broken_step = cold_to_warm();
        broken_step.solution[2] = word("worm");
        assert!(!is_valid_solution_path(&broken_step, &dictionary));

        let mut unknown_word = cold_to_warm();
        unknown_word.solution[1] = word("colt");
        assert!(!is_valid_solution_path(&unknown_word, &dictionary));
    }

    #[test]
    fn generated_solutions_validate_at_par() {
        let dictionary = Dictionary::embedded();
        let graph = WordGraph::build(dictionary.words());
        let generator = PuzzleGenerator::new(&dictionary, &graph, GeneratorConfig::default());
        let mut date = DateKey::parse("2026-03-01").unwrap();

        for _ in 0..20 {
            let puzzle = generator.generate_daily_puzzle(date).unwrap();
            for ladder in &puzzle.ladders {
                assert!(is_valid_solution_path(ladder, &dictionary));

                let result = evaluate_attempt(ladder, &dictionary, ladder.intermediates());
                assert_eq!(result.status, EvaluationStatus::Solved, "{}", result.message);
                assert_eq!(result.moves_used, ladder.par);
            }
            date = date.add_days(1).unwrap();
        }
    }
}
