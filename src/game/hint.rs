//! Hints from the canonical path

use crate::core::{Word, normalize};
use crate::graph::{WordGraph, shortest_path};
use crate::puzzle::LadderShape;
use serde::Serialize;

/// The next word the player should enter, and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Zero-based position among the intermediate entries
    pub index: usize,
    pub word: Word,
}

/// Canonical solution for a ladder, bounded by its move allowance
///
/// Recomputed from the graph rather than read from the stored solution, so it
/// also works for public ladders.
#[must_use]
pub fn solve_ladder<L: LadderShape + ?Sized>(graph: &WordGraph, ladder: &L) -> Option<Vec<Word>> {
    shortest_path(
        graph,
        ladder.start().text(),
        ladder.end().text(),
        ladder.max_moves(),
    )
}

/// First intermediate position where `entries` leave the canonical path
///
/// Returns `None` when the ladder has no intermediate step to reveal or the
/// entries already follow the canonical path all the way.
///
/// # Examples
/// ```
/// use word_rung::core::Word;
/// use word_rung::game::find_hint;
/// use word_rung::graph::WordGraph;
/// use word_rung::puzzle::Ladder;
/// use word_rung::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm"]);
/// let graph = WordGraph::build(dictionary.words());
/// let ladder = Ladder {
///     id: "L1".to_string(),
///     start: Word::new("cold").unwrap(),
///     end: Word::new("warm").unwrap(),
///     par: 4,
///     max_moves: 8,
///     solution: Vec::new(),
/// };
///
/// let hint = find_hint(&graph, &ladder, &["cord"]).unwrap();
/// assert_eq!(hint.index, 1);
/// assert_eq!(hint.word.text(), "card");
/// ```
#[must_use]
pub fn find_hint<L, S>(graph: &WordGraph, ladder: &L, entries: &[S]) -> Option<Hint>
where
    L: LadderShape + ?Sized,
    S: AsRef<str>,
{
    let path = solve_ladder(graph, ladder)?;
    if path.len() < 3 {
        return None;
    }

    path[1..path.len() - 1]
        .iter()
        .enumerate()
        .find(|&(index, expected)| {
            entries
                .get(index)
                .is_none_or(|entry| normalize(entry.as_ref()) != expected.text())
        })
        .map(|(index, word)| Hint {
            index,
            word: word.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateKey;
    use crate::puzzle::{GeneratorConfig, Ladder, PuzzleGenerator};
    use crate::wordlists::Dictionary;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn ladder(start: &str, end: &str, max_moves: usize) -> Ladder {
        Ladder {
            id: "L1".to_string(),
            start: word(start),
            end: word(end),
            par: 4,
            max_moves,
            solution: Vec::new(),
        }
    }

    fn small_graph() -> WordGraph {
        WordGraph::build(
            Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm", "bold"]).words(),
        )
    }

    #[test]
    fn first_hint_is_the_first_step() {
        let graph = small_graph();
        let hint = find_hint(&graph, &ladder("cold", "warm", 8), &[] as &[&str]).unwrap();
        assert_eq!(hint, Hint { index: 0, word: word("cord") });
    }

    #[test]
    fn wrong_entry_is_the_hint_target() {
        let graph = small_graph();
        let hint = find_hint(&graph, &ladder("cold", "warm", 8), &["cord", "bold"]).unwrap();
        assert_eq!(hint.index, 1);
        assert_eq!(hint.word, word("card"));
    }

    #[test]
    fn entries_are_compared_normalized() {
        let graph = small_graph();
        let hint = find_hint(&graph, &ladder("cold", "warm", 8), &[" CORD", "Card "]).unwrap();
        assert_eq!(hint.index, 2);
    }

    #[test]
    fn matching_path_has_no_hint() {
        let graph = small_graph();
        let entries = ["cord", "card", "ward"];
        assert_eq!(find_hint(&graph, &ladder("cold", "warm", 8), &entries), None);
    }

    #[test]
    fn adjacent_endpoints_have_no_hint() {
        let graph = small_graph();
        assert_eq!(find_hint(&graph, &ladder("cold", "cord", 8), &["x"]), None);
    }

    #[test]
    fn unreachable_within_moves_has_no_hint() {
        let graph = small_graph();
        assert!(solve_ladder(&graph, &ladder("cold", "warm", 3)).is_none());
        assert_eq!(find_hint(&graph, &ladder("cold", "warm", 3), &["cord"]), None);
    }

    #[test]
    fn applying_hints_converges_on_generated_ladders() {
        let dictionary = Dictionary::embedded();
        let graph = WordGraph::build(dictionary.words());
        let generator = PuzzleGenerator::new(&dictionary, &graph, GeneratorConfig::default());
        let puzzle = generator
            .generate_daily_puzzle(DateKey::parse("2026-02-06").unwrap())
            .unwrap();

        for ladder in &puzzle.ladders {
            assert_eq!(solve_ladder(&graph, ladder).as_ref(), Some(&ladder.solution));

            let mut entries: Vec<String> = Vec::new();
            let mut seen = Vec::new();
            while let Some(hint) = find_hint(&graph, ladder, &entries) {
                assert!(!seen.contains(&hint.index), "index {} repeated", hint.index);
                seen.push(hint.index);

                if hint.index < entries.len() {
                    entries[hint.index] = hint.word.to_string();
                } else {
                    entries.push(hint.word.to_string());
                }
            }

            assert_eq!(seen.len(), ladder.intermediates().len());
            let texts: Vec<&str> = ladder.intermediates().iter().map(Word::text).collect();
            assert_eq!(entries, texts);
        }
    }

    #[test]
    fn hints_fix_wrong_entries_in_order() {
        let dictionary = Dictionary::embedded();
        let graph = WordGraph::build(dictionary.words());
        let cold_warm = ladder("cold", "warm", 8);

        let mut entries = vec!["bold".to_string(), "bolt".to_string()];
        let first = find_hint(&graph, &cold_warm, &entries).unwrap();
        assert_eq!(first.index, 0);
        entries[0] = first.word.to_string();

        let second = find_hint(&graph, &cold_warm, &entries).unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.word, word("card"));
    }
}
