//! One-letter adjacency over a dictionary
//!
//! Words are adjacent when they differ in exactly one position. Building the
//! graph buckets every word under its wildcard patterns (`c*ld`, `co*d`, ...)
//! so each word is compared only against words sharing a bucket: O(n·L)
//! instead of O(n²).

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Immutable word adjacency structure
///
/// Words are stored in sorted order and referred to internally by index.
/// Neighbor lists are sorted by index, which is also alphabetical order, so
/// every traversal of the graph is deterministic.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl WordGraph {
    /// Build the graph from a set of words
    ///
    /// Duplicates are ignored; an empty input yields an empty graph.
    ///
    /// # Examples
    /// ```
    /// use word_rung::graph::WordGraph;
    /// use word_rung::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "warm"]);
    /// let graph = WordGraph::build(dictionary.words());
    ///
    /// let neighbors: Vec<&str> = graph.neighbors("cord").map(|w| w.text()).collect();
    /// assert_eq!(neighbors, vec!["card", "cold"]);
    /// assert_eq!(graph.neighbors("warm").count(), 0);
    /// ```
    #[must_use]
    pub fn build<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().cloned().collect();
        words.sort_unstable();
        words.dedup();

        let index: FxHashMap<Word, usize> = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id))
            .collect();

        let mut buckets: FxHashMap<[u8; WORD_LENGTH], Vec<usize>> = FxHashMap::default();
        for (id, word) in words.iter().enumerate() {
            for position in 0..WORD_LENGTH {
                buckets.entry(word.wildcard_at(position)).or_default().push(id);
            }
        }

        let mut adjacency = vec![Vec::new(); words.len()];
        for bucket in buckets.values().filter(|bucket| bucket.len() > 1) {
            for &id in bucket {
                adjacency[id].extend(bucket.iter().copied().filter(|&other| other != id));
            }
        }

        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        Self {
            words,
            index,
            adjacency,
        }
    }

    /// Number of words (vertices)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Sorted neighbors of `word`; empty if the word is not in the graph
    pub fn neighbors<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a Word> + use<'a> {
        self.id_of(word)
            .map(|id| self.adjacency[id].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&id| &self.words[id])
    }

    /// Number of neighbors of `word`
    #[must_use]
    pub fn degree(&self, word: &str) -> usize {
        self.id_of(word).map_or(0, |id| self.adjacency[id].len())
    }

    /// Words with no neighbors at all; they can never appear in a ladder
    pub fn isolated_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words
            .iter()
            .zip(&self.adjacency)
            .filter(|(_, neighbors)| neighbors.is_empty())
            .map(|(word, _)| word)
    }

    #[inline]
    pub(crate) fn id_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[inline]
    pub(crate) fn word_at(&self, id: usize) -> &Word {
        &self.words[id]
    }

    #[inline]
    pub(crate) fn neighbor_ids(&self, id: usize) -> &[usize] {
        &self.adjacency[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn graph_of(words: &[&str]) -> WordGraph {
        WordGraph::build(Dictionary::from_strs(words).words())
    }

    fn neighbor_texts<'a>(graph: &'a WordGraph, word: &str) -> Vec<&'a str> {
        graph.neighbors(word).map(Word::text).collect()
    }

    #[test]
    fn empty_dictionary_yields_empty_graph() {
        let graph = graph_of(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors("cold").count(), 0);
    }

    #[test]
    fn neighbors_differ_by_one_letter_and_are_sorted() {
        let graph = graph_of(&["cold", "bold", "cord", "colt", "card", "warm"]);
        assert_eq!(neighbor_texts(&graph, "cold"), vec!["bold", "colt", "cord"]);
        assert_eq!(neighbor_texts(&graph, "card"), vec!["cord"]);
        assert!(neighbor_texts(&graph, "warm").is_empty());
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let graph = WordGraph::build(Dictionary::embedded().words());
        for word in graph.words() {
            for neighbor in graph.neighbors(word.text()) {
                assert_ne!(neighbor, word, "{word} is its own neighbor");
                assert!(word.is_adjacent(neighbor));
                assert!(
                    graph.neighbors(neighbor.text()).any(|back| back == word),
                    "{neighbor} does not link back to {word}"
                );
            }
        }
    }

    #[test]
    fn bucketing_matches_pairwise_comparison() {
        let dictionary = Dictionary::from_strs(&[
            "cold", "bold", "cord", "colt", "card", "ward", "warm", "word", "wore", "core",
        ]);
        let graph = WordGraph::build(dictionary.words());

        for word in dictionary.words() {
            let expected: Vec<&Word> = dictionary
                .words()
                .iter()
                .filter(|other| word.is_adjacent(other))
                .collect();
            let actual: Vec<&Word> = graph.neighbors(word.text()).collect();
            assert_eq!(actual, expected, "neighbors of {word}");
        }
    }

    #[test]
    fn duplicates_are_ignored() {
        let words = Dictionary::from_strs(&["cold", "cord"]).words().to_vec();
        let doubled: Vec<&Word> = words.iter().chain(words.iter()).collect();
        let graph = WordGraph::build(doubled);

        assert_eq!(graph.len(), 2);
        assert_eq!(neighbor_texts(&graph, "cold"), vec!["cord"]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn degree_and_isolated_words() {
        let graph = graph_of(&["cold", "cord", "zany"]);
        assert_eq!(graph.degree("cold"), 1);
        assert_eq!(graph.degree("zany"), 0);
        assert_eq!(graph.degree("nope"), 0);

        let isolated: Vec<&str> = graph.isolated_words().map(Word::text).collect();
        assert_eq!(isolated, vec!["zany"]);
    }

    #[test]
    fn contains_only_dictionary_words() {
        let graph = graph_of(&["cold", "cord"]);
        assert!(graph.contains("cold"));
        assert!(!graph.contains("card"));
    }
}
