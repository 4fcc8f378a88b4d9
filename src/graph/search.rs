//! Breadth-first search over the word graph
//!
//! The frontier is a FIFO queue and neighbors are visited in the graph's
//! sorted order, so among several shortest paths the same one is always
//! returned. Puzzle generation and hinting both rely on that.

use super::WordGraph;
use crate::core::Word;
use std::collections::{BTreeMap, VecDeque};

/// Shortest path from `start` to `end` using at most `max_depth` moves
///
/// Returns the full path including both endpoints, or `None` if either word
/// is missing from the graph or no path exists within `max_depth`.
///
/// # Examples
/// ```
/// use word_rung::graph::{WordGraph, shortest_path};
/// use word_rung::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm"]);
/// let graph = WordGraph::build(dictionary.words());
///
/// let path = shortest_path(&graph, "cold", "warm", 8).unwrap();
/// let texts: Vec<&str> = path.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["cold", "cord", "card", "ward", "warm"]);
///
/// assert!(shortest_path(&graph, "cold", "warm", 3).is_none());
/// ```
#[must_use]
pub fn shortest_path(
    graph: &WordGraph,
    start: &str,
    end: &str,
    max_depth: usize,
) -> Option<Vec<Word>> {
    let start_id = graph.id_of(start)?;
    let end_id = graph.id_of(end)?;

    if start_id == end_id {
        return Some(vec![graph.word_at(start_id).clone()]);
    }

    let mut parent: Vec<Option<usize>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::from([(start_id, 0)]);
    visited[start_id] = true;

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbor_ids(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);

            if next == end_id {
                return Some(reconstruct(graph, &parent, end_id));
            }

            queue.push_back((next, depth + 1));
        }
    }

    None
}

/// Shortest distance from `start` to every word reachable within `max_depth` moves
///
/// `start` itself maps to 0. Unreachable words are absent. The map is ordered
/// alphabetically so callers can iterate it deterministically.
#[must_use]
pub fn distances_from<'g>(
    graph: &'g WordGraph,
    start: &str,
    max_depth: usize,
) -> BTreeMap<&'g Word, usize> {
    let mut distances = BTreeMap::new();
    let Some(start_id) = graph.id_of(start) else {
        return distances;
    };

    let mut depth_of: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue = VecDeque::from([start_id]);
    depth_of[start_id] = Some(0);

    while let Some(current) = queue.pop_front() {
        let depth = depth_of[current].unwrap_or_default();
        distances.insert(graph.word_at(current), depth);

        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbor_ids(current) {
            if depth_of[next].is_none() {
                depth_of[next] = Some(depth + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

fn reconstruct(graph: &WordGraph, parent: &[Option<usize>], end_id: usize) -> Vec<Word> {
    let mut path = vec![graph.word_at(end_id).clone()];
    let mut cursor = parent[end_id];
    while let Some(id) = cursor {
        path.push(graph.word_at(id).clone());
        cursor = parent[id];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn graph_of(words: &[&str]) -> WordGraph {
        WordGraph::build(Dictionary::from_strs(words).words())
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    #[test]
    fn finds_shortest_path() {
        let graph = graph_of(&["cold", "cord", "card", "ward", "warm", "word", "worm"]);
        let path = shortest_path(&graph, "cold", "warm", 10).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first().unwrap(), "cold");
        assert_eq!(path.last().unwrap(), "warm");
        assert!(path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])));
    }

    #[test]
    fn tie_break_prefers_sorted_neighbor_order() {
        // cold -> cord -> word and cold -> wold -> word are both length 2
        let graph = graph_of(&["cold", "cord", "wold", "word"]);
        let path = shortest_path(&graph, "cold", "word", 5).unwrap();
        assert_eq!(texts(&path), vec!["cold", "cord", "word"]);
    }

    #[test]
    fn same_start_and_end() {
        let graph = graph_of(&["cold", "cord"]);
        let path = shortest_path(&graph, "cold", "cold", 3).unwrap();
        assert_eq!(texts(&path), vec!["cold"]);
    }

    #[test]
    fn missing_words_have_no_path() {
        let graph = graph_of(&["cold", "cord"]);
        assert!(shortest_path(&graph, "cold", "zzzz", 5).is_none());
        assert!(shortest_path(&graph, "zzzz", "cold", 5).is_none());
    }

    #[test]
    fn disconnected_words_have_no_path() {
        let graph = graph_of(&["cold", "cord", "warm", "ward"]);
        assert!(shortest_path(&graph, "cold", "warm", 10).is_none());
    }

    #[test]
    fn depth_limit_is_inclusive() {
        let graph = graph_of(&["cold", "cord", "card", "ward", "warm"]);
        assert!(shortest_path(&graph, "cold", "warm", 4).is_some());
        assert!(shortest_path(&graph, "cold", "warm", 3).is_none());
        assert!(shortest_path(&graph, "cold", "cord", 0).is_none());
    }

    #[test]
    fn canonical_path_is_stable_across_calls() {
        let graph = WordGraph::build(Dictionary::embedded().words());
        let first = shortest_path(&graph, "cold", "warm", 8).unwrap();
        let second = shortest_path(&graph, "cold", "warm", 8).unwrap();
        assert_eq!(first, second);
        assert_eq!(texts(&first), vec!["cold", "cord", "card", "ward", "warm"]);
    }

    #[test]
    fn distances_cover_reachable_words_within_depth() {
        let graph = graph_of(&["cold", "cord", "card", "ward", "warm", "zany"]);
        let distances = distances_from(&graph, "cold", 3);

        let found: Vec<(&str, usize)> = distances.iter().map(|(w, &d)| (w.text(), d)).collect();
        assert_eq!(
            found,
            vec![("card", 2), ("cold", 0), ("cord", 1), ("ward", 3)]
        );
    }

    #[test]
    fn distances_from_missing_start_is_empty() {
        let graph = graph_of(&["cold", "cord"]);
        assert!(distances_from(&graph, "zzzz", 5).is_empty());
    }

    #[test]
    fn distances_with_zero_depth_only_contain_start() {
        let graph = graph_of(&["cold", "cord"]);
        let distances = distances_from(&graph, "cold", 0);
        assert_eq!(distances.len(), 1);
    }

    #[test]
    fn distances_agree_with_shortest_path() {
        let graph = WordGraph::build(Dictionary::embedded().words());
        let distances = distances_from(&graph, "cold", 5);
        for (word, &distance) in distances.iter().take(200) {
            let path = shortest_path(&graph, "cold", word.text(), 5).unwrap();
            assert_eq!(path.len() - 1, distance, "distance to {word}");
        }
    }
}
