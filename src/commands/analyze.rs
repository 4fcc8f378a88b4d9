//! Graph analysis commands
//!
//! Summarizes the word graph of a dictionary and finds paths between words.
//! Both help judge whether a word list can support daily generation.

use crate::core::Word;
use crate::graph::{WordGraph, shortest_path};
use anyhow::{Result, bail};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Shape of a word graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReport {
    pub words: usize,
    pub edges: usize,
    pub isolated: usize,
    pub average_degree: f64,
    /// Best-connected word and its degree
    pub max_degree: Option<(Word, usize)>,
    pub components: usize,
    pub largest_component: usize,
}

/// Result of a path query
#[derive(Debug, Clone)]
pub struct PathReport {
    pub from: Word,
    pub to: Word,
    pub max_depth: usize,
    pub path: Option<Vec<Word>>,
}

/// Collect graph statistics
#[must_use]
pub fn analyze_graph(graph: &WordGraph) -> GraphReport {
    let words = graph.len();
    let edges = graph.edge_count();
    let isolated = graph.isolated_words().count();

    let max_degree = graph
        .words()
        .iter()
        .map(|word| (word, graph.degree(word.text())))
        .max_by(|(a_word, a), (b_word, b)| a.cmp(b).then_with(|| b_word.cmp(a_word)))
        .map(|(word, degree)| (word.clone(), degree));

    let average_degree = if words > 0 {
        (2 * edges) as f64 / words as f64
    } else {
        0.0
    };

    let sizes = component_sizes(graph);

    GraphReport {
        words,
        edges,
        isolated,
        average_degree,
        max_degree,
        components: sizes.len(),
        largest_component: sizes.into_iter().max().unwrap_or(0),
    }
}

/// Sizes of the connected components, in order of their first word
fn component_sizes(graph: &WordGraph) -> Vec<usize> {
    let mut seen: FxHashSet<&Word> = FxHashSet::default();
    let mut sizes = Vec::new();

    for word in graph.words() {
        if !seen.insert(word) {
            continue;
        }

        let mut size = 0;
        let mut queue = VecDeque::from([word]);
        while let Some(current) = queue.pop_front() {
            size += 1;
            for next in graph.neighbors(current.text()) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        sizes.push(size);
    }

    sizes
}

/// Find the shortest path between two words
///
/// # Errors
///
/// Returns an error if either word is malformed or missing from the graph.
pub fn find_path(graph: &WordGraph, from: &str, to: &str, max_depth: usize) -> Result<PathReport> {
    let from = Word::new(from)?;
    let to = Word::new(to)?;

    for word in [&from, &to] {
        if !graph.contains(word.text()) {
            bail!("\"{word}\" is not in the dictionary");
        }
    }

    let path = shortest_path(graph, from.text(), to.text(), max_depth);
    Ok(PathReport {
        from,
        to,
        max_depth,
        path,
    })
}
