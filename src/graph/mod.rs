//! Word graph and path finding
//!
//! The graph is built once from the dictionary and shared read-only by the
//! generator, the validator and the hint engine.

mod search;
mod word_graph;

pub use search::{distances_from, shortest_path};
pub use word_graph::WordGraph;
