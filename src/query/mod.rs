//! Query system for word graphs
//!
//! Every query is a read-only function of a [`WordGraph`] plus its own
//! input. Queries that make random choices take the generator as a
//! parameter so callers can seed them.

mod bridge;
mod generate;
mod path;
mod rank;
mod types;
mod walk;

pub use bridge::bridge_words;
pub use generate::generate_text;
pub use path::{shortest_path, shortest_paths_from};
pub use rank::{page_rank, PageRank, DAMPING, ITERATIONS};
pub use types::{BridgeWords, PathResult, QueryError, QueryResult};
pub use walk::random_walk;

use crate::graph::WordGraph;

/// Fail with `NotFound` naming every word that is not a node
fn require_words(graph: &WordGraph, words: &[&str]) -> QueryResult<()> {
    let mut missing: Vec<&str> = Vec::new();
    for &word in words {
        if !graph.contains(word) && !missing.contains(&word) {
            missing.push(word);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(QueryError::not_found(missing))
    }
}
