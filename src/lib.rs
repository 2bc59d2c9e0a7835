//! wordgraph: word-adjacency graph engine
//!
//! Builds a directed weighted graph from a text, where an edge `u -> v`
//! counts how often `v` directly follows `u`, and answers structural
//! queries over it.
//!
//! # Queries
//!
//! - **Bridge words**: words `m` with `a -> m -> b`
//! - **Text generation**: splice bridge words into new text
//! - **Shortest path**: Dijkstra over adjacency counts
//! - **PageRank**: 100 rounds, damping 0.85
//! - **Random walk**: stops at a dead end or on the first repeated edge
//!
//! # Example
//!
//! ```
//! use wordgraph::{bridge_words, shortest_path, WordGraph};
//!
//! let graph = WordGraph::from_text("the cat sat on the mat the cat ran");
//!
//! let bridges = bridge_words(&graph, "the", "sat").unwrap();
//! assert_eq!(bridges.words, vec!["cat"]);
//!
//! let path = shortest_path(&graph, "the", "ran").unwrap();
//! assert_eq!(path.length, 3);
//! ```

pub mod config;
mod graph;
pub mod query;
pub mod source;
mod text;

pub use config::{Config, ConfigError};
pub use graph::{Edge, GraphSnapshot, WordGraph};
pub use query::{
    bridge_words, generate_text, page_rank, random_walk, shortest_path, shortest_paths_from,
    BridgeWords, PageRank, PathResult, QueryError, QueryResult,
};
pub use source::{load_graph, SourceError};
pub use text::tokenize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
