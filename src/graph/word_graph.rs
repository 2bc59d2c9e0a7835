//! WordGraph: directed word-adjacency graph with edge multiplicities

use super::edge::{Edge, GraphSnapshot};
use crate::text::tokenize;
use std::collections::BTreeMap;
use std::fmt;

/// Successor map shared by every word that has no outgoing edges
static NO_NEIGHBORS: BTreeMap<String, u32> = BTreeMap::new();

/// Directed weighted graph of consecutive words
///
/// Every distinct token is a node, including words that only ever appear
/// last. Edge `(u, v)` carries the number of times `v` directly follows
/// `u`. Both levels of the adjacency map are ordered, so iteration and
/// display are lexicographic.
///
/// The graph is built once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    adjacency: BTreeMap<String, BTreeMap<String, u32>>,
}

impl WordGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from an ordered token sequence
    ///
    /// Each consecutive pair `(tokens[i], tokens[i + 1])` adds one to the
    /// weight of that edge. A single token produces one isolated node.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        let mut previous: Option<String> = None;

        for token in tokens {
            let token = token.into();
            match previous.take() {
                Some(prev) => graph.add_edge(prev, token.clone()),
                None => graph.add_node(token.clone()),
            }
            previous = Some(token);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }

    /// Tokenize `text` and build the graph from the result
    pub fn from_text(text: &str) -> Self {
        Self::build(tokenize(text))
    }

    fn add_node(&mut self, word: String) {
        self.adjacency.entry(word).or_default();
    }

    fn add_edge(&mut self, from: String, to: String) {
        self.add_node(to.clone());
        *self.adjacency.entry(from).or_default().entry(to).or_insert(0) += 1;
    }

    /// Check whether `word` is a node
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// All nodes in lexicographic order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Outgoing edges of `word` as `successor -> weight`
    ///
    /// Empty when the word has no successors or is not in the graph.
    pub fn neighbors(&self, word: &str) -> &BTreeMap<String, u32> {
        self.adjacency.get(word).unwrap_or(&NO_NEIGHBORS)
    }

    /// Weight of edge `(from, to)`, if it exists
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbors(from).get(to).copied()
    }

    /// Number of distinct successors of `word`
    pub fn out_degree(&self, word: &str) -> usize {
        self.neighbors(word).len()
    }

    /// All edges as `(source, target, weight)`, ordered by source then target
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.adjacency.iter().flat_map(|(from, successors)| {
            successors
                .iter()
                .map(move |(to, &weight)| (from.as_str(), to.as_str(), weight))
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Owned, serializable copy of the graph
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().map(str::to_owned).collect(),
            edges: self
                .edges()
                .map(|(from, to, weight)| Edge::new(from, to, weight))
                .collect(),
        }
    }
}

/// Adjacency-list rendering, one node per line: `the -> {cat: 2, mat: 1}`
impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, successors) in &self.adjacency {
            write!(f, "{} -> {{", word)?;
            for (i, (next, weight)) in successors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", next, weight)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
