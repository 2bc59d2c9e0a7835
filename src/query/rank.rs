//! PageRank over the word graph
//!
//! Fixed-round power iteration with damping 0.85. Nodes without successors
//! do not pass their rank on, so total rank drains away whenever the graph
//! has such nodes. The scores are therefore not a probability distribution
//! in general; they only sum to one when every node has a successor.

use super::require_words;
use super::types::QueryResult;
use crate::graph::{NodeIndex, WordGraph};
use std::collections::BTreeMap;

/// Probability of following an edge rather than teleporting
pub const DAMPING: f64 = 0.85;

/// Number of synchronous update rounds
pub const ITERATIONS: usize = 100;

/// PageRank scores for every node of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct PageRank {
    scores: BTreeMap<String, f64>,
}

impl PageRank {
    /// Run the fixed number of rounds over the whole graph
    ///
    /// Each round computes, for every node `u`,
    /// `(1 - d) / N + d * sum(score[v] / out_degree(v))` over predecessors
    /// `v`, and replaces all scores at once at the end of the round.
    pub fn compute(graph: &WordGraph) -> Self {
        let index = NodeIndex::build(graph);
        let n = index.len();
        if n == 0 {
            return Self {
                scores: BTreeMap::new(),
            };
        }

        let base = (1.0 - DAMPING) / n as f64;
        let mut scores: Vec<f64> = vec![1.0 / n as f64; n];
        let mut next: Vec<f64> = vec![0.0; n];

        for _ in 0..ITERATIONS {
            for (u, slot) in next.iter_mut().enumerate() {
                let inflow: f64 = index
                    .incoming(u)
                    .iter()
                    .map(|&v| scores[v] / index.out_degree(v) as f64)
                    .sum();
                *slot = base + DAMPING * inflow;
            }
            std::mem::swap(&mut scores, &mut next);
        }

        tracing::debug!(
            nodes = n,
            rounds = ITERATIONS,
            total = scores.iter().sum::<f64>(),
            "computed pagerank"
        );

        Self {
            scores: (0..n)
                .map(|i| (index.word(i).to_owned(), scores[i]))
                .collect(),
        }
    }

    /// Score of `word`, if it is a node
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// All scores in word order
    pub fn scores(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, &s)| (w.as_str(), s))
    }

    /// The `k` highest-scoring words, best first; ties in word order
    pub fn top_k(&self, k: usize) -> Vec<(String, f64)> {
        let mut sorted: Vec<(String, f64)> =
            self.scores.iter().map(|(w, &s)| (w.clone(), s)).collect();
        // Stable sort keeps equal scores in word order
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        sorted.truncate(k);
        sorted
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// PageRank score of a single word
pub fn page_rank(graph: &WordGraph, word: &str) -> QueryResult<f64> {
    require_words(graph, &[word])?;
    let ranks = PageRank::compute(graph);
    // require_words guarantees the word has a score
    Ok(ranks.score(word).unwrap_or_default())
}
