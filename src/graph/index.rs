//! Dense integer view of a WordGraph for the numeric algorithms

use super::word_graph::WordGraph;
use std::collections::HashMap;

/// Words mapped to `0..n` in lexicographic order, with adjacency by index.
///
/// Index order equals word order, so comparing indices breaks ties the
/// same way comparing words would.
pub(crate) struct NodeIndex<'a> {
    words: Vec<&'a str>,
    positions: HashMap<&'a str, usize>,
    outgoing: Vec<Vec<(usize, u32)>>,
    incoming: Vec<Vec<usize>>,
}

impl<'a> NodeIndex<'a> {
    pub(crate) fn build(graph: &'a WordGraph) -> Self {
        let words: Vec<&str> = graph.nodes().collect();
        let positions: HashMap<&str, usize> =
            words.iter().enumerate().map(|(i, &w)| (w, i)).collect();

        let n = words.len();
        let mut outgoing: Vec<Vec<(usize, u32)>> = vec![Vec::new(); n];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (from, to, weight) in graph.edges() {
            // Every edge endpoint is a node, so both lookups succeed
            if let (Some(&src), Some(&dst)) = (positions.get(from), positions.get(to)) {
                outgoing[src].push((dst, weight));
                incoming[dst].push(src);
            }
        }

        Self {
            words,
            positions,
            outgoing,
            incoming,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub(crate) fn word(&self, index: usize) -> &'a str {
        self.words[index]
    }

    /// `(successor, weight)` pairs of a node
    pub(crate) fn outgoing(&self, index: usize) -> &[(usize, u32)] {
        &self.outgoing[index]
    }

    /// Predecessors of a node
    pub(crate) fn incoming(&self, index: usize) -> &[usize] {
        &self.incoming[index]
    }

    pub(crate) fn out_degree(&self, index: usize) -> usize {
        self.outgoing[index].len()
    }
}
