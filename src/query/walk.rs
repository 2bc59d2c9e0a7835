//! Random walk that stops on the first repeated edge

use crate::graph::WordGraph;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

/// Walk the graph from a uniformly chosen start node
///
/// At each step an outgoing edge of the current node is chosen uniformly
/// (edge weight does not bias the choice). The walk ends when the current
/// node has no successors, or when the chosen edge has already been taken
/// in this walk; that repeated edge is not followed. The returned sequence
/// includes the start node, so it holds at most `edge_count() + 1` words.
///
/// An empty graph yields an empty walk.
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> Vec<String> {
    let Some(start) = graph.nodes().choose(rng) else {
        return Vec::new();
    };

    let mut walk = vec![start.to_owned()];
    let mut traversed: HashSet<(&str, &str)> = HashSet::new();
    let mut current = start;

    loop {
        let successors: Vec<&str> = graph.neighbors(current).keys().map(String::as_str).collect();
        let Some(&next) = successors.choose(rng) else {
            tracing::debug!(steps = walk.len(), at = current, "walk reached a dead end");
            break;
        };

        if !traversed.insert((current, next)) {
            tracing::debug!(
                steps = walk.len(),
                from = current,
                to = next,
                "walk repeated an edge"
            );
            break;
        }

        walk.push(next.to_owned());
        current = next;
    }

    walk
}
