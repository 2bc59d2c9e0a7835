//! Weighted shortest paths (Dijkstra)

use super::require_words;
use super::types::{PathResult, QueryResult};
use crate::graph::{NodeIndex, WordGraph};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Shortest weighted path from `source` to `target`
///
/// Edge weights are the adjacency counts, so the "shortest" path is the one
/// with the smallest total count. Ties between equal-distance nodes are
/// broken by word order, which makes the returned path deterministic.
pub fn shortest_path(graph: &WordGraph, source: &str, target: &str) -> QueryResult<PathResult> {
    require_words(graph, &[source, target])?;

    let index = NodeIndex::build(graph);
    let (Some(start), Some(goal)) = (index.position(source), index.position(target)) else {
        return Ok(PathResult::not_found(source, target));
    };

    let search = dijkstra(&index, start, Some(goal));
    Ok(search.path_to(&index, goal).unwrap_or_else(|| {
        tracing::debug!(source, target, "target unreachable");
        PathResult::not_found(source, target)
    }))
}

/// Shortest paths from `source` to every node reachable from it
///
/// The source itself is included as a zero-length path. Results are in
/// word order of their targets.
pub fn shortest_paths_from(graph: &WordGraph, source: &str) -> QueryResult<Vec<PathResult>> {
    require_words(graph, &[source])?;

    let index = NodeIndex::build(graph);
    let Some(start) = index.position(source) else {
        return Ok(Vec::new());
    };

    let search = dijkstra(&index, start, None);
    Ok((0..index.len())
        .filter_map(|node| search.path_to(&index, node))
        .collect())
}

/// Distances and predecessor links from one Dijkstra run
struct Search {
    start: usize,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<usize>>,
}

impl Search {
    fn path_to(&self, index: &NodeIndex<'_>, node: usize) -> Option<PathResult> {
        let length = self.dist[node]?;

        let mut path = vec![index.word(node).to_owned()];
        let mut current = node;
        while current != self.start {
            current = self.prev[current]?;
            path.push(index.word(current).to_owned());
        }
        path.reverse();

        Some(PathResult::found(path, length))
    }
}

/// Binary heap with lazy deletion: a relaxed node is pushed again and
/// stale entries are skipped when popped. `None` distance means unreached.
fn dijkstra(index: &NodeIndex<'_>, start: usize, goal: Option<usize>) -> Search {
    let n = index.len();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(Reverse((0, start)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        tracing::trace!(node = index.word(u), distance = d, "settled");

        if Some(u) == goal {
            break;
        }

        for &(v, weight) in index.outgoing(u) {
            let candidate = d + u64::from(weight);
            if dist[v].map_or(true, |current| candidate < current) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    Search { start, dist, prev }
}
