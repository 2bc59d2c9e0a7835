//! Exhaustive reference searches for small graphs

use wordgraph::WordGraph;

/// Sum of edge weights along `path`, or `None` if some step is not an edge
pub fn path_cost(graph: &WordGraph, path: &[String]) -> Option<u64> {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).map(u64::from))
        .sum()
}

/// Costs of every simple path from `source` to `target`
///
/// With non-negative weights a shortest path can always be made simple,
/// so the minimum of these is the true shortest distance.
pub fn all_simple_path_costs(graph: &WordGraph, source: &str, target: &str) -> Vec<u64> {
    let mut costs = Vec::new();
    let mut stack = vec![source.to_string()];
    extend(graph, target, &mut stack, 0, &mut costs);
    costs
}

fn extend(graph: &WordGraph, target: &str, stack: &mut Vec<String>, cost: u64, costs: &mut Vec<u64>) {
    let current = stack.last().cloned().unwrap_or_default();
    if current == target {
        costs.push(cost);
        return;
    }
    for (next, &weight) in graph.neighbors(&current) {
        if stack.contains(next) {
            continue;
        }
        stack.push(next.clone());
        extend(graph, target, stack, cost + u64::from(weight), costs);
        stack.pop();
    }
}
