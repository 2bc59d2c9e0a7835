//! Bridge word discovery

use super::require_words;
use super::types::{BridgeWords, QueryResult};
use crate::graph::WordGraph;

/// Find every word `m` with edges `from -> m` and `m -> to`
///
/// Direction matters: the bridges from `a` to `b` are generally not the
/// bridges from `b` to `a`.
pub fn bridge_words(graph: &WordGraph, from: &str, to: &str) -> QueryResult<BridgeWords> {
    require_words(graph, &[from, to])?;

    let words = bridges_between(graph, from, to)
        .map(str::to_owned)
        .collect();

    Ok(BridgeWords {
        from: from.to_owned(),
        to: to.to_owned(),
        words,
    })
}

/// Bridge words in lexicographic order; nothing when either word is absent
pub(crate) fn bridges_between<'a>(
    graph: &'a WordGraph,
    from: &'a str,
    to: &'a str,
) -> impl Iterator<Item = &'a str> {
    // neighbors() is an ordered map, so the result is sorted and unique
    graph
        .neighbors(from)
        .keys()
        .filter(move |mid| graph.neighbors(mid).contains_key(to))
        .map(String::as_str)
}
