//! Bridge-word text augmentation

use super::bridge::bridges_between;
use crate::graph::WordGraph;
use crate::text::tokenize;
use rand::seq::SliceRandom;
use rand::Rng;

/// Rewrite `text`, splicing a bridge word between each adjacent pair that has one
///
/// The input is tokenized with the same rules as graph construction; the
/// graph itself is not modified. When a pair has several bridge words one
/// is picked uniformly with `rng`. Words missing from the graph simply have
/// no bridges.
pub fn generate_text<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    let tokens = tokenize(text);
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len() * 2);

    for (i, word) in tokens.iter().enumerate() {
        out.push(word);

        let Some(next) = tokens.get(i + 1) else {
            break;
        };

        let candidates: Vec<&str> = bridges_between(graph, word, next).collect();
        if let Some(&bridge) = candidates.choose(rng) {
            tracing::trace!(from = %word, to = %next, bridge, "spliced bridge word");
            out.push(bridge);
        }
    }

    out.join(" ")
}
