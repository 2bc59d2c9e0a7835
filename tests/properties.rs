//! Structural properties that hold for any input text

mod common;

use common::{SAMPLE, STORY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use wordgraph::{random_walk, tokenize, PageRank, WordGraph};

const WORDS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "beta", "alpha"];

/// Pseudo-random text drawn from a small vocabulary with noisy separators
fn random_text(rng: &mut StdRng, len: usize) -> String {
    let separators = [" ", ", ", "\n", " 42 ", "--", "!? "];
    let mut text = String::new();
    for _ in 0..len {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if rng.gen_bool(0.3) {
            text.push_str(&word.to_uppercase());
        } else {
            text.push_str(word);
        }
        text.push_str(separators[rng.gen_range(0..separators.len())]);
    }
    text
}

#[test]
fn test_tokens_are_lowercase_letters() {
    let shape = Regex::new("^[a-z]+$").unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for text in [SAMPLE.to_string(), STORY.to_string(), random_text(&mut rng, 200)] {
        for token in tokenize(&text) {
            assert!(shape.is_match(&token), "bad token {token:?}");
        }
    }
}

#[test]
fn test_edge_weights_count_adjacent_pairs() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let text = random_text(&mut rng, 60);
        let tokens = tokenize(&text);
        let graph = WordGraph::build(tokens.clone());

        let mut expected: HashMap<(&str, &str), u32> = HashMap::new();
        for pair in tokens.windows(2) {
            *expected.entry((pair[0].as_str(), pair[1].as_str())).or_default() += 1;
        }

        assert_eq!(graph.edge_count(), expected.len());
        for ((from, to), count) in expected {
            assert_eq!(graph.weight(from, to), Some(count));
        }

        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        assert_eq!(graph.node_count(), distinct.len());
    }
}

#[test]
fn test_build_is_deterministic() {
    let tokens = tokenize(STORY);
    assert_eq!(WordGraph::build(tokens.clone()), WordGraph::build(tokens));
}

#[test]
fn test_pagerank_sums_to_one_without_dangling_nodes() {
    // Every word here has a successor because the text ends where it starts
    let graph = WordGraph::from_text("a b c d a c b d b a");
    assert!(graph.nodes().all(|w| graph.out_degree(w) > 0));

    let total: f64 = PageRank::compute(&graph).scores().map(|(_, s)| s).sum();
    assert!((total - 1.0).abs() < 1e-6, "total was {total}");
}

#[test]
fn test_pagerank_never_exceeds_one_with_dangling_nodes() {
    let graph = WordGraph::from_text(SAMPLE);
    let total: f64 = PageRank::compute(&graph).scores().map(|(_, s)| s).sum();
    assert!(total < 1.0);
    assert!(total > 0.0);
}

#[test]
fn test_walk_never_repeats_an_edge() {
    let mut text_rng = StdRng::seed_from_u64(99);
    for seed in 0..40 {
        let graph = WordGraph::from_text(&random_text(&mut text_rng, 40));
        let walk = random_walk(&graph, &mut StdRng::seed_from_u64(seed));

        assert!(walk.len() <= graph.edge_count() + 1);

        let mut seen = HashSet::new();
        for pair in walk.windows(2) {
            assert!(seen.insert((pair[0].clone(), pair[1].clone())), "edge repeated in {walk:?}");
        }
    }
}

#[test]
fn test_walk_stops_only_at_dead_end_or_used_edge() {
    let graph = WordGraph::from_text(STORY);
    for seed in 0..40 {
        let walk = random_walk(&graph, &mut StdRng::seed_from_u64(seed));
        let last = walk.last().unwrap().as_str();

        let taken: HashSet<(&str, &str)> = walk
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();

        // Either nothing leaves the last word, or the walk drew an edge out
        // of it that had already been taken
        let dead_end = graph.out_degree(last) == 0;
        let blocked = graph
            .neighbors(last)
            .keys()
            .any(|next| taken.contains(&(last, next.as_str())));
        assert!(dead_end || blocked, "walk stopped early: {walk:?}");
    }
}
