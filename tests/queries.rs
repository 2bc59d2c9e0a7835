//! End-to-end query behavior on fixture texts

mod common;

use common::{all_simple_path_costs, path_cost, SAMPLE, STORY};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgraph::{
    bridge_words, generate_text, page_rank, random_walk, shortest_path, shortest_paths_from,
    PageRank, QueryError, WordGraph,
};

#[test]
fn test_sample_edges() {
    let graph = WordGraph::from_text(SAMPLE);
    let edges: Vec<(&str, &str, u32)> = graph.edges().collect();

    assert_eq!(
        edges,
        vec![
            ("cat", "ran", 1),
            ("cat", "sat", 1),
            ("mat", "the", 1),
            ("on", "the", 1),
            ("sat", "on", 1),
            ("the", "cat", 2),
            ("the", "mat", 1),
        ]
    );
}

#[test]
fn test_sample_bridge_and_path() {
    let graph = WordGraph::from_text(SAMPLE);

    let bridges = bridge_words(&graph, "the", "sat").unwrap();
    assert_eq!(bridges.words, vec!["cat"]);

    let path = shortest_path(&graph, "the", "ran").unwrap();
    assert_eq!(path.path, vec!["the", "cat", "ran"]);
    assert_eq!(path.length, 3);
}

#[test]
fn test_story_bridges() {
    let graph = WordGraph::from_text(STORY);

    assert_eq!(
        bridge_words(&graph, "explore", "new").unwrap().words,
        vec!["strange"]
    );
    // "the" is followed by scientist, data, report and team
    assert_eq!(
        bridge_words(&graph, "analyzed", "report").unwrap().words,
        vec!["the"]
    );
    assert!(bridge_words(&graph, "report", "analyzed").unwrap().is_empty());
}

#[test]
fn test_story_generated_text() {
    let graph = WordGraph::from_text(STORY);
    let mut rng = StdRng::seed_from_u64(2024);

    let out = generate_text(&graph, "Seek to explore new and exciting synergies", &mut rng);
    assert_eq!(out, "seek to explore strange new life and exciting synergies");
}

#[test]
fn test_not_found_messages() {
    let graph = WordGraph::from_text(SAMPLE);

    let err = bridge_words(&graph, "dog", "cow").unwrap_err();
    assert_eq!(err.to_string(), "No \"dog\" or \"cow\" in the graph!");

    let err = shortest_path(&graph, "dog", "the").unwrap_err();
    assert_eq!(err, QueryError::not_found(["dog"]));

    let err = page_rank(&graph, "dog").unwrap_err();
    assert_eq!(err.to_string(), "No \"dog\" in the graph!");
}

#[test]
fn test_shortest_paths_match_brute_force() {
    for text in [SAMPLE, STORY, "a b c a c b a d d b"] {
        let graph = WordGraph::from_text(text);
        let words: Vec<&str> = graph.nodes().collect();

        for &source in &words {
            for &target in &words {
                let result = shortest_path(&graph, source, target).unwrap();
                let best = all_simple_path_costs(&graph, source, target).into_iter().min();

                match best {
                    Some(best) => {
                        assert!(result.found, "{source} -> {target} should be reachable");
                        assert_eq!(result.length, best, "{source} -> {target}");
                        assert_eq!(path_cost(&graph, &result.path), Some(result.length));
                        assert_eq!(result.path.first().map(String::as_str), Some(source));
                        assert_eq!(result.path.last().map(String::as_str), Some(target));
                    }
                    None => assert!(!result.found, "{source} -> {target} should be unreachable"),
                }
            }
        }
    }
}

#[test]
fn test_single_source_agrees_with_pairwise() {
    let graph = WordGraph::from_text(STORY);
    for path in shortest_paths_from(&graph, "the").unwrap() {
        let pairwise = shortest_path(&graph, "the", &path.target).unwrap();
        assert_eq!(path.length, pairwise.length, "to {}", path.target);
    }
}

#[test]
fn test_story_pagerank_prefers_hub() {
    let graph = WordGraph::from_text(STORY);
    let ranks = PageRank::compute(&graph);
    let top = ranks.top_k(1);
    assert_eq!(top[0].0, "the");

    let direct = page_rank(&graph, "the").unwrap();
    assert_eq!(Some(direct), ranks.score("the"));
}

#[test]
fn test_walk_on_story_follows_edges() {
    let graph = WordGraph::from_text(STORY);
    for seed in 0..50 {
        let walk = random_walk(&graph, &mut StdRng::seed_from_u64(seed));
        assert!(!walk.is_empty());
        for pair in walk.windows(2) {
            assert!(graph.weight(&pair[0], &pair[1]).is_some());
        }
    }
}
