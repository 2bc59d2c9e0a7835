//! wordgraph CLI — build a word graph from a text file and query it.
//!
//! Usage:
//!   wordgraph <FILE>                  interactive menu
//!   wordgraph <FILE> <command> ...    single query

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use wordgraph::{
    bridge_words, generate_text, load_graph, page_rank, random_walk, shortest_path,
    shortest_paths_from, Config, PageRank, WordGraph,
};

#[derive(Parser)]
#[command(
    name = "wordgraph",
    version,
    about = "Word-adjacency graph queries over a text file"
)]
struct Cli {
    /// Text file to build the graph from
    file: PathBuf,
    /// Seed for text generation and random walks
    #[arg(long)]
    seed: Option<u64>,
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph as adjacency lists
    Show {
        /// Print nodes and edges as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },
    /// Insert bridge words into new text
    Generate {
        /// Text to augment
        text: String,
    },
    /// Shortest path from WORD1 to WORD2, or to every reachable word
    Path { word1: String, word2: Option<String> },
    /// PageRank of WORD, or the top-ranked words
    Rank {
        word: Option<String>,
        /// Number of words to list when no WORD is given
        #[arg(long)]
        top: Option<usize>,
    },
    /// Random walk from a random word
    Walk,
}

fn init_logging(verbose: u8, config: &Config) {
    let level = match verbose {
        0 => config.log_level.parse().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

fn cmd_show(graph: &WordGraph, json: bool) -> i32 {
    if !json {
        print!("{}", graph);
        return 0;
    }
    match serde_json::to_string_pretty(&graph.snapshot()) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_bridge(graph: &WordGraph, word1: &str, word2: &str) -> i32 {
    match bridge_words(graph, &normalize(word1), &normalize(word2)) {
        Ok(bridges) => {
            println!("{}", bridges);
            0
        }
        Err(e) => {
            println!("{}", e);
            1
        }
    }
}

fn cmd_generate(graph: &WordGraph, text: &str, rng: &mut StdRng) -> i32 {
    println!("{}", generate_text(graph, text, rng));
    0
}

fn cmd_path(graph: &WordGraph, word1: &str, word2: Option<&str>) -> i32 {
    let source = normalize(word1);
    let result = match word2.map(normalize) {
        Some(target) => shortest_path(graph, &source, &target).map(|path| vec![path]),
        None => shortest_paths_from(graph, &source),
    };
    match result {
        Ok(paths) => {
            for path in paths {
                println!("{}", path);
            }
            0
        }
        Err(e) => {
            println!("{}", e);
            1
        }
    }
}

fn cmd_rank(graph: &WordGraph, word: Option<&str>, top: usize) -> i32 {
    let Some(word) = word.map(normalize) else {
        let ranks = PageRank::compute(graph);
        for (word, score) in ranks.top_k(top) {
            println!("{:<24}  {:.6}", word, score);
        }
        return 0;
    };
    match page_rank(graph, &word) {
        Ok(score) => {
            println!("PageRank({}) = {:.6}", word, score);
            0
        }
        Err(e) => {
            println!("{}", e);
            1
        }
    }
}

fn cmd_walk(graph: &WordGraph, rng: &mut StdRng) -> i32 {
    println!("{}", random_walk(graph, rng).join(" "));
    0
}

/// Print a prompt and read one line; `None` on end of input
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            None
        }
        None => None,
    }
}

fn run_menu(graph: &WordGraph, rng: &mut StdRng) -> i32 {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Choose an action:");
        println!("1. Show directed graph");
        println!("2. Query bridge words");
        println!("3. Generate new text");
        println!("4. Shortest path");
        println!("5. PageRank");
        println!("6. Random walk");
        println!("7. Quit");

        let Some(choice) = prompt(&mut lines, "> ") else {
            return 0;
        };

        match choice.trim() {
            "1" => {
                cmd_show(graph, false);
            }
            "2" => {
                let Some(word1) = prompt(&mut lines, "word1: ") else { return 0 };
                let Some(word2) = prompt(&mut lines, "word2: ") else { return 0 };
                cmd_bridge(graph, &word1, &word2);
            }
            "3" => {
                let Some(text) = prompt(&mut lines, "text: ") else { return 0 };
                cmd_generate(graph, &text, rng);
            }
            "4" => {
                let Some(word1) = prompt(&mut lines, "from: ") else { return 0 };
                let Some(word2) = prompt(&mut lines, "to (empty for all): ") else { return 0 };
                let word2 = Some(word2).filter(|w| !w.trim().is_empty());
                cmd_path(graph, &word1, word2.as_deref());
            }
            "5" => {
                let Some(word) = prompt(&mut lines, "word: ") else { return 0 };
                cmd_rank(graph, Some(word.as_str()), 0);
            }
            "6" => {
                cmd_walk(graph, rng);
            }
            "7" => return 0,
            other => println!("Unknown option '{}'", other),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose, &config);

    let graph = match load_graph(&cli.file) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = make_rng(cli.seed.or(config.seed));

    let code = match cli.command {
        None => run_menu(&graph, &mut rng),
        Some(Commands::Show { json }) => cmd_show(&graph, json),
        Some(Commands::Bridge { word1, word2 }) => cmd_bridge(&graph, &word1, &word2),
        Some(Commands::Generate { text }) => cmd_generate(&graph, &text, &mut rng),
        Some(Commands::Path { word1, word2 }) => cmd_path(&graph, &word1, word2.as_deref()),
        Some(Commands::Rank { word, top }) => {
            cmd_rank(&graph, word.as_deref(), top.unwrap_or(config.top))
        }
        Some(Commands::Walk) => cmd_walk(&graph, &mut rng),
    };
    std::process::exit(code);
}
