//! Query errors and result structures

use std::fmt;
use thiserror::Error;

/// Errors returned by graph queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// One or more queried words are not nodes of the graph
    #[error("No {} in the graph!", quote_all(.words))]
    NotFound { words: Vec<String> },
}

impl QueryError {
    pub fn not_found<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// `"a"` or `"a" or "b"`
fn quote_all(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Result type for graph queries
pub type QueryResult<T> = Result<T, QueryError>;

/// Bridge words found between two words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeWords {
    pub from: String,
    pub to: String,
    /// Deduplicated, sorted bridge words
    pub words: Vec<String>,
}

impl BridgeWords {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.words.is_empty() {
            write!(f, "No bridge words from \"{}\" to \"{}\"!", self.from, self.to)
        } else {
            write!(
                f,
                "The bridge words from \"{}\" to \"{}\" are: {}.",
                self.from,
                self.to,
                self.words.join(", ")
            )
        }
    }
}

/// Result of a shortest path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub source: String,
    pub target: String,
    /// Whether the target is reachable
    pub found: bool,
    /// Words from source to target (inclusive); empty when not found
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub length: u64,
}

impl PathResult {
    pub fn not_found(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            found: false,
            path: Vec::new(),
            length: 0,
        }
    }

    pub fn found(path: Vec<String>, length: u64) -> Self {
        let source = path.first().cloned().unwrap_or_default();
        let target = path.last().cloned().unwrap_or_default();
        Self {
            source,
            target,
            found: true,
            path,
            length,
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(
                f,
                "Shortest path: {} (length = {})",
                self.path.join(" -> "),
                self.length
            )
        } else {
            write!(f, "No path from \"{}\" to \"{}\"!", self.source, self.target)
        }
    }
}
