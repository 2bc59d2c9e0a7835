//! Owned edge and graph views for export

use serde::{Deserialize, Serialize};

/// A directed, weighted adjacency between two words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Preceding word
    pub source: String,
    /// Following word
    pub target: String,
    /// Number of times `target` immediately follows `source`
    pub weight: u32,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// Serializable copy of a whole graph
///
/// Nodes and edges are in lexicographic order, so two snapshots of the
/// same graph serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}
