//! Loading a word graph from a text file

use crate::graph::WordGraph;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a source text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for source loading
pub type SourceResult<T> = Result<T, SourceError>;

/// Read the whole file and build its word graph
///
/// The file is read completely before tokenizing, so a read failure never
/// leaves a partially built graph behind. Invalid UTF-8 is replaced rather
/// than rejected.
pub fn load_graph(path: impl AsRef<Path>) -> SourceResult<WordGraph> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let graph = WordGraph::from_text(&text);
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded source text"
    );
    Ok(graph)
}
