//! Core graph data structures

mod edge;
mod index;
mod word_graph;


pub use edge::{Edge, GraphSnapshot};
pub use word_graph::WordGraph;

pub(crate) use index::NodeIndex;
