//! Common test utilities for wordgraph integration tests
//!
//! Fixture texts plus slow reference implementations to check the real
//! algorithms against.

pub mod brute_force;
pub mod corpus;

pub use brute_force::{all_simple_path_costs, path_cost};
pub use corpus::{SAMPLE, STORY};
