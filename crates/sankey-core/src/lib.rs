//! sankey-core
//!
//! The tree-to-graph transformation: builds a rooted budget tree from
//! provider records and flattens it into index-linked node and link arrays.
//! Depends on sankey-domain. No I/O, no HTTP, no storage.

pub mod error;
pub mod graph;
pub mod tree;

pub use error::FlowError;
pub use graph::SankeyGraph;
pub use tree::{FlowNode, FlowTree, ROOT_NAME};
