use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),
    #[error("Invalid child reference: no node at slot {0}")]
    InvalidChildRef(usize),
    #[error("Node missing from index: {0}")]
    UnindexedNode(String),
}
