//! Node identity and the flattened graph records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// String rendering of the synthetic root id in serialized output.
pub const ROOT_ID: &str = "__ROOT__";

/// Identifies a node in the flow tree.
///
/// The synthetic root is a distinct variant rather than a reserved string,
/// so it can never collide with a provider-issued group or category id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Root,
    Group(Uuid),
    Category(Uuid),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Root => f.write_str(ROOT_ID),
            NodeId::Group(id) | NodeId::Category(id) => write!(f, "{id}"),
        }
    }
}

/// One entry of the positional node array. Its index in that array is its
/// identity in link records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatNode {
    pub id: String,
    pub name: String,
    pub value: i64,
}

/// A directed edge between two positions of the flattened node array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub value: i64,
}
