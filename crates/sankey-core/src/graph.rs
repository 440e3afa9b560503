//! Flattens a budget tree into positional Sankey node and link arrays.

use std::collections::HashMap;

use sankey_domain::{FlatNode, Link, NodeId};

use crate::error::FlowError;
use crate::tree::{FlowTree, ROOT_SLOT};

/// The flattened graph: an ordered node array plus an edge list referencing
/// node indices.
///
/// Both arrays are computed once at construction and stored immutably, so
/// the accessors are pure reads and repeated calls always return identical
/// content. The node array is produced first; the link pass resolves its
/// endpoints through the id-to-index mapping that pass established.
#[derive(Debug, Clone, PartialEq)]
pub struct SankeyGraph {
    nodes: Vec<FlatNode>,
    links: Vec<Link>,
}

impl SankeyGraph {
    /// Flattens `tree`. A root with no children yields a single-node,
    /// zero-link graph; that is a valid result, not an error.
    pub fn from_tree(tree: &FlowTree) -> Result<Self, FlowError> {
        let (nodes, index) = flatten_nodes(tree)?;
        let links = flatten_links(tree, &index)?;
        Ok(Self { nodes, links })
    }

    /// Node records in visitation order; a node's position here is its
    /// identity in link records.
    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    /// Edges referencing positions in [`SankeyGraph::nodes`].
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_parts(self) -> (Vec<FlatNode>, Vec<Link>) {
        (self.nodes, self.links)
    }
}

/// Pre-order depth-first walk with an explicit stack. Children are pushed in
/// reverse so they pop in input order.
fn flatten_nodes(tree: &FlowTree) -> Result<(Vec<FlatNode>, HashMap<NodeId, usize>), FlowError> {
    let mut nodes = Vec::with_capacity(tree.len());
    let mut index = HashMap::with_capacity(tree.len());

    let mut stack = vec![ROOT_SLOT];
    while let Some(slot) = stack.pop() {
        let node = tree.node(slot).ok_or(FlowError::InvalidChildRef(slot))?;
        if index.insert(node.id, nodes.len()).is_some() {
            return Err(FlowError::DuplicateNodeId(node.id.to_string()));
        }
        nodes.push(FlatNode {
            id: node.id.to_string(),
            name: node.name.clone(),
            value: node.value,
        });
        for &child in node.children.iter().rev() {
            stack.push(child);
        }
    }

    Ok((nodes, index))
}

enum Step {
    Enter(usize),
    Emit { parent: usize, child: usize },
}

/// Emits one link per parent/child edge. Within a branch, a child's subtree
/// links come out before the edge into the child itself; sibling branches
/// stay in child order.
fn flatten_links(tree: &FlowTree, index: &HashMap<NodeId, usize>) -> Result<Vec<Link>, FlowError> {
    let mut links = Vec::with_capacity(tree.len().saturating_sub(1));

    let mut stack = vec![Step::Enter(ROOT_SLOT)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(slot) => {
                let node = tree.node(slot).ok_or(FlowError::InvalidChildRef(slot))?;
                for &child in node.children.iter().rev() {
                    let child_node =
                        tree.node(child).ok_or(FlowError::InvalidChildRef(child))?;
                    stack.push(Step::Emit {
                        parent: slot,
                        child,
                    });
                    if !child_node.children.is_empty() {
                        stack.push(Step::Enter(child));
                    }
                }
            }
            Step::Emit { parent, child } => {
                let parent_node = tree.node(parent).ok_or(FlowError::InvalidChildRef(parent))?;
                let child_node = tree.node(child).ok_or(FlowError::InvalidChildRef(child))?;
                let source = lookup(index, parent_node.id)?;
                let target = lookup(index, child_node.id)?;
                links.push(Link {
                    source,
                    target,
                    value: child_node.value,
                });
            }
        }
    }

    Ok(links)
}

fn lookup(index: &HashMap<NodeId, usize>, id: NodeId) -> Result<usize, FlowError> {
    index
        .get(&id)
        .copied()
        .ok_or_else(|| FlowError::UnindexedNode(id.to_string()))
}
