//! Builds the rooted budget tree from provider records.

use std::collections::HashMap;

use sankey_domain::{BudgetCategory, BudgetCategoryGroup, NodeId};
use uuid::Uuid;

/// Display name of the synthetic root node.
pub const ROOT_NAME: &str = "Budgeted Income";

/// Arena slot of the synthetic root; the root is always inserted first.
pub(crate) const ROOT_SLOT: usize = 0;

/// A single node of the budget tree. Children are arena slots, not owned
/// subtrees, so the tree has no pointer cycles and no recursion-depth limit.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: NodeId,
    pub name: String,
    pub value: i64,
    pub children: Vec<usize>,
}

/// The rooted budget tree, immutable once built.
///
/// Every retained node has strictly positive value: categories are filtered
/// before insertion and groups whose surviving total is zero are discarded
/// wholesale. Child order mirrors input order exactly.
///
/// Duplicate ids across input records are a precondition violation; the
/// builder does not detect them, but flattening fails fast when it would
/// otherwise produce a corrupt index mapping.
#[derive(Debug, Clone)]
pub struct FlowTree {
    nodes: Vec<FlowNode>,
}

impl FlowTree {
    /// Builds a tree from groups plus a month-scoped category listing keyed
    /// by group id. A group with no entry in the lookup contributes nothing,
    /// exactly like a group whose categories are all filtered out.
    pub fn build(
        root_value: i64,
        groups: &[BudgetCategoryGroup],
        categories_by_group: &HashMap<Uuid, Vec<BudgetCategory>>,
    ) -> Self {
        let mut tree = Self::with_root(root_value);
        for group in groups {
            if let Some(categories) = categories_by_group.get(&group.id) {
                tree.insert_group(group, categories);
            }
        }
        tree
    }

    /// Builds a tree from groups carrying embedded category lists, the shape
    /// the categories endpoint returns. Groups without an embedded list are
    /// discarded.
    pub fn build_embedded(root_value: i64, groups: &[BudgetCategoryGroup]) -> Self {
        let mut tree = Self::with_root(root_value);
        for group in groups {
            if let Some(categories) = group.categories.as_deref() {
                tree.insert_group(group, categories);
            }
        }
        tree
    }

    fn with_root(root_value: i64) -> Self {
        Self {
            nodes: vec![FlowNode {
                id: NodeId::Root,
                name: ROOT_NAME.into(),
                value: root_value,
                children: Vec::new(),
            }],
        }
    }

    fn insert_group(&mut self, group: &BudgetCategoryGroup, categories: &[BudgetCategory]) {
        if !group.visible() {
            return;
        }

        let mut total = 0_i64;
        let mut leaves = Vec::new();
        for category in categories {
            if !category.contributes() {
                continue;
            }
            total += category.budgeted;
            leaves.push(FlowNode {
                id: NodeId::Category(category.id),
                name: category.name.clone(),
                value: category.budgeted,
                children: Vec::new(),
            });
        }

        // Everything filtered out (or nothing budgeted): the group vanishes.
        if total == 0 {
            return;
        }

        let group_slot = self.nodes.len();
        self.nodes.push(FlowNode {
            id: NodeId::Group(group.id),
            name: group.name.clone(),
            value: total,
            children: Vec::new(),
        });
        for leaf in leaves {
            let slot = self.nodes.len();
            self.nodes.push(leaf);
            self.nodes[group_slot].children.push(slot);
        }
        self.nodes[ROOT_SLOT].children.push(group_slot);
    }

    pub fn root(&self) -> &FlowNode {
        &self.nodes[ROOT_SLOT]
    }

    pub fn node(&self, slot: usize) -> Option<&FlowNode> {
        self.nodes.get(slot)
    }

    /// Total node count, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
