//! Raw budget records as supplied by the budgeting provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A leaf budget line with a single budgeted amount in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "category_group_id")]
    pub group_id: Uuid,
    pub budgeted: i64,
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl BudgetCategory {
    /// Returns `true` when the category survives filtering and contributes
    /// to its group's total.
    pub fn contributes(&self) -> bool {
        !self.hidden && !self.deleted && self.budgeted != 0
    }
}

/// A named bucket of categories; aggregates into a single graph node.
///
/// The embedded category list is optional because the month endpoint
/// delivers categories as a flat listing keyed by group id instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategoryGroup {
    pub id: Uuid,
    pub name: String,
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<BudgetCategory>>,
}

impl BudgetCategoryGroup {
    /// Returns `true` unless the group is hidden or deleted.
    pub fn visible(&self) -> bool {
        !self.hidden && !self.deleted
    }
}

/// A single budget month: the aggregate budgeted income plus the
/// month-scoped category listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetMonth {
    pub month: NaiveDate,
    pub budgeted: i64,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}
