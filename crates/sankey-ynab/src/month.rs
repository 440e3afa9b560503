//! Month selection and the month-keyed category grouping.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use sankey_domain::{BudgetCategory, BudgetMonth};
use uuid::Uuid;

use crate::UpstreamError;

/// Which month to fetch: the provider's `current` alias or an exact date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthSelector {
    #[default]
    Current,
    Date(NaiveDate),
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::Current => f.write_str("current"),
            MonthSelector::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for MonthSelector {
    type Err = UpstreamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("current") {
            return Ok(MonthSelector::Current);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(MonthSelector::Date)
            .map_err(|_| UpstreamError::InvalidMonth(value.to_string()))
    }
}

/// Indexes a month's flat category listing by group id, preserving the
/// listing order within each group. This is the keyed shape the tree
/// builder's lookup path consumes.
pub fn categories_by_group(month: &BudgetMonth) -> HashMap<Uuid, Vec<BudgetCategory>> {
    let mut by_group: HashMap<Uuid, Vec<BudgetCategory>> = HashMap::new();
    for category in &month.categories {
        by_group
            .entry(category.group_id)
            .or_default()
            .push(category.clone());
    }
    by_group
}
