//! sankey-ynab
//!
//! Upstream adapter for the YNAB v1 REST API: a thin blocking client plus
//! the month-keyed category grouping the tree builder consumes. Does not
//! retry, paginate, or partially apply a fetch.

pub mod client;
pub mod error;
pub mod month;

pub use client::YnabClient;
pub use error::UpstreamError;
pub use month::{categories_by_group, MonthSelector};
