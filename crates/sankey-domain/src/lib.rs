//! sankey-domain
//!
//! Pure data types for the budget-to-Sankey transformation: raw provider
//! records, node identity, and the flattened node/link output records.
//! No I/O, no HTTP, no storage.

pub mod category;
pub mod node;

pub use category::*;
pub use node::*;
