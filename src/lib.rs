#![doc(test(attr(deny(warnings))))]

//! Turns one budget month from the budgeting provider into flat,
//! index-linked node and link arrays for flow-diagram (Sankey) rendering,
//! and writes them out as JSON.

pub mod cli;
pub mod error;
pub mod pipeline;

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. Safe to call more than once;
/// only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_sankey=info".parse().unwrap());
        fmt().with_env_filter(filter).init();

        tracing::info!(version = env!("CARGO_PKG_VERSION"), "budget_sankey starting");
    });
}

pub use error::SankeyError;
pub use pipeline::render_month;
