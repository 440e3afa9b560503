use thiserror::Error;

use sankey_config::ConfigError;
use sankey_core::FlowError;
use sankey_storage_json::StorageError;
use sankey_ynab::UpstreamError;

/// Error type covering the fetch, build, and write pipeline.
#[derive(Debug, Error)]
pub enum SankeyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Flatten error: {0}")]
    Flow(#[from] FlowError),

    #[error("Output error: {0}")]
    Storage(#[from] StorageError),
}
