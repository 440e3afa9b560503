use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("must provide a YNAB access token")]
    MissingToken,

    #[error("must provide a budget id")]
    MissingBudgetId,

    #[error("invalid month selector: {0}")]
    InvalidMonth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YNAB API error ({status}): {detail}")]
    Api { status: u16, detail: String },
}
