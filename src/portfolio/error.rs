use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("portfolio request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("portfolio responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to parse portfolio response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NotifyError {
    /// Short label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            NotifyError::Client(_) => "client",
            NotifyError::Transport(_) => "transport",
            NotifyError::Status { .. } => "status",
            NotifyError::Decode(_) => "decode",
        }
    }
}
