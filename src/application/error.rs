use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError, portfolio::NotifyError};

/// Errors surfaced by the operator binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("portfolio notification failed: {0}")]
    Notify(#[from] NotifyError),
}
