use thiserror::Error;

use crate::env::EnvError;

#[derive(Debug, Error)]
pub enum RolloutError {
    #[error("task canceled")]
    Canceled,

    #[error("environment failed: {0}")]
    Env(#[from] EnvError),

    #[error("trajectory sink rejected shards: {0}")]
    Sink(String),
}

impl From<tokio::sync::oneshot::error::RecvError> for RolloutError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        RolloutError::Canceled
    }
}
