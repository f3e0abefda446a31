use thiserror::Error;

use crate::agent::AgentError;
use crate::checkpoint::CheckpointError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("episode is not running; call reset first")]
    EpisodeNotRunning,

    #[error("expected {expected} actions, got {got}")]
    ActionCount { expected: usize, got: usize },

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode step info: {0}")]
    InfoEncode(#[from] serde_json::Error),
}
