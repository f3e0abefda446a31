use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("agent has no physics body attached")]
    MissingPhysics,

    #[error("agent has no checkpoint tracker attached")]
    MissingCheckpoints,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
