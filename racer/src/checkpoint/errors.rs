use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CheckpointError {
    #[error("checkpoint course has no checkpoints")]
    EmptyCourse,

    #[error("trigger radius must be positive, got {0}")]
    InvalidRadius(f32),
}
