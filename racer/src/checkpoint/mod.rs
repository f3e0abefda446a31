mod course;
mod errors;
mod traits;

pub use course::{CheckpointCourse, CheckpointEvent};
pub use errors::CheckpointError;
pub use traits::CheckpointTracker;
