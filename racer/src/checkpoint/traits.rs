use glam::Vec3;

/// Ordered waypoint progress the agent races through.
pub trait CheckpointTracker: Send {
    /// Move the cursor back to the first checkpoint.
    fn reset(&mut self);

    /// World position of the checkpoint the agent is heading for.
    fn next_position(&self) -> Vec3;

    /// Move the cursor to the following checkpoint.
    fn advance(&mut self);
}
