use glam::{Quat, Vec3};

/// The slice of a physics engine body the agent reads and writes each tick.
///
/// Implementations own the authoritative pose and velocities. The agent never
/// integrates motion itself; it only resets state and applies instantaneous
/// velocity changes, leaving the next physics step to move the body.
pub trait PhysicsBody: Send {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);

    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);

    fn angular_velocity(&self) -> Vec3;
    fn set_angular_velocity(&mut self, velocity: Vec3);

    /// Add `delta` to the linear velocity, ignoring mass.
    fn apply_velocity_change(&mut self, delta: Vec3);

    /// World-space forward axis of the body.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}
