use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::PhysicsBody;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// Minimal free body used when no engine is attached: explicit Euler
/// integration with linear drag, no gravity and no contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pose: Pose,
    linear_velocity: Vec3,
    angular_velocity: Vec3,
    drag: f32,
}

impl RigidBody {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            drag: 0.0,
        }
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    /// Advance the body by `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        if self.drag > 0.0 {
            self.linear_velocity *= 1.0 / (1.0 + self.drag * dt);
        }
        self.pose.position += self.linear_velocity * dt;

        // angular velocity is in radians per second around a world axis
        let spin = self.angular_velocity * dt;
        if spin != Vec3::ZERO {
            self.pose.rotation = (Quat::from_scaled_axis(spin) * self.pose.rotation).normalize();
        }
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(Pose::default())
    }
}

impl PhysicsBody for RigidBody {
    fn position(&self) -> Vec3 {
        self.pose.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.angular_velocity = velocity;
    }

    fn apply_velocity_change(&mut self, delta: Vec3) {
        self.linear_velocity += delta;
    }
}
