use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const OBSERVATION_SIZE: usize = 9;
pub const ACTION_SIZE: usize = 2;

/// Continuous driving command. Values are nominally in [-1, 1] but are not
/// clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Forward (+) or backward (-) drive.
    pub throttle: f32,
    /// Right (+) or left (-) yaw.
    pub steer: f32,
}

impl Action {
    pub fn new(throttle: f32, steer: f32) -> Self {
        Self { throttle, steer }
    }

    /// Build from a flat `[throttle, steer]` buffer.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [throttle, steer] => Some(Self::new(*throttle, *steer)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; ACTION_SIZE] {
        [self.throttle, self.steer]
    }
}

/// Agent position, agent velocity and next checkpoint position, in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation([f32; OBSERVATION_SIZE]);

impl Observation {
    pub fn new(position: Vec3, velocity: Vec3, checkpoint: Vec3) -> Self {
        let mut values = [0.0; OBSERVATION_SIZE];
        values[0..3].copy_from_slice(&position.to_array());
        values[3..6].copy_from_slice(&velocity.to_array());
        values[6..9].copy_from_slice(&checkpoint.to_array());
        Self(values)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_slice(&self.0[0..3])
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::from_slice(&self.0[3..6])
    }

    pub fn checkpoint(&self) -> Vec3 {
        Vec3::from_slice(&self.0[6..9])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}
