use glam::Vec3;

use crate::physics::Pose;

/// Per-agent episode counters that survive across ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookkeeping {
    start: Pose,
    pub last_position: Vec3,
    /// Seconds spent below the stuck distance, reset on real movement.
    pub stuck_timer: f32,
    /// Path length travelled this episode.
    pub move_distance: f32,
}

impl Bookkeeping {
    pub fn new(start: Pose) -> Self {
        Self {
            start,
            last_position: start.position,
            stuck_timer: 0.0,
            move_distance: 0.0,
        }
    }

    /// Pose captured when the agent was built.
    pub fn start(&self) -> Pose {
        self.start
    }

    pub fn reset(&mut self, position: Vec3) {
        self.last_position = position;
        self.stuck_timer = 0.0;
        self.move_distance = 0.0;
    }
}
