use glam::Vec3;
use tracing::debug;

use super::{CheckpointError, CheckpointTracker};

/// What happened when the agent entered the next checkpoint's trigger volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointEvent {
    /// A non-final checkpoint at this index was reached.
    Reached(usize),
    /// The final checkpoint was reached.
    Goal,
}

/// A fixed sequence of spherical trigger volumes passed in order.
#[derive(Debug, Clone)]
pub struct CheckpointCourse {
    positions: Vec<Vec3>,
    cursor: usize,
    trigger_radius: f32,
}

impl CheckpointCourse {
    pub fn new(positions: Vec<Vec3>, trigger_radius: f32) -> Result<Self, CheckpointError> {
        if positions.is_empty() {
            return Err(CheckpointError::EmptyCourse);
        }
        if !(trigger_radius.is_finite() && trigger_radius > 0.0) {
            return Err(CheckpointError::InvalidRadius(trigger_radius));
        }
        Ok(Self {
            positions,
            cursor: 0,
            trigger_radius,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the last checkpoint.
    pub fn is_final(&self) -> bool {
        self.cursor + 1 == self.positions.len()
    }

    /// Check `position` against the next checkpoint's trigger volume.
    ///
    /// Only the checkpoint under the cursor can fire, so skipping ahead
    /// through later volumes has no effect.
    pub fn detect(&self, position: Vec3) -> Option<CheckpointEvent> {
        if position.distance(self.next_position()) > self.trigger_radius {
            return None;
        }
        if self.is_final() {
            Some(CheckpointEvent::Goal)
        } else {
            Some(CheckpointEvent::Reached(self.cursor))
        }
    }
}

impl CheckpointTracker for CheckpointCourse {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn next_position(&self) -> Vec3 {
        self.positions[self.cursor]
    }

    fn advance(&mut self) {
        if self.is_final() {
            debug!(cursor = self.cursor, "already at final checkpoint");
            return;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "advanced to next checkpoint");
    }
}
