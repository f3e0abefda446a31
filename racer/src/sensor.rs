use glam::Vec3;

use crate::physics::PhysicsBody;

/// Source of the "hit an obstacle" signal checked at the end of every tick.
pub trait CollisionSignal: Send {
    fn is_colliding(&self, body: &dyn PhysicsBody) -> bool;
}

/// Never reports a collision. Used when obstacle contact is detected by an
/// outside sensor, or not at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl CollisionSignal for NoCollision {
    fn is_colliding(&self, _body: &dyn PhysicsBody) -> bool {
        false
    }
}

/// Axis-aligned arena walls: leaving the box counts as hitting a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    min: Vec3,
    max: Vec3,
}

impl ArenaBounds {
    /// Corners may be passed in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl CollisionSignal for ArenaBounds {
    fn is_colliding(&self, body: &dyn PhysicsBody) -> bool {
        !self.contains(body.position())
    }
}
