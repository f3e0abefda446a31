mod rigid_body;
mod traits;

pub use rigid_body::{Pose, RigidBody};
pub use traits::PhysicsBody;
