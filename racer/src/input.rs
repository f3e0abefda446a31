use std::collections::HashMap;

use crate::agent::Action;

pub const VERTICAL_AXIS: &str = "Vertical";
pub const HORIZONTAL_AXIS: &str = "Horizontal";

/// Polled manual input, e.g. keyboard or gamepad axes.
pub trait InputAxes {
    /// Current value of the named axis in [-1, 1].
    fn axis(&self, name: &str) -> f32;
}

/// Snapshot of axis values fed by whatever reads the device.
#[derive(Debug, Clone, Default)]
pub struct AxisState {
    axes: HashMap<String, f32>,
}

impl AxisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f32) {
        self.axes.insert(name.into(), value.clamp(-1.0, 1.0));
    }
}

impl InputAxes for AxisState {
    fn axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }
}

/// Manual driving: vertical axis is throttle, horizontal axis is steering.
pub fn heuristic(input: &dyn InputAxes) -> Action {
    Action {
        throttle: input.axis(VERTICAL_AXIS),
        steer: input.axis(HORIZONTAL_AXIS),
    }
}
