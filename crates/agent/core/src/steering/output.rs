//! Movement command produced by the steering pipeline.

use crate::state::Vec2;

/// Desired motion for the physical-movement collaborator to apply.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SteeringOutput {
    /// Desired linear velocity, world units per second.
    pub linear: Vec2,
    /// Desired angular velocity, radians per second.
    pub angular: f32,
    /// Whether the agent should sprint while executing this command.
    pub run_mode: bool,
}

impl SteeringOutput {
    pub fn new(linear: Vec2, angular: f32) -> Self {
        Self {
            linear,
            angular,
            run_mode: false,
        }
    }
}
