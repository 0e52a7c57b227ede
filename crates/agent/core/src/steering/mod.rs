//! Steering behaviors and the staged steering pipeline.

pub mod behaviors;
pub mod output;
pub mod pipeline;

pub use behaviors::{Arrive, LookAround, Seek, SteeringBehavior, SteeringMode, Wander};
pub use output::SteeringOutput;
pub use pipeline::{
    AvoidHazardsConstraint, BasicActuator, Constraint, Decomposer, FixedGoalTargeter, HazardView,
    NavMesh, NavMeshDecomposer, SteeringPipeline,
};
