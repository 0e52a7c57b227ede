//! Domain model for the survival agent's decision-and-locomotion core.
//!
//! `agent-core` defines the data the behavior tree and steering pipeline
//! exchange: world snapshots, tracked records, the blackboard store, and the
//! staged steering pipeline itself. The crate is pure computation - all I/O
//! and collaborator wiring lives in the `runtime` crate.
pub mod blackboard;
pub mod config;
pub mod rng;
pub mod state;
pub mod steering;

pub use blackboard::{Blackboard, BlackboardError, Slot, Value, ValueKind};
pub use config::AgentConfig;
pub use rng::Pcg32;
pub use state::{
    AgentSnapshot, Corner, Footprint, ItemKind, SightedEntity, SightedItem, StructureRecord,
    TargetItem, Vec2, WorldBounds, depletion_urgency,
};
pub use steering::{
    Arrive, AvoidHazardsConstraint, BasicActuator, Constraint, Decomposer, FixedGoalTargeter,
    HazardView, LookAround, NavMesh, NavMeshDecomposer, Seek, SteeringBehavior, SteeringMode,
    SteeringOutput, SteeringPipeline, Wander,
};
