//! Snapshot and record types shared by the tree and the pipeline.

pub mod agent;
pub mod items;
pub mod structures;
pub mod vec2;
pub mod world;

pub use agent::{AgentSnapshot, depletion_urgency};
pub use items::{ItemKind, SightedEntity, SightedItem, TargetItem};
pub use structures::{Corner, Footprint, StructureRecord};
pub use vec2::Vec2;
pub use world::WorldBounds;
