//! Per-tick runtime for the survival agent.
//!
//! This crate wires the domain model from `agent-core` and the node
//! framework from `behavior-tree` into a working agent: the concrete
//! condition/action leaves, the composed decision tree, the driver that
//! ticks it, and the orchestrator that feeds it world snapshots and turns
//! its decisions into movement output.
//!
//! Modules are organized by responsibility:
//! - [`world`] declares the external-collaborator traits (perception,
//!   inventory, item claiming, debug overlay) and a reference inventory
//! - [`context`] bundles the blackboard, config, and collaborators that
//!   every node tick receives
//! - [`nodes`] hosts the behavior catalog (conditions and actions)
//! - [`subtrees`] and [`presets`] assemble the catalog into the shipped tree
//! - [`driver`] owns the root node and the seeded blackboard
//! - [`orchestrator`] sequences ingestion, tree tick, and steering per tick
//! - [`loader`] reads agent configuration from TOML files
pub mod context;
pub mod driver;
pub mod loader;
pub mod nodes;
pub mod orchestrator;
pub mod presets;
pub mod subtrees;
pub mod world;

pub use context::AgentContext;
pub use driver::BehaviorTreeDriver;
pub use loader::ConfigLoader;
pub use orchestrator::AgentRuntime;
pub use subtrees::AgentBehavior;
pub use world::{
    DebugOverlay, Inventory, ItemClaim, ItemRecord, NoopOverlay, Perception, SlotInventory,
};
