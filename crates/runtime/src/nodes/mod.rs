//! Behavior catalog: the concrete condition and action leaves.
//!
//! Leaves are plain functions over [`crate::AgentContext`], wrapped into
//! nodes with `behavior_tree::builder::{action, condition}` when the tree
//! is assembled. Store reads that find nothing make the leaf fail; the
//! selectors above recover.

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::{
    has_target_item, has_target_structure, inside_target_structure, is_energy_critical,
    is_health_critical, not_max_energy, not_max_health, structure_sweepable,
};
