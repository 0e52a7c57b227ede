//! Shared state store ("blackboard") for the behavior tree and pipeline.
//!
//! The board is the sole channel through which tree nodes, steering stages,
//! and the driving loop exchange data. Slots are created once when the tree
//! is assembled and mutated thereafter; a slot keeps a single payload type
//! for its lifetime.

mod error;
mod value;

use std::collections::HashMap;

pub use error::BlackboardError;
pub use value::{SlotValue, Value, ValueKind};

/// Result alias for blackboard operations.
pub type Result<T> = std::result::Result<T, BlackboardError>;

/// Names of the slots the survival agent's tree and pipeline share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Slot {
    /// Per-tick vitals snapshot ([`crate::AgentSnapshot`]).
    Agent,
    /// Static world bounds.
    World,
    /// Coordinate the locomotion layer should steer toward.
    Target,
    /// Steering mode the actuator should apply, if any was selected.
    ActiveSteering,
    /// All structures sighted so far, oldest first.
    Structures,
    /// The structure currently being searched.
    CurrentStructure,
    /// Position the current structure was entered from.
    StructureEntry,
    /// Sighted pickups not yet pursued.
    PendingItems,
    /// The pickup currently being pursued.
    TargetItem,
    /// Hostile positions seen this tick (fully replaced every tick).
    Enemies,
}

/// Typed key/value store with create-once slots.
///
/// All mutation is synchronous: a write from an earlier-evaluated node is
/// visible to every later read within the same tick.
#[derive(Debug, Default)]
pub struct Blackboard {
    slots: HashMap<Slot, Value>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot. Fails if the slot already exists - slots are created
    /// exactly once, at construction time.
    pub fn put<T: SlotValue>(&mut self, slot: Slot, value: T) -> Result<()> {
        if self.slots.contains_key(&slot) {
            return Err(BlackboardError::SlotExists { slot });
        }
        self.slots.insert(slot, value.into_value());
        Ok(())
    }

    /// Reads a copy of the slot's payload.
    pub fn get<T: SlotValue>(&self, slot: Slot) -> Result<T> {
        let stored = self
            .slots
            .get(&slot)
            .ok_or(BlackboardError::Missing { slot })?;
        T::from_value(stored).ok_or(BlackboardError::TypeMismatch {
            slot,
            stored: stored.kind(),
            requested: T::KIND,
        })
    }

    /// Overwrites an existing slot's payload. Fails if the slot does not
    /// exist or if the new payload's type differs from the stored one.
    pub fn set<T: SlotValue>(&mut self, slot: Slot, value: T) -> Result<()> {
        let stored = self
            .slots
            .get_mut(&slot)
            .ok_or(BlackboardError::Missing { slot })?;
        if stored.kind() != T::KIND {
            return Err(BlackboardError::TypeMismatch {
                slot,
                stored: stored.kind(),
                requested: T::KIND,
            });
        }
        *stored = value.into_value();
        Ok(())
    }
}
