//! External-collaborator boundaries.
//!
//! The core consumes the world exclusively through these traits; the
//! embedding engine implements them. Everything here is queried or mutated
//! once per tick by the orchestrator or by item-handling leaves.

mod inventory;

pub use inventory::SlotInventory;

use agent_core::{AgentSnapshot, Footprint, ItemKind, SightedEntity, SightedItem, Vec2, WorldBounds};

/// An item converted from a world sighting into inventory-ready form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub kind: ItemKind,
    /// Restorative amount for consumables; meaningless for weapons/junk.
    pub restore: i32,
}

impl ItemRecord {
    pub fn new(kind: ItemKind, restore: i32) -> Self {
        Self { kind, restore }
    }
}

/// Field-of-view and vitals queries answered by the engine.
pub trait Perception: Send {
    /// The agent's externally-owned vitals, copied fresh every tick.
    fn agent(&self) -> AgentSnapshot;

    /// Static world bounds.
    fn world(&self) -> WorldBounds;

    /// Entities currently in view, classified item or hostile.
    fn visible_entities(&self) -> Vec<SightedEntity>;

    /// Structure footprints currently in view.
    fn visible_structures(&self) -> Vec<Footprint>;
}

/// Atomic conversion of a sighted pickup into an inventory-ready record.
pub trait ItemClaim: Send {
    /// Claims the sighted item out of the world.
    ///
    /// Returns `None` if the entity is no longer present (already taken,
    /// despawned, or out of reach by the time the claim lands).
    fn grab(&mut self, item: &SightedItem) -> Option<ItemRecord>;
}

/// Slot-addressed item storage owned by the engine.
pub trait Inventory: Send {
    fn capacity(&self) -> usize;

    /// The item in the given slot, if any.
    fn item_at(&self, slot: usize) -> Option<ItemRecord>;

    /// Stores an item in the given (empty) slot. Returns false if the slot
    /// is occupied or out of range.
    fn add_item(&mut self, slot: usize, item: ItemRecord) -> bool;

    /// Clears the given slot. Returns false if it was already empty.
    fn remove_item(&mut self, slot: usize) -> bool;

    /// Applies the item's effect (the engine restores vitals as a result).
    /// The slot stays occupied until removed. Returns false on empty slot.
    fn use_item(&mut self, slot: usize) -> bool;

    /// Numeric item attribute by name (e.g. `"health"`, `"energy"`).
    fn metadata(&self, item: &ItemRecord, attribute: &str) -> Option<i32> {
        match (item.kind, attribute) {
            (ItemKind::Health, "health") | (ItemKind::Food, "energy") => Some(item.restore),
            _ => None,
        }
    }
}

/// Write-only debug visualization; never read back by the core.
pub trait DebugOverlay {
    fn structure_marker(&mut self, _footprint: &Footprint, _checked: bool) {}

    fn target_marker(&mut self, _position: Vec2) {}
}

/// Overlay that draws nothing.
pub struct NoopOverlay;

impl DebugOverlay for NoopOverlay {}
