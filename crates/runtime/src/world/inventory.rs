//! Reference inventory implementation.
//!
//! Fixed-capacity, slot-addressed storage suitable for tests and for
//! embedders without their own inventory system. Consumed items are kept in
//! a log the embedding engine drains each tick to apply their effects.

use arrayvec::ArrayVec;

use super::{Inventory, ItemRecord};

/// Upper bound on slot count, a compile-time array size.
const MAX_SLOTS: usize = 5;

/// Slot-addressed inventory backed by a fixed-size array.
#[derive(Clone, Debug, Default)]
pub struct SlotInventory {
    slots: ArrayVec<Option<ItemRecord>, MAX_SLOTS>,
    consumed: Vec<ItemRecord>,
}

impl SlotInventory {
    /// Upper bound on slot count.
    pub const MAX_SLOTS: usize = MAX_SLOTS;

    /// Creates an empty inventory with the given slot count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`Self::MAX_SLOTS`].
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= Self::MAX_SLOTS,
            "capacity {capacity} exceeds MAX_SLOTS"
        );
        let mut slots = ArrayVec::new();
        for _ in 0..capacity {
            slots.push(None);
        }
        Self {
            slots,
            consumed: Vec::new(),
        }
    }

    /// Items used since the last drain, in use order.
    ///
    /// The embedding engine applies their effects (vitals restoration) and
    /// reflects the result in the next perception snapshot.
    pub fn drain_consumed(&mut self) -> Vec<ItemRecord> {
        std::mem::take(&mut self.consumed)
    }
}

impl Inventory for SlotInventory {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn item_at(&self, slot: usize) -> Option<ItemRecord> {
        self.slots.get(slot).copied().flatten()
    }

    fn add_item(&mut self, slot: usize, item: ItemRecord) -> bool {
        match self.slots.get_mut(slot) {
            Some(stored @ None) => {
                *stored = Some(item);
                true
            }
            _ => false,
        }
    }

    fn remove_item(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(stored @ Some(_)) => {
                *stored = None;
                true
            }
            _ => false,
        }
    }

    fn use_item(&mut self, slot: usize) -> bool {
        match self.slots.get(slot).copied().flatten() {
            Some(item) => {
                self.consumed.push(item);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::ItemKind;

    #[test]
    fn add_remove_and_capacity() {
        let mut inv = SlotInventory::new(3);
        assert_eq!(inv.capacity(), 3);

        let kit = ItemRecord::new(ItemKind::Health, 5);
        assert!(inv.add_item(1, kit));
        assert!(!inv.add_item(1, kit)); // occupied
        assert!(!inv.add_item(3, kit)); // out of range
        assert_eq!(inv.item_at(1), Some(kit));

        assert!(inv.remove_item(1));
        assert!(!inv.remove_item(1)); // already empty
        assert_eq!(inv.item_at(1), None);
    }

    #[test]
    fn use_logs_consumption_but_keeps_the_slot() {
        let mut inv = SlotInventory::new(2);
        let food = ItemRecord::new(ItemKind::Food, 4);
        inv.add_item(0, food);

        assert!(inv.use_item(0));
        assert_eq!(inv.item_at(0), Some(food)); // still occupied until removed
        assert_eq!(inv.drain_consumed(), vec![food]);
        assert!(inv.drain_consumed().is_empty());

        assert!(!inv.use_item(1)); // empty slot
    }

    #[test]
    fn metadata_maps_consumables_to_their_attribute() {
        let inv = SlotInventory::new(1);
        let kit = ItemRecord::new(ItemKind::Health, 5);
        let food = ItemRecord::new(ItemKind::Food, 4);
        let junk = ItemRecord::new(ItemKind::Junk, 0);

        assert_eq!(inv.metadata(&kit, "health"), Some(5));
        assert_eq!(inv.metadata(&kit, "energy"), None);
        assert_eq!(inv.metadata(&food, "energy"), Some(4));
        assert_eq!(inv.metadata(&junk, "health"), None);
    }
}
