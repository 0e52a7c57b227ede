//! Sighted-entity classification and item-pursuit records.

use super::Vec2;

/// Category of a pickup, as classified by perception and item metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum ItemKind {
    Health,
    Food,
    Weapon,
    #[default]
    Junk,
}

impl ItemKind {
    /// Junk and weapons are never kept; their slots may be reclaimed.
    pub fn is_disposable(self) -> bool {
        matches!(self, ItemKind::Junk | ItemKind::Weapon)
    }
}

/// Raw sighting of a pickup lying in the world.
///
/// Added to the pending list on first sighting (deduplicated by exact
/// position), removed once picked up or declared unreachable.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SightedItem {
    pub position: Vec2,
    pub kind: ItemKind,
}

impl SightedItem {
    pub fn new(position: Vec2, kind: ItemKind) -> Self {
        Self { position, kind }
    }
}

/// The single item currently being pursued.
///
/// Overwritten whenever a new item is chosen; `taken` flips once the claim
/// resolves (successfully or by giving the item up as stale).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TargetItem {
    pub item: SightedItem,
    pub valid: bool,
    pub taken: bool,
}

impl TargetItem {
    /// A fresh pursuit of the given sighting.
    pub fn pursuing(item: SightedItem) -> Self {
        Self {
            item,
            valid: true,
            taken: false,
        }
    }

    /// The initial "nothing chosen yet" record.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Entity reported by perception, classified for the tracked sets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SightedEntity {
    Item(SightedItem),
    Hostile(Vec2),
}
