//! Item pursuit and acquisition.

use behavior_tree::Status;

use agent_core::{AgentSnapshot, ItemKind, SightedItem, Slot, TargetItem, Vec2};

use crate::context::AgentContext;
use crate::world::ItemRecord;

use super::vitals::{use_any_food, use_any_health_kit};

/// Picks the most recent sighting off the pending list as the new pursuit.
pub fn spot_new_item(ctx: &mut AgentContext) -> Status {
    let Ok(items) = ctx.board.get::<Vec<SightedItem>>(Slot::PendingItems) else {
        return Status::Failure;
    };
    let Some(item) = items.last().copied() else {
        return Status::Failure;
    };

    if ctx
        .board
        .set(Slot::TargetItem, TargetItem::pursuing(item))
        .is_err()
    {
        return Status::Failure;
    }

    tracing::info!(position = ?item.position, kind = %item.kind, "moving to pick up a new item");
    Status::Success
}

/// Points the locomotion target at the pursued item.
pub fn set_item_as_target(ctx: &mut AgentContext) -> Status {
    let Ok(target) = ctx.board.get::<TargetItem>(Slot::TargetItem) else {
        return Status::Failure;
    };
    if !target.valid || target.taken {
        return Status::Failure;
    }

    if ctx.board.set(Slot::Target, target.item.position).is_err() {
        return Status::Failure;
    }
    Status::Success
}

/// Walks to the pursued item and claims it.
///
/// Running while out of grab range (the locomotion target is kept on the
/// item). Within range, the claim either lands - and the per-category
/// policy below decides the item's fate - or the sighting is stale and gets
/// dropped so the agent never stalls on it.
pub fn pickup_item(ctx: &mut AgentContext) -> Status {
    let Ok(target) = ctx.board.get::<TargetItem>(Slot::TargetItem) else {
        return Status::Failure;
    };
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    if !target.valid || target.taken {
        return Status::Failure;
    }

    let item = target.item;
    let grab_range_sq = agent.grab_range * agent.grab_range;
    if agent.position.distance_squared(item.position) >= grab_range_sq {
        // Not close enough yet: keep walking toward it.
        if ctx.board.set(Slot::Target, item.position).is_err() {
            return Status::Failure;
        }
        return Status::Running;
    }

    let Some(record) = ctx.claim.grab(&item) else {
        // The entity is gone. Give the sighting up so we don't stall on it.
        drop_pending(ctx, item.position);
        let mut stale = target;
        stale.taken = true;
        let _ = ctx.board.set(Slot::TargetItem, stale);
        tracing::warn!(position = ?item.position, "claim failed, dropped stale sighting");
        return Status::Failure;
    };

    // The claim removed the entity from the world either way; what remains
    // is deciding whether the record is worth a slot.
    store_item(ctx, record);
    drop_pending(ctx, item.position);

    let mut resolved = target;
    resolved.taken = true;
    let _ = ctx.board.set(Slot::TargetItem, resolved);

    tracing::info!(kind = %record.kind, "picked up an item");
    Status::Success
}

/// Applies the per-category acquisition policy. Returns whether the record
/// now occupies an inventory slot.
fn store_item(ctx: &mut AgentContext, record: ItemRecord) -> bool {
    if record.kind.is_disposable() {
        // Claimed off the ground and thrown away, forcing a respawn.
        tracing::info!(kind = %record.kind, "claimed a disposable item and discarded it");
        return false;
    }

    if try_insert(ctx, record) {
        return true;
    }

    // No slot free and nothing evictable: consume an existing kit to make
    // room, preferring the same family so nothing is wasted.
    let freed = match record.kind {
        ItemKind::Food => {
            use_any_food(ctx) == Status::Success
                || use_any_health_kit(ctx) == Status::Success
        }
        ItemKind::Health => use_any_health_kit(ctx) == Status::Success,
        _ => false,
    };
    if freed && try_insert(ctx, record) {
        return true;
    }

    tracing::info!(kind = %record.kind, "inventory full, discarded the excess kit");
    false
}

/// Inserts into the first empty slot, or evicts a junk/weapon slot.
fn try_insert(ctx: &mut AgentContext, record: ItemRecord) -> bool {
    for slot in 0..ctx.inventory.capacity() {
        match ctx.inventory.item_at(slot) {
            None => return ctx.inventory.add_item(slot, record),
            Some(existing) if existing.kind.is_disposable() => {
                tracing::info!(slot, "evicted a disposable item to make room");
                ctx.inventory.remove_item(slot);
                return ctx.inventory.add_item(slot, record);
            }
            Some(_) => {}
        }
    }
    false
}

/// Removes the sighting at the given position from the pending list.
fn drop_pending(ctx: &mut AgentContext, position: Vec2) {
    let Ok(mut items) = ctx.board.get::<Vec<SightedItem>>(Slot::PendingItems) else {
        return;
    };
    items.retain(|item| item.position != position);
    let _ = ctx.board.set(Slot::PendingItems, items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Inventory, ItemClaim, SlotInventory};
    use agent_core::AgentConfig;

    /// Claims succeed with the given record, or fail when `None`.
    struct ScriptedClaims(Option<ItemRecord>);

    impl ItemClaim for ScriptedClaims {
        fn grab(&mut self, _item: &SightedItem) -> Option<ItemRecord> {
            self.0
        }
    }

    fn context(inventory: SlotInventory, claims: ScriptedClaims) -> AgentContext {
        let mut ctx =
            AgentContext::new(AgentConfig::default(), Box::new(inventory), Box::new(claims));
        ctx.board
            .put(
                Slot::Agent,
                AgentSnapshot {
                    grab_range: 2.0,
                    ..Default::default()
                },
            )
            .unwrap();
        ctx.board.put(Slot::Target, Vec2::ZERO).unwrap();
        ctx.board
            .put(Slot::PendingItems, Vec::<SightedItem>::new())
            .unwrap();
        ctx.board.put(Slot::TargetItem, TargetItem::none()).unwrap();
        ctx
    }

    fn pursue(ctx: &mut AgentContext, item: SightedItem) {
        ctx.board
            .set(Slot::PendingItems, vec![item])
            .unwrap();
        ctx.board
            .set(Slot::TargetItem, TargetItem::pursuing(item))
            .unwrap();
    }

    #[test]
    fn far_item_keeps_the_pursuit_running() {
        let sighting = SightedItem::new(Vec2::new(50.0, 0.0), ItemKind::Health);
        let mut ctx = context(
            SlotInventory::new(2),
            ScriptedClaims(Some(ItemRecord::new(ItemKind::Health, 5))),
        );
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Running);
        // The locomotion target tracks the item while walking.
        assert_eq!(
            ctx.board.get::<Vec2>(Slot::Target).unwrap(),
            sighting.position
        );
    }

    #[test]
    fn claimed_kit_lands_in_an_empty_slot() {
        let sighting = SightedItem::new(Vec2::new(1.0, 0.0), ItemKind::Health);
        let record = ItemRecord::new(ItemKind::Health, 5);
        let mut ctx = context(SlotInventory::new(2), ScriptedClaims(Some(record)));
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Success);
        assert_eq!(ctx.inventory.item_at(0), Some(record));

        let target: TargetItem = ctx.board.get(Slot::TargetItem).unwrap();
        assert!(target.taken);
        let pending: Vec<SightedItem> = ctx.board.get(Slot::PendingItems).unwrap();
        assert!(pending.is_empty());
    }

    #[test]
    fn junk_is_claimed_but_never_stored() {
        let sighting = SightedItem::new(Vec2::new(1.0, 0.0), ItemKind::Junk);
        let mut ctx = context(
            SlotInventory::new(2),
            ScriptedClaims(Some(ItemRecord::new(ItemKind::Junk, 0))),
        );
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Success);
        assert_eq!(ctx.inventory.item_at(0), None);
        assert_eq!(ctx.inventory.item_at(1), None);
    }

    #[test]
    fn full_inventory_evicts_a_disposable_slot() {
        let mut inv = SlotInventory::new(2);
        inv.add_item(0, ItemRecord::new(ItemKind::Food, 4));
        inv.add_item(1, ItemRecord::new(ItemKind::Weapon, 0));

        let sighting = SightedItem::new(Vec2::new(1.0, 0.0), ItemKind::Health);
        let record = ItemRecord::new(ItemKind::Health, 5);
        let mut ctx = context(inv, ScriptedClaims(Some(record)));
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Success);
        assert_eq!(ctx.inventory.item_at(1), Some(record));
    }

    #[test]
    fn stale_claim_drops_the_sighting() {
        let sighting = SightedItem::new(Vec2::new(1.0, 0.0), ItemKind::Food);
        let mut ctx = context(SlotInventory::new(2), ScriptedClaims(None));
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Failure);

        let pending: Vec<SightedItem> = ctx.board.get(Slot::PendingItems).unwrap();
        assert!(pending.is_empty());
        let target: TargetItem = ctx.board.get(Slot::TargetItem).unwrap();
        assert!(target.taken);
    }

    #[test]
    fn full_inventory_of_keepers_consumes_a_kit_to_make_room() {
        let mut inv = SlotInventory::new(2);
        inv.add_item(0, ItemRecord::new(ItemKind::Food, 4));
        inv.add_item(1, ItemRecord::new(ItemKind::Food, 8));

        let sighting = SightedItem::new(Vec2::new(1.0, 0.0), ItemKind::Food);
        let record = ItemRecord::new(ItemKind::Food, 6);
        let mut ctx = context(inv, ScriptedClaims(Some(record)));
        pursue(&mut ctx, sighting);

        assert_eq!(pickup_item(&mut ctx), Status::Success);
        // The first food was eaten to free its slot for the new one.
        assert_eq!(ctx.inventory.item_at(0), Some(record));
        assert_eq!(ctx.inventory.item_at(1), Some(ItemRecord::new(ItemKind::Food, 8)));
    }
}
