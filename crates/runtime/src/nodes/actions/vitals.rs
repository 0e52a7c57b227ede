//! Kit usage and sprint control.

use behavior_tree::Status;

use agent_core::{AgentSnapshot, ItemKind, Slot};

use crate::context::AgentContext;

/// Uses and removes the first kit of the given category.
fn use_any_kit(ctx: &mut AgentContext, kind: ItemKind) -> Status {
    for slot in 0..ctx.inventory.capacity() {
        let Some(item) = ctx.inventory.item_at(slot) else {
            continue;
        };
        if item.kind == kind {
            ctx.inventory.use_item(slot);
            ctx.inventory.remove_item(slot);
            tracing::info!(kind = %kind, slot, "used an emergency kit");
            return Status::Success;
        }
    }
    Status::Failure
}

/// Uses the first health kit found, regardless of fit.
pub fn use_any_health_kit(ctx: &mut AgentContext) -> Status {
    use_any_kit(ctx, ItemKind::Health)
}

/// Eats the first food found, regardless of fit.
pub fn use_any_food(ctx: &mut AgentContext) -> Status {
    use_any_kit(ctx, ItemKind::Food)
}

/// Uses the kit that gets the vital closest to its maximum without going
/// over.
///
/// The leftover deficit `maximum - current - restore` is minimized over all
/// non-overshooting kits; strict comparison, so the first slot scanned wins
/// ties. A kit that would overshoot is never chosen.
fn use_best_kit(
    ctx: &mut AgentContext,
    kind: ItemKind,
    attribute: &str,
    current: f32,
    maximum: f32,
) -> Status {
    let mut best: Option<(usize, f32)> = None;

    for slot in 0..ctx.inventory.capacity() {
        let Some(item) = ctx.inventory.item_at(slot) else {
            continue;
        };
        if item.kind != kind {
            continue;
        }
        let Some(amount) = ctx.inventory.metadata(&item, attribute) else {
            continue;
        };

        let leftover = maximum - current - amount as f32;
        if leftover < 0.0 {
            continue;
        }
        if best.is_none_or(|(_, best_leftover)| leftover < best_leftover) {
            best = Some((slot, leftover));
        }
    }

    match best {
        Some((slot, _)) => {
            ctx.inventory.use_item(slot);
            ctx.inventory.remove_item(slot);
            tracing::info!(kind = %kind, slot, "used the best-fitting kit");
            Status::Success
        }
        None => Status::Failure,
    }
}

/// Uses the health kit whose restore best fits the current deficit.
pub fn use_best_health_kit(ctx: &mut AgentContext) -> Status {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let maximum = ctx.config.max_health;
    use_best_kit(ctx, ItemKind::Health, "health", agent.health, maximum)
}

/// Eats the food whose restore best fits the current deficit.
pub fn use_best_food(ctx: &mut AgentContext) -> Status {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let maximum = ctx.config.max_energy;
    use_best_kit(ctx, ItemKind::Food, "energy", agent.energy, maximum)
}

/// Sets the run-mode flag on the vitals snapshot.
pub fn start_sprinting(ctx: &mut AgentContext) -> Status {
    set_run_mode(ctx, true)
}

/// Clears the run-mode flag on the vitals snapshot.
pub fn stop_sprinting(ctx: &mut AgentContext) -> Status {
    set_run_mode(ctx, false)
}

fn set_run_mode(ctx: &mut AgentContext, run_mode: bool) -> Status {
    let Ok(mut agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    agent.run_mode = run_mode;
    if ctx.board.set(Slot::Agent, agent).is_err() {
        return Status::Failure;
    }
    Status::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Inventory, ItemClaim, ItemRecord, SlotInventory};
    use agent_core::{AgentConfig, SightedItem};

    struct NoClaims;

    impl ItemClaim for NoClaims {
        fn grab(&mut self, _item: &SightedItem) -> Option<ItemRecord> {
            None
        }
    }

    fn context_with(inventory: SlotInventory, health: f32) -> AgentContext {
        let mut ctx = AgentContext::new(
            AgentConfig::default(),
            Box::new(inventory),
            Box::new(NoClaims),
        );
        ctx.board
            .put(
                Slot::Agent,
                AgentSnapshot {
                    health,
                    energy: 10.0,
                    ..Default::default()
                },
            )
            .unwrap();
        ctx
    }

    #[test]
    fn best_kit_never_overshoots_when_an_alternative_exists() {
        let mut inv = SlotInventory::new(3);
        inv.add_item(0, ItemRecord::new(ItemKind::Health, 9)); // would overshoot
        inv.add_item(1, ItemRecord::new(ItemKind::Health, 3));
        inv.add_item(2, ItemRecord::new(ItemKind::Health, 5)); // exact fit

        // Health 5/10: deficit 5. Slot 2 fits exactly, slot 0 overshoots.
        let mut ctx = context_with(inv, 5.0);
        assert_eq!(use_best_health_kit(&mut ctx), Status::Success);
        assert!(ctx.inventory.item_at(2).is_none());
        assert!(ctx.inventory.item_at(0).is_some());
        assert!(ctx.inventory.item_at(1).is_some());
    }

    #[test]
    fn best_kit_ties_go_to_the_first_slot_scanned() {
        let mut inv = SlotInventory::new(2);
        inv.add_item(0, ItemRecord::new(ItemKind::Health, 3));
        inv.add_item(1, ItemRecord::new(ItemKind::Health, 3));

        let mut ctx = context_with(inv, 5.0);
        assert_eq!(use_best_health_kit(&mut ctx), Status::Success);
        assert!(ctx.inventory.item_at(0).is_none());
        assert!(ctx.inventory.item_at(1).is_some());
    }

    #[test]
    fn best_kit_fails_when_every_kit_overshoots() {
        let mut inv = SlotInventory::new(1);
        inv.add_item(0, ItemRecord::new(ItemKind::Health, 9));

        // Health 9/10: even the smallest kit overshoots.
        let mut ctx = context_with(inv, 9.0);
        assert_eq!(use_best_health_kit(&mut ctx), Status::Failure);
        assert!(ctx.inventory.item_at(0).is_some());
    }

    #[test]
    fn any_kit_takes_the_first_of_its_category() {
        let mut inv = SlotInventory::new(3);
        inv.add_item(0, ItemRecord::new(ItemKind::Junk, 0));
        inv.add_item(1, ItemRecord::new(ItemKind::Food, 4));
        inv.add_item(2, ItemRecord::new(ItemKind::Food, 8));

        let mut ctx = context_with(inv, 5.0);
        assert_eq!(use_any_food(&mut ctx), Status::Success);
        assert!(ctx.inventory.item_at(1).is_none());
        assert!(ctx.inventory.item_at(2).is_some());

        assert_eq!(use_any_health_kit(&mut ctx), Status::Failure);
    }

    #[test]
    fn sprint_flags_round_trip_through_the_board() {
        let mut ctx = context_with(SlotInventory::new(1), 5.0);

        assert_eq!(start_sprinting(&mut ctx), Status::Success);
        let agent: AgentSnapshot = ctx.board.get(Slot::Agent).unwrap();
        assert!(agent.run_mode);

        assert_eq!(stop_sprinting(&mut ctx), Status::Success);
        let agent: AgentSnapshot = ctx.board.get(Slot::Agent).unwrap();
        assert!(!agent.run_mode);
    }
}
