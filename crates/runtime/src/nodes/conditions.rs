//! Condition predicates for the survival tree.
//!
//! Conditions read the blackboard and answer yes/no. A missing or
//! mismatched slot answers "no" - absent data is never an error here, the
//! selector above simply falls through to the next branch.

use agent_core::{
    AgentSnapshot, Slot, StructureRecord, TargetItem, depletion_urgency,
};

use crate::context::AgentContext;

/// Health urgency has crossed the critical threshold.
pub fn is_health_critical(ctx: &mut AgentContext) -> bool {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };

    let urgency = depletion_urgency(
        agent.health,
        ctx.config.max_health,
        ctx.config.urgency_exponent,
    );
    if urgency >= ctx.config.health_urgency_threshold {
        tracing::debug!(health = agent.health, urgency, "health critical");
        true
    } else {
        false
    }
}

/// Energy urgency has crossed the critical threshold.
pub fn is_energy_critical(ctx: &mut AgentContext) -> bool {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };

    let urgency = depletion_urgency(
        agent.energy,
        ctx.config.max_energy,
        ctx.config.urgency_exponent,
    );
    urgency >= ctx.config.energy_urgency_threshold
}

/// There is room to top health up without wasting a kit entirely.
pub fn not_max_health(ctx: &mut AgentContext) -> bool {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };
    agent.health < ctx.config.max_health
}

/// There is room to top energy up.
pub fn not_max_energy(ctx: &mut AgentContext) -> bool {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };
    agent.energy < ctx.config.max_energy
}

/// An item pursuit is underway: chosen, still valid, not yet resolved.
pub fn has_target_item(ctx: &mut AgentContext) -> bool {
    let Ok(target) = ctx.board.get::<TargetItem>(Slot::TargetItem) else {
        return false;
    };
    target.valid && !target.taken
}

/// A structure has been selected and still needs searching.
pub fn has_target_structure(ctx: &mut AgentContext) -> bool {
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return false;
    };
    !current.checked
}

/// The agent stands inside the structure it intends to search.
///
/// While still outside, the entry-point slot is refreshed with the agent's
/// position each tick, so the eventual exit retraces the way in.
pub fn inside_target_structure(ctx: &mut AgentContext) -> bool {
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return false;
    };
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };

    if current.checked {
        return false;
    }

    if current.footprint.contains(agent.position) {
        return true;
    }

    // Not in yet: remember where we are approaching from.
    let _ = ctx.board.set(Slot::StructureEntry, agent.position);
    false
}

/// The whole footprint can be swept corner to corner within perception
/// range.
///
/// Gate for the corner sweep; currently left out of the composed tree, the
/// sweep runs unconditionally.
pub fn structure_sweepable(ctx: &mut AgentContext) -> bool {
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return false;
    };
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return false;
    };

    if current.footprint.half_extents.x >= agent.fov_range {
        return false;
    }
    if current.footprint.half_extents.y >= agent.fov_range {
        return false;
    }

    tracing::debug!("performing full structure sweep");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ItemClaim, ItemRecord, SlotInventory};
    use agent_core::{AgentConfig, Footprint, SightedItem, Vec2};

    struct NoClaims;

    impl ItemClaim for NoClaims {
        fn grab(&mut self, _item: &SightedItem) -> Option<ItemRecord> {
            None
        }
    }

    fn context() -> AgentContext {
        AgentContext::new(
            AgentConfig::default(),
            Box::new(SlotInventory::new(1)),
            Box::new(NoClaims),
        )
    }

    fn seed_agent(ctx: &mut AgentContext, agent: AgentSnapshot) {
        ctx.board.put(Slot::Agent, agent).unwrap();
    }

    #[test]
    fn critical_conditions_fire_only_near_depletion() {
        let mut ctx = context();
        seed_agent(
            &mut ctx,
            AgentSnapshot {
                health: 1.0,
                energy: 3.0,
                ..Default::default()
            },
        );
        assert!(is_health_critical(&mut ctx));
        assert!(is_energy_critical(&mut ctx));

        // One notch healthier sits just under both thresholds.
        ctx.board
            .set(
                Slot::Agent,
                AgentSnapshot {
                    health: 2.0,
                    energy: 4.0,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!is_health_critical(&mut ctx));
        assert!(!is_energy_critical(&mut ctx));
    }

    #[test]
    fn missing_agent_slot_answers_no() {
        let mut ctx = context();
        assert!(!is_health_critical(&mut ctx));
        assert!(!not_max_health(&mut ctx));
        assert!(!has_target_item(&mut ctx));
        assert!(!inside_target_structure(&mut ctx));
    }

    #[test]
    fn target_item_counts_only_while_unresolved() {
        let mut ctx = context();
        let sighting = SightedItem::default();

        ctx.board
            .put(Slot::TargetItem, TargetItem::pursuing(sighting))
            .unwrap();
        assert!(has_target_item(&mut ctx));

        let mut resolved = TargetItem::pursuing(sighting);
        resolved.taken = true;
        ctx.board.set(Slot::TargetItem, resolved).unwrap();
        assert!(!has_target_item(&mut ctx));
    }

    #[test]
    fn approaching_a_structure_records_the_entry_point() {
        let mut ctx = context();
        seed_agent(
            &mut ctx,
            AgentSnapshot {
                position: Vec2::new(20.0, 20.0),
                ..Default::default()
            },
        );
        ctx.board
            .put(
                Slot::CurrentStructure,
                StructureRecord::new(Footprint::new(Vec2::new(40.0, 40.0), Vec2::new(8.0, 8.0))),
            )
            .unwrap();
        ctx.board.put(Slot::StructureEntry, Vec2::ZERO).unwrap();

        // Outside: not in yet, but the approach position is remembered.
        assert!(!inside_target_structure(&mut ctx));
        assert_eq!(
            ctx.board.get::<Vec2>(Slot::StructureEntry).unwrap(),
            Vec2::new(20.0, 20.0)
        );

        // Inside: the recorded entry stays as it was.
        ctx.board
            .set(
                Slot::Agent,
                AgentSnapshot {
                    position: Vec2::new(40.0, 40.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(inside_target_structure(&mut ctx));
        assert_eq!(
            ctx.board.get::<Vec2>(Slot::StructureEntry).unwrap(),
            Vec2::new(20.0, 20.0)
        );
    }

    #[test]
    fn sweepable_requires_the_whole_footprint_within_fov() {
        let mut ctx = context();
        seed_agent(
            &mut ctx,
            AgentSnapshot {
                fov_range: 15.0,
                ..Default::default()
            },
        );
        ctx.board
            .put(
                Slot::CurrentStructure,
                StructureRecord::new(Footprint::new(Vec2::ZERO, Vec2::new(8.0, 8.0))),
            )
            .unwrap();
        assert!(structure_sweepable(&mut ctx));

        // Too wide on one axis: the sweep would miss whatever hides there.
        ctx.board
            .set(
                Slot::CurrentStructure,
                StructureRecord::new(Footprint::new(Vec2::ZERO, Vec2::new(20.0, 8.0))),
            )
            .unwrap();
        assert!(!structure_sweepable(&mut ctx));
    }
}
