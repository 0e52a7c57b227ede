//! World-perimeter sweep.
//!
//! When nothing is left to pursue locally, the agent walks the world's four
//! bounding corners to refill its tracked sets, then forgets every searched
//! structure so old ground becomes worth revisiting.

use behavior_tree::Status;

use agent_core::{AgentSnapshot, Corner, Slot, StructureRecord, WorldBounds};

use crate::context::AgentContext;

/// Walks to one inset bounding corner of the world; Running until close.
pub fn check_world_corner(ctx: &mut AgentContext, corner: Corner) -> Status {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let Ok(world) = ctx.board.get::<WorldBounds>(Slot::World) else {
        return Status::Failure;
    };

    let point = world.corner(corner, ctx.config.world_edge_margin);
    if agent.position.distance_squared(point) <= ctx.config.world_corner_proximity_sq {
        tracing::info!(%corner, "world corner checked");
        return Status::Success;
    }

    if ctx.board.set(Slot::Target, point).is_err() {
        return Status::Failure;
    }
    Status::Running
}

/// Forgets every tracked structure so the next pass searches them again.
pub fn reset_structures(ctx: &mut AgentContext) -> Status {
    if ctx
        .board
        .set(Slot::Structures, Vec::<StructureRecord>::new())
        .is_err()
    {
        return Status::Failure;
    }
    tracing::info!("cleared tracked structures for a fresh sweep");
    Status::Success
}
