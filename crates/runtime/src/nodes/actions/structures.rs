//! Structure selection, sweep, and exit.

use behavior_tree::Status;

use agent_core::{AgentSnapshot, Corner, Slot, StructureRecord, Vec2};

use crate::context::AgentContext;

/// Selects the newest unchecked structure as the search target.
///
/// Scanning newest-first biases the agent toward what it just discovered
/// instead of backtracking across the map.
pub fn set_target_structure(ctx: &mut AgentContext) -> Status {
    let Ok(known) = ctx.board.get::<Vec<StructureRecord>>(Slot::Structures) else {
        return Status::Failure;
    };

    let Some(next) = known.iter().rev().find(|record| !record.checked) else {
        return Status::Failure;
    };

    if ctx.board.set(Slot::CurrentStructure, *next).is_err() {
        return Status::Failure;
    }
    tracing::info!(center = ?next.footprint.center, "searching a new structure");
    Status::Success
}

/// Points the locomotion target at the current structure's center.
pub fn set_structure_as_target(ctx: &mut AgentContext) -> Status {
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return Status::Failure;
    };
    if current.checked {
        return Status::Failure;
    }

    if ctx
        .board
        .set(Slot::Target, current.footprint.center)
        .is_err()
    {
        return Status::Failure;
    }
    Status::Success
}

/// Walks to the structure's center; Running until within the center radius.
pub fn check_structure_center(ctx: &mut AgentContext) -> Status {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return Status::Failure;
    };

    let center = current.footprint.center;
    if agent.position.distance_squared(center) <= ctx.config.center_proximity_sq {
        tracing::debug!("structure center checked");
        return Status::Success;
    }

    if ctx.board.set(Slot::Target, center).is_err() {
        return Status::Failure;
    }
    Status::Running
}

/// Walks to one inset corner of the structure; Running until the corner is
/// within perception range.
///
/// Corner proximity scales with FOV range - standing close enough to *see*
/// the corner counts as having checked it.
pub fn check_structure_corner(ctx: &mut AgentContext, corner: Corner) -> Status {
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return Status::Failure;
    };

    let point = current.footprint.corner(corner, ctx.config.wall_clearance);
    if agent.position.distance_squared(point) <= agent.fov_range * agent.fov_range {
        tracing::debug!(%corner, "structure corner checked");
        return Status::Success;
    }

    if ctx.board.set(Slot::Target, point).is_err() {
        return Status::Failure;
    }
    Status::Running
}

/// Marks the current structure checked, in place and in the tracked list.
///
/// The list entry is matched by exact center equality - the same identity
/// rule the ingestion dedup uses.
pub fn mark_structure_checked(ctx: &mut AgentContext) -> Status {
    let Ok(mut current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return Status::Failure;
    };
    if current.checked {
        return Status::Failure;
    }

    let Ok(mut known) = ctx.board.get::<Vec<StructureRecord>>(Slot::Structures) else {
        return Status::Failure;
    };

    let Some(entry) = known
        .iter_mut()
        .find(|record| record.footprint.center == current.footprint.center)
    else {
        return Status::Failure;
    };

    entry.checked = true;
    current.checked = true;

    if ctx.board.set(Slot::CurrentStructure, current).is_err() {
        return Status::Failure;
    }
    if ctx.board.set(Slot::Structures, known).is_err() {
        return Status::Failure;
    }

    tracing::info!(center = ?current.footprint.center, "structure fully searched");
    Status::Success
}

/// Leaves the structure the way the agent came in.
///
/// The exit point is the recorded entry position pushed outward by the
/// exit margin, per axis, away from the structure's center. Success once
/// the agent reaches the exit point or is clear of the (slightly grown)
/// footprint by any other route.
pub fn leave_structure(ctx: &mut AgentContext) -> Status {
    let Ok(entry) = ctx.board.get::<Vec2>(Slot::StructureEntry) else {
        return Status::Failure;
    };
    let Ok(agent) = ctx.board.get::<AgentSnapshot>(Slot::Agent) else {
        return Status::Failure;
    };
    let Ok(current) = ctx.board.get::<StructureRecord>(Slot::CurrentStructure) else {
        return Status::Failure;
    };

    let center = current.footprint.center;
    let margin = ctx.config.exit_margin;
    let offset = Vec2::new(
        if entry.x > center.x { margin } else { -margin },
        if entry.y > center.y { margin } else { -margin },
    );
    let exit = entry + offset;

    let reached_exit = agent.position.distance_squared(exit) <= ctx.config.exit_proximity_sq;
    let clear_of_walls = !current
        .footprint
        .expanded(ctx.config.wall_clearance)
        .contains(agent.position);

    if reached_exit || clear_of_walls {
        tracing::info!("exited the structure");
        return Status::Success;
    }

    if ctx.board.set(Slot::Target, exit).is_err() {
        return Status::Failure;
    }
    tracing::debug!(exit = ?exit, "leaving the structure");
    Status::Running
}
