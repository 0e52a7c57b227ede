//! Locomotion-mode selection.
//!
//! Each leaf names the steering behavior the pipeline's actuator should
//! apply. The shared mode slot is written only when the desired mode
//! differs from the active one, so repeated ticks with an unchanged
//! decision are no-ops; the desired target is written independently by
//! whichever leaf chose it.

use behavior_tree::Status;

use agent_core::{Blackboard, Slot, SteeringMode, Vec2};

use crate::context::AgentContext;

/// Writes the desired mode if it differs from the active one.
///
/// Returns whether a change happened, or `None` when the slot is absent.
pub(crate) fn apply_mode(board: &mut Blackboard, desired: SteeringMode) -> Option<bool> {
    let active = board.get::<Option<SteeringMode>>(Slot::ActiveSteering).ok()?;
    if active == Some(desired) {
        return Some(false);
    }
    board.set(Slot::ActiveSteering, Some(desired)).ok()?;
    tracing::info!(mode = %desired, "steering mode changed");
    Some(true)
}

fn select_mode(ctx: &mut AgentContext, desired: SteeringMode) -> Status {
    match apply_mode(&mut ctx.board, desired) {
        Some(_) => Status::Success,
        None => Status::Failure,
    }
}

/// A pursuit mode is meaningless without a target to pursue.
fn select_pursuit_mode(ctx: &mut AgentContext, desired: SteeringMode) -> Status {
    if ctx.board.get::<Vec2>(Slot::Target).is_err() {
        return Status::Failure;
    }
    select_mode(ctx, desired)
}

/// Wander aimlessly around the current position.
pub fn wander_around(ctx: &mut AgentContext) -> Status {
    select_mode(ctx, SteeringMode::Wander)
}

/// Head straight for the shared target.
pub fn go_to_target(ctx: &mut AgentContext) -> Status {
    select_pursuit_mode(ctx, SteeringMode::Seek)
}

/// Head for the shared target while scanning the surroundings.
pub fn look_around_go_to_target(ctx: &mut AgentContext) -> Status {
    select_pursuit_mode(ctx, SteeringMode::LookAround)
}

/// Approach the shared target, slowing down on arrival.
pub fn arrive_at_target(ctx: &mut AgentContext) -> Status {
    select_pursuit_mode(ctx, SteeringMode::Arrive)
}
