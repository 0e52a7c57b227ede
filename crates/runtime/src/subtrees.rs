//! Reusable subtrees composed from the behavior catalog.
//!
//! Each function returns one self-contained branch of the survival tree;
//! [`crate::presets`] stacks them in priority order.

use behavior_tree::builder::{
    action, always_succeed, condition, do_all, inverter, partial_sequence, running_is_good,
    selector, sequence,
};
use behavior_tree::Behavior;

use agent_core::Corner;

use crate::context::AgentContext;
use crate::nodes;

/// Type alias for boxed nodes over the agent context.
pub type AgentBehavior = Box<dyn Behavior<AgentContext>>;

/// Emergency response to critical vitals.
///
/// Both checks run every tick (do-all, no short-circuit). Per vital: if
/// critical, try an emergency kit - the inverter makes "kit used" end the
/// branch, while having no kit falls through to sprinting away from
/// whatever caused the emergency.
pub fn emergency_vitals() -> AgentBehavior {
    do_all(vec![
        sequence(vec![
            condition(nodes::is_health_critical),
            inverter(action(nodes::use_any_health_kit)),
            action(nodes::start_sprinting),
        ]),
        sequence(vec![
            condition(nodes::is_energy_critical),
            inverter(action(nodes::use_any_food)),
            action(nodes::start_sprinting),
        ]),
    ])
}

/// Opportunistic top-up outside emergencies.
///
/// Uses whichever stored kit fits the current deficit without waste; both
/// vitals are attempted and neither can block the other (always-succeed).
pub fn top_up_vitals() -> AgentBehavior {
    sequence(vec![
        always_succeed(vec![
            condition(nodes::not_max_health),
            action(nodes::use_best_health_kit),
        ]),
        always_succeed(vec![
            condition(nodes::not_max_energy),
            action(nodes::use_best_food),
        ]),
    ])
}

/// Vitals upkeep: emergencies first, then waste-free top-ups.
pub fn vitals_maintenance() -> AgentBehavior {
    selector(vec![emergency_vitals(), top_up_vitals()])
}

/// Item pursuit: finish the pursuit in flight, else start a new one.
///
/// The partial sequence keeps [`nodes::pickup_item`] polled across ticks
/// without re-running the has-target check once the walk has begun.
pub fn item_pickup() -> AgentBehavior {
    sequence(vec![
        selector(vec![
            partial_sequence(vec![
                condition(nodes::has_target_item),
                action(nodes::pickup_item),
            ]),
            action(nodes::spot_new_item),
        ]),
        action(nodes::set_item_as_target),
        action(nodes::go_to_target),
    ])
}

/// The center-then-corners walk through the current structure.
///
/// Corner order: top-left, top-right, bottom-right, bottom-left - one lap
/// along the walls.
fn structure_sweep() -> AgentBehavior {
    partial_sequence(vec![
        action(nodes::check_structure_center),
        action(|ctx: &mut AgentContext| {
            nodes::check_structure_corner(ctx, Corner::TopLeft)
        }),
        action(|ctx: &mut AgentContext| {
            nodes::check_structure_corner(ctx, Corner::TopRight)
        }),
        action(|ctx: &mut AgentContext| {
            nodes::check_structure_corner(ctx, Corner::BottomRight)
        }),
        action(|ctx: &mut AgentContext| {
            nodes::check_structure_corner(ctx, Corner::BottomLeft)
        }),
    ])
}

/// Structure search: pick one, enter it, sweep it, leave, mark it done.
pub fn structure_search() -> AgentBehavior {
    selector(vec![
        sequence(vec![
            condition(nodes::has_target_structure),
            selector(vec![
                // Already inside: sweep while scanning at a sprint, then
                // retrace the way out and close the record.
                partial_sequence(vec![
                    condition(nodes::inside_target_structure),
                    sequence(vec![
                        action(nodes::look_around_go_to_target),
                        action(nodes::start_sprinting),
                        structure_sweep(),
                    ]),
                    action(nodes::leave_structure),
                    action(nodes::mark_structure_checked),
                ]),
                // Not inside yet: the entrance is the target.
                action(nodes::set_structure_as_target),
            ]),
            action(nodes::go_to_target),
        ]),
        // No structure under search: select the next unchecked one.
        action(nodes::set_target_structure),
    ])
}

/// World-perimeter sweep with a trailing tracked-structure reset.
///
/// Running-is-good keeps the owning selector treating the whole sweep as
/// non-terminal until all four corners and the reset complete.
pub fn perimeter_sweep() -> AgentBehavior {
    sequence(vec![
        running_is_good(vec![partial_sequence(vec![
            action(|ctx: &mut AgentContext| {
                nodes::check_world_corner(ctx, Corner::TopLeft)
            }),
            action(|ctx: &mut AgentContext| {
                nodes::check_world_corner(ctx, Corner::TopRight)
            }),
            action(|ctx: &mut AgentContext| {
                nodes::check_world_corner(ctx, Corner::BottomLeft)
            }),
            action(|ctx: &mut AgentContext| {
                nodes::check_world_corner(ctx, Corner::BottomRight)
            }),
            action(nodes::reset_structures),
        ])]),
        action(nodes::look_around_go_to_target),
    ])
}
