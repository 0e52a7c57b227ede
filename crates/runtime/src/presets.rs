//! The shipped survival tree.

use behavior_tree::builder::{action, always_succeed, selector, sequence};

use crate::nodes;
use crate::subtrees::{
    self, AgentBehavior,
};

/// The complete survival agent, in priority order.
///
/// ```text
/// survivor()
///   └─ Sequence
///       ├─ AlwaysSucceed [stop sprinting]     ← re-asserted per tick by
///       │                                       whichever branch wants it
///       ├─ vitals_maintenance()
///       └─ Selector
///           ├─ Selector
///           │   ├─ Selector
///           │   │   ├─ item_pickup()
///           │   │   └─ structure_search()
///           │   └─ perimeter_sweep()
///           └─ wander fallback
/// ```
pub fn survivor() -> AgentBehavior {
    sequence(vec![
        // Assume it is safe to walk; any branch that disagrees sprints
        // again within the same tick.
        always_succeed(vec![action(nodes::stop_sprinting)]),
        subtrees::vitals_maintenance(),
        selector(vec![
            selector(vec![
                selector(vec![subtrees::item_pickup(), subtrees::structure_search()]),
                subtrees::perimeter_sweep(),
            ]),
            action(nodes::wander_around),
        ]),
    ])
}
