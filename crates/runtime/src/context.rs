//! The per-agent bundle every node tick receives.

use agent_core::{AgentConfig, Blackboard};

use crate::world::{Inventory, ItemClaim};

/// Context threaded through every behavior tick.
///
/// Owns the blackboard, the tuning configuration, and the boxed
/// collaborators item-handling leaves talk to mid-tick. Single owner of all
/// of them: dropping the context tears everything down.
///
/// Values that must cross ticks live only in the board; nodes never cache
/// state of their own between ticks.
pub struct AgentContext {
    pub board: Blackboard,
    pub config: AgentConfig,
    pub inventory: Box<dyn Inventory>,
    pub claim: Box<dyn ItemClaim>,
}

impl AgentContext {
    /// Creates a context with an empty board.
    ///
    /// The driver seeds the board's slots immediately afterward; leaves
    /// ticked against an unseeded board simply fail.
    pub fn new(
        config: AgentConfig,
        inventory: Box<dyn Inventory>,
        claim: Box<dyn ItemClaim>,
    ) -> Self {
        Self {
            board: Blackboard::new(),
            config,
            inventory,
            claim,
        }
    }
}
