//! Behavior tree driver: owns the root node and the seeded blackboard.

use behavior_tree::{Behavior, Status};

use agent_core::{
    AgentConfig, AgentSnapshot, Blackboard, BlackboardError, Footprint, SightedItem, Slot,
    SteeringMode, StructureRecord, TargetItem, Vec2, WorldBounds,
};

use crate::context::AgentContext;
use crate::presets;
use crate::subtrees::AgentBehavior;
use crate::world::{Inventory, ItemClaim};

/// Owns the root node and the store; ticks the root once per step.
///
/// Construction seeds every blackboard slot exactly once and fails fast on
/// a duplicate - a malformed seeding is a programming error, not a runtime
/// condition.
pub struct BehaviorTreeDriver {
    root: AgentBehavior,
    ctx: AgentContext,
}

impl BehaviorTreeDriver {
    /// Creates a driver around the shipped survival tree.
    pub fn new(
        config: AgentConfig,
        inventory: Box<dyn Inventory>,
        claim: Box<dyn ItemClaim>,
        world: WorldBounds,
    ) -> Result<Self, BlackboardError> {
        Self::with_root(presets::survivor(), config, inventory, claim, world)
    }

    /// Creates a driver around a custom root (tests, alternative presets).
    pub fn with_root(
        root: AgentBehavior,
        config: AgentConfig,
        inventory: Box<dyn Inventory>,
        claim: Box<dyn ItemClaim>,
        world: WorldBounds,
    ) -> Result<Self, BlackboardError> {
        let mut ctx = AgentContext::new(config, inventory, claim);
        seed_board(&mut ctx.board, world)?;
        Ok(Self { root, ctx })
    }

    /// Ticks the root once.
    pub fn tick(&mut self) -> Status {
        self.root.tick(&mut self.ctx)
    }

    pub fn context(&self) -> &AgentContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AgentContext {
        &mut self.ctx
    }

    pub fn board(&self) -> &Blackboard {
        &self.ctx.board
    }

    pub fn board_mut(&mut self) -> &mut Blackboard {
        &mut self.ctx.board
    }
}

/// Creates every slot the tree and pipeline share, once.
fn seed_board(board: &mut Blackboard, world: WorldBounds) -> Result<(), BlackboardError> {
    board.put(Slot::Agent, AgentSnapshot::default())?;
    board.put(Slot::World, world)?;
    board.put(Slot::Target, Vec2::ZERO)?;
    board.put(Slot::ActiveSteering, None::<SteeringMode>)?;
    board.put(Slot::Structures, Vec::<StructureRecord>::new())?;
    // Sentinel: "the previous search is closed", so nothing is resumed.
    board.put(
        Slot::CurrentStructure,
        StructureRecord {
            footprint: Footprint::default(),
            checked: true,
        },
    )?;
    board.put(Slot::StructureEntry, Vec2::ZERO)?;
    board.put(Slot::PendingItems, Vec::<SightedItem>::new())?;
    board.put(Slot::TargetItem, TargetItem::none())?;
    board.put(Slot::Enemies, Vec::<Vec2>::new())?;
    Ok(())
}
