//! Update orchestrator: snapshot ingestion, tree tick, steering, overlay.
//!
//! One call per simulation step drives the whole chain to completion, in
//! order: world snapshots land in the board, the tree decides, the pipeline
//! turns the decision into motion. Writes from earlier stages are visible
//! to later ones within the same tick; nothing is deferred.

use agent_core::{
    AgentConfig, AgentSnapshot, Arrive, AvoidHazardsConstraint, BasicActuator, BlackboardError,
    Decomposer, Footprint, HazardView, LookAround, SightedEntity, SightedItem, Slot, SteeringMode,
    SteeringOutput, SteeringPipeline, StructureRecord, Vec2, Wander,
};

use crate::driver::BehaviorTreeDriver;
use crate::world::{DebugOverlay, Inventory, ItemClaim, Perception};

/// Owns the driver and the pipeline and sequences one agent's ticks.
pub struct AgentRuntime {
    driver: BehaviorTreeDriver,
    pipeline: SteeringPipeline,
}

impl AgentRuntime {
    /// Builds the runtime against the collaborators it will consume.
    ///
    /// The perception collaborator is queried once here for the static
    /// world bounds and the grab range the arrive radius is tuned to;
    /// per-tick data flows through [`Self::update`].
    pub fn new(
        config: AgentConfig,
        inventory: Box<dyn Inventory>,
        claim: Box<dyn ItemClaim>,
        perception: &dyn Perception,
        seed: u64,
    ) -> Result<Self, BlackboardError> {
        let agent = perception.agent();
        let world = perception.world();

        let actuator = BasicActuator::new(
            Arrive::new(agent.grab_range),
            Wander::new(
                config.wander_radius,
                config.wander_distance,
                config.wander_jitter,
                seed,
            ),
            LookAround::new(config.look_around_spin),
        );
        let pipeline = SteeringPipeline::new(actuator).with_constraint(Box::new(
            AvoidHazardsConstraint::new(config.enemy_avoid_radius),
        ));

        let driver = BehaviorTreeDriver::new(config, inventory, claim, world)?;

        Ok(Self { driver, pipeline })
    }

    /// Adds a waypoint decomposer (e.g. a navmesh adapter) to the pipeline.
    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.pipeline = self.pipeline.with_decomposer(decomposer);
        self
    }

    /// Runs one simulation step and returns the movement command.
    pub fn update(
        &mut self,
        dt: f32,
        perception: &dyn Perception,
        overlay: &mut dyn DebugOverlay,
    ) -> SteeringOutput {
        // 1. Ingest world snapshots into the board.
        let agent = perception.agent();
        self.ingest_structures(perception.visible_structures());
        self.ingest_entities(perception.visible_entities());
        self.driver
            .board_mut()
            .set(Slot::Agent, agent)
            .expect("agent slot seeded at construction");

        // 2. Tick the tree; it reads and writes the board.
        self.driver.tick();

        // 3. Feed the tree's decision into the pipeline.
        let board = self.driver.board();
        let agent: AgentSnapshot = board
            .get(Slot::Agent)
            .expect("agent slot seeded at construction");
        let target: Vec2 = board
            .get(Slot::Target)
            .expect("target slot seeded at construction");
        let mode: Option<SteeringMode> = board
            .get(Slot::ActiveSteering)
            .expect("steering slot seeded at construction");
        let enemies: Vec<Vec2> = board
            .get(Slot::Enemies)
            .expect("enemies slot seeded at construction");
        let structures: Vec<StructureRecord> = board
            .get(Slot::Structures)
            .expect("structures slot seeded at construction");

        self.pipeline.set_goal(target);
        self.pipeline.set_mode(mode);

        let hazards = HazardView {
            enemies: &enemies,
            structures: &structures,
        };
        let output = self.pipeline.calculate(dt, &agent, &hazards);

        // 4. Observational overlay; never read back.
        for record in &structures {
            overlay.structure_marker(&record.footprint, record.checked);
        }
        overlay.target_marker(target);

        output
    }

    pub fn driver(&self) -> &BehaviorTreeDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut BehaviorTreeDriver {
        &mut self.driver
    }

    /// Folds sighted footprints into the tracked set.
    ///
    /// Identity is exact center equality: the engine reports the same
    /// center for the same structure, so no spatial tolerance is applied.
    fn ingest_structures(&mut self, sightings: Vec<Footprint>) {
        if sightings.is_empty() {
            return;
        }

        let board = self.driver.board_mut();
        let Ok(mut known) = board.get::<Vec<StructureRecord>>(Slot::Structures) else {
            return;
        };

        for footprint in sightings {
            let duplicate = known
                .iter()
                .any(|record| record.footprint.center == footprint.center);
            if !duplicate {
                tracing::info!(center = ?footprint.center, "tracking a new structure");
                known.push(StructureRecord::new(footprint));
            }
        }

        let _ = board.set(Slot::Structures, known);
    }

    /// Merges item sightings into the pending list and replaces the enemy
    /// list wholesale - hostiles are only reported while visible.
    fn ingest_entities(&mut self, entities: Vec<SightedEntity>) {
        let board = self.driver.board_mut();
        let Ok(mut items) = board.get::<Vec<SightedItem>>(Slot::PendingItems) else {
            return;
        };

        let mut enemies = Vec::new();
        for entity in entities {
            match entity {
                SightedEntity::Item(item) => {
                    let duplicate = items.iter().any(|known| known.position == item.position);
                    if !duplicate {
                        tracing::info!(position = ?item.position, kind = %item.kind, "sighted a new item");
                        items.push(item);
                    }
                }
                SightedEntity::Hostile(position) => enemies.push(position),
            }
        }

        let _ = board.set(Slot::PendingItems, items);
        let _ = board.set(Slot::Enemies, enemies);
    }
}
