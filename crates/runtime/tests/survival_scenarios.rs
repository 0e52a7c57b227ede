//! End-to-end scenarios driving the full runtime against fixture
//! collaborators.

use std::sync::{Arc, Mutex};

use agent_core::{
    AgentConfig, AgentSnapshot, Footprint, SightedEntity, SightedItem, Slot, SteeringMode,
    StructureRecord, TargetItem, Vec2, WorldBounds,
};
use runtime::{
    AgentRuntime, Inventory, ItemClaim, ItemRecord, NoopOverlay, Perception, SlotInventory,
};

// ============================================================================
// Fixtures
// ============================================================================

/// Perception fixture with test-controlled state.
#[derive(Clone)]
struct SimPerception {
    agent: AgentSnapshot,
    world: WorldBounds,
    structures: Vec<Footprint>,
    entities: Vec<SightedEntity>,
}

impl SimPerception {
    fn new() -> Self {
        Self {
            agent: AgentSnapshot {
                position: Vec2::ZERO,
                health: 10.0,
                energy: 20.0,
                grab_range: 2.0,
                fov_range: 15.0,
                max_speed: 10.0,
                ..Default::default()
            },
            world: WorldBounds::new(Vec2::ZERO, Vec2::new(200.0, 200.0)),
            structures: Vec::new(),
            entities: Vec::new(),
        }
    }
}

impl Perception for SimPerception {
    fn agent(&self) -> AgentSnapshot {
        self.agent
    }

    fn world(&self) -> WorldBounds {
        self.world
    }

    fn visible_entities(&self) -> Vec<SightedEntity> {
        self.entities.clone()
    }

    fn visible_structures(&self) -> Vec<Footprint> {
        self.structures.clone()
    }
}

/// Claim fixture that always answers with the same scripted result.
struct ScriptedClaims(Option<ItemRecord>);

impl ItemClaim for ScriptedClaims {
    fn grab(&mut self, _item: &SightedItem) -> Option<ItemRecord> {
        self.0
    }
}

/// Inventory shared between the runtime and the test for inspection.
#[derive(Clone)]
struct SharedInventory(Arc<Mutex<SlotInventory>>);

impl SharedInventory {
    fn new(inner: SlotInventory) -> Self {
        Self(Arc::new(Mutex::new(inner)))
    }

    fn consumed(&self) -> Vec<ItemRecord> {
        self.0.lock().unwrap().drain_consumed()
    }
}

impl Inventory for SharedInventory {
    fn capacity(&self) -> usize {
        self.0.lock().unwrap().capacity()
    }

    fn item_at(&self, slot: usize) -> Option<ItemRecord> {
        self.0.lock().unwrap().item_at(slot)
    }

    fn add_item(&mut self, slot: usize, item: ItemRecord) -> bool {
        self.0.lock().unwrap().add_item(slot, item)
    }

    fn remove_item(&mut self, slot: usize) -> bool {
        self.0.lock().unwrap().remove_item(slot)
    }

    fn use_item(&mut self, slot: usize) -> bool {
        self.0.lock().unwrap().use_item(slot)
    }
}

/// Route `RUST_LOG`-filtered tracing into the test output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn runtime_with(
    perception: &SimPerception,
    inventory: SharedInventory,
    claims: ScriptedClaims,
) -> AgentRuntime {
    init_tracing();
    AgentRuntime::new(
        AgentConfig::default(),
        Box::new(inventory),
        Box::new(claims),
        perception,
        42,
    )
    .expect("fresh board seeds cleanly")
}

fn no_claims() -> ScriptedClaims {
    ScriptedClaims(None)
}

// ============================================================================
// Vitals scenarios
// ============================================================================

#[test]
fn critical_health_uses_a_kit_and_empties_the_slot() {
    let mut perception = SimPerception::new();
    perception.agent.health = 1.0; // urgency (1 - 0.1)^2 = 0.81, critical

    let mut store = SlotInventory::new(3);
    store.add_item(1, ItemRecord::new(agent_core::ItemKind::Health, 5));
    let inventory = SharedInventory::new(store);

    let mut rt = runtime_with(&perception, inventory.clone(), no_claims());
    rt.update(0.1, &perception, &mut NoopOverlay);

    // The kit was used and its slot emptied.
    assert_eq!(inventory.item_at(1), None);
    let consumed = inventory.consumed();
    assert_eq!(consumed.len(), 1);
    assert_eq!(consumed[0].restore, 5);

    // Applying the engine-side effect never overshoots the cap.
    let restored = perception.agent.health + consumed[0].restore as f32;
    assert!(restored <= AgentConfig::DEFAULT_MAX_HEALTH);

    // The kit handled it; no sprint was triggered.
    let agent: AgentSnapshot = rt.driver().board().get(Slot::Agent).unwrap();
    assert!(!agent.run_mode);
}

#[test]
fn critical_health_without_a_kit_sprints() {
    let mut perception = SimPerception::new();
    perception.agent.health = 1.0;

    let inventory = SharedInventory::new(SlotInventory::new(3));
    let mut rt = runtime_with(&perception, inventory, no_claims());
    let output = rt.update(0.1, &perception, &mut NoopOverlay);

    assert!(output.run_mode);
}

#[test]
fn healthy_agent_tops_up_with_the_best_fitting_kit() {
    let mut perception = SimPerception::new();
    perception.agent.health = 6.0; // deficit 4, not critical

    let mut store = SlotInventory::new(3);
    store.add_item(0, ItemRecord::new(agent_core::ItemKind::Health, 9)); // overshoots
    store.add_item(1, ItemRecord::new(agent_core::ItemKind::Health, 4)); // exact
    let inventory = SharedInventory::new(store);

    let mut rt = runtime_with(&perception, inventory.clone(), no_claims());
    rt.update(0.1, &perception, &mut NoopOverlay);

    assert_eq!(inventory.item_at(1), None, "the exact-fit kit was used");
    assert!(inventory.item_at(0).is_some(), "the overshooting kit stayed");
}

// ============================================================================
// Ingestion scenarios
// ============================================================================

#[test]
fn structure_sightings_deduplicate_by_exact_center() {
    let mut perception = SimPerception::new();
    let footprint = Footprint::new(Vec2::new(40.0, 40.0), Vec2::new(10.0, 10.0));
    perception.structures = vec![footprint, footprint];

    let mut rt = runtime_with(
        &perception,
        SharedInventory::new(SlotInventory::new(1)),
        no_claims(),
    );
    rt.update(0.1, &perception, &mut NoopOverlay);
    // Same sighting again next tick.
    rt.update(0.1, &perception, &mut NoopOverlay);

    let tracked: Vec<StructureRecord> = rt.driver().board().get(Slot::Structures).unwrap();
    assert_eq!(tracked.len(), 1);

    // A different center is a different record.
    let other = Footprint::new(Vec2::new(-40.0, 40.0), Vec2::new(10.0, 10.0));
    let mut perception_two = perception.clone();
    perception_two.structures = vec![footprint, other];
    rt.update(0.1, &perception_two, &mut NoopOverlay);

    let tracked: Vec<StructureRecord> = rt.driver().board().get(Slot::Structures).unwrap();
    assert_eq!(tracked.len(), 2);
}

#[test]
fn enemy_list_is_replaced_every_tick() {
    let mut perception = SimPerception::new();
    perception.entities = vec![SightedEntity::Hostile(Vec2::new(5.0, 5.0))];

    let mut rt = runtime_with(
        &perception,
        SharedInventory::new(SlotInventory::new(1)),
        no_claims(),
    );
    rt.update(0.1, &perception, &mut NoopOverlay);

    let enemies: Vec<Vec2> = rt.driver().board().get(Slot::Enemies).unwrap();
    assert_eq!(enemies.len(), 1);

    // The hostile left view: the list empties instead of going stale.
    let mut quiet = perception.clone();
    quiet.entities = Vec::new();
    rt.update(0.1, &quiet, &mut NoopOverlay);

    let enemies: Vec<Vec2> = rt.driver().board().get(Slot::Enemies).unwrap();
    assert!(enemies.is_empty());
}

// ============================================================================
// Item pursuit scenario
// ============================================================================

#[test]
fn sighted_item_is_pursued_and_claimed() {
    let mut perception = SimPerception::new();
    let sighting = SightedItem::new(Vec2::new(30.0, 0.0), agent_core::ItemKind::Health);
    perception.entities = vec![SightedEntity::Item(sighting)];

    let inventory = SharedInventory::new(SlotInventory::new(2));
    let record = ItemRecord::new(agent_core::ItemKind::Health, 5);
    let mut rt = runtime_with(&perception, inventory.clone(), ScriptedClaims(Some(record)));

    // Tick 1: the sighting becomes the pursuit and the agent heads there.
    rt.update(0.1, &perception, &mut NoopOverlay);
    let target: TargetItem = rt.driver().board().get(Slot::TargetItem).unwrap();
    assert!(target.valid && !target.taken);
    assert_eq!(
        rt.driver().board().get::<Vec2>(Slot::Target).unwrap(),
        sighting.position
    );
    assert_eq!(
        rt.driver()
            .board()
            .get::<Option<SteeringMode>>(Slot::ActiveSteering)
            .unwrap(),
        Some(SteeringMode::Seek)
    );

    // Tick 2: the agent stands within grab range; the claim lands.
    perception.agent.position = Vec2::new(29.0, 0.0);
    perception.entities = Vec::new();
    rt.update(0.1, &perception, &mut NoopOverlay);

    assert_eq!(inventory.item_at(0), Some(record));
    let target: TargetItem = rt.driver().board().get(Slot::TargetItem).unwrap();
    assert!(target.taken);
}

// ============================================================================
// Perimeter sweep scenario
// ============================================================================

#[test]
fn world_sweep_runs_corner_to_corner_then_resets_structures() {
    let mut perception = SimPerception::new();
    // A searched structure, so the reset has something to forget.
    perception.structures = vec![Footprint::new(Vec2::new(40.0, 40.0), Vec2::new(5.0, 5.0))];

    let mut rt = runtime_with(
        &perception,
        SharedInventory::new(SlotInventory::new(1)),
        no_claims(),
    );

    // Mark the lone structure searched so the sweep branch takes over.
    rt.update(0.1, &perception, &mut NoopOverlay);
    {
        let board = rt.driver_mut().board_mut();
        let mut tracked: Vec<StructureRecord> = board.get(Slot::Structures).unwrap();
        tracked[0].checked = true;
        board.set(Slot::Structures, tracked).unwrap();

        let mut current: StructureRecord = board.get(Slot::CurrentStructure).unwrap();
        current.checked = true;
        board.set(Slot::CurrentStructure, current).unwrap();
    }
    perception.structures = Vec::new();

    // World 200x200 centered on the origin, margin 25: corners at +-75.
    let corners = [
        Vec2::new(-75.0, 75.0),  // top-left
        Vec2::new(75.0, 75.0),   // top-right
        Vec2::new(-75.0, -75.0), // bottom-left
        Vec2::new(75.0, -75.0),  // bottom-right
    ];

    // Standing away from the first corner: the sweep is in progress and the
    // locomotion target points at that corner.
    rt.update(0.1, &perception, &mut NoopOverlay);
    assert_eq!(
        rt.driver().board().get::<Vec2>(Slot::Target).unwrap(),
        corners[0]
    );

    // Visit the corners in sweep order; each tick completes one leg.
    for corner in corners {
        perception.agent.position = corner;
        rt.update(0.1, &perception, &mut NoopOverlay);
    }

    // All four corners plus the reset completed: the tracked set is empty
    // and the agent is back to scanning as it travels.
    let tracked: Vec<StructureRecord> = rt.driver().board().get(Slot::Structures).unwrap();
    assert!(tracked.is_empty());
    assert_eq!(
        rt.driver()
            .board()
            .get::<Option<SteeringMode>>(Slot::ActiveSteering)
            .unwrap(),
        Some(SteeringMode::LookAround)
    );
}

// ============================================================================
// Locomotion idempotence
// ============================================================================

#[test]
fn unchanged_decision_keeps_the_steering_mode_stable() {
    let mut perception = SimPerception::new();
    let sighting = SightedItem::new(Vec2::new(30.0, 0.0), agent_core::ItemKind::Food);
    perception.entities = vec![SightedEntity::Item(sighting)];

    let mut rt = runtime_with(
        &perception,
        SharedInventory::new(SlotInventory::new(1)),
        no_claims(),
    );

    rt.update(0.1, &perception, &mut NoopOverlay);
    let first: Option<SteeringMode> =
        rt.driver().board().get(Slot::ActiveSteering).unwrap();
    assert_eq!(first, Some(SteeringMode::Seek));

    // Same situation next tick: same decision, same mode, no churn.
    rt.update(0.1, &perception, &mut NoopOverlay);
    let second: Option<SteeringMode> =
        rt.driver().board().get(Slot::ActiveSteering).unwrap();
    assert_eq!(second, first);
}
