//! Staged steering pipeline.
//!
//! One abstract "go here, acting like X" intent is turned into a safe
//! velocity through four staged roles:
//!
//! 1. **Decomposer** - break the long-range goal into intermediate waypoints
//! 2. **Constraint** - bias or veto waypoints near tracked hazards
//! 3. **Targeter** - hold the authoritative goal, settable every tick
//! 4. **Actuator** - apply the selected low-level behavior to the resolved
//!    waypoint
//!
//! The pipeline owns its stages; the behavior tree reaches it only through
//! the goal and mode setters, once per tick.

use crate::state::{AgentSnapshot, StructureRecord, Vec2};

use super::behaviors::{Arrive, LookAround, Seek, SteeringBehavior, SteeringMode, Wander};
use super::SteeringOutput;

/// Hazard data handed to the constraint stage each tick.
///
/// Borrowed views only - the stages own no agent state.
#[derive(Clone, Copy, Debug)]
pub struct HazardView<'a> {
    pub enemies: &'a [Vec2],
    pub structures: &'a [StructureRecord],
}

impl HazardView<'_> {
    pub const EMPTY: HazardView<'static> = HazardView {
        enemies: &[],
        structures: &[],
    };
}

/// Breaks a long-range goal into zero or more intermediate waypoints.
pub trait Decomposer: Send {
    fn decompose(&self, agent: &AgentSnapshot, goal: Vec2) -> Vec<Vec2>;
}

/// Path sub-goal lookup owned by the embedding engine.
pub trait NavMesh: Send {
    /// Waypoints from `from` to `to`, nearest first. Empty if no path data.
    fn path(&self, from: Vec2, to: Vec2) -> Vec<Vec2>;
}

/// Decomposer that delegates to an injected navmesh collaborator.
pub struct NavMeshDecomposer {
    mesh: Box<dyn NavMesh>,
}

impl NavMeshDecomposer {
    pub fn new(mesh: Box<dyn NavMesh>) -> Self {
        Self { mesh }
    }
}

impl Decomposer for NavMeshDecomposer {
    fn decompose(&self, agent: &AgentSnapshot, goal: Vec2) -> Vec<Vec2> {
        self.mesh.path(agent.position, goal)
    }
}

/// Filters or biases a candidate waypoint; `None` vetoes it entirely.
pub trait Constraint: Send {
    fn apply(
        &self,
        agent: &AgentSnapshot,
        hazards: &HazardView<'_>,
        goal: Vec2,
        waypoint: Vec2,
    ) -> Option<Vec2>;
}

/// Keeps waypoints out of hostile reach and out of structure walls.
///
/// - A waypoint inside a hostile's threat circle is pushed radially out to
///   the circle's edge.
/// - A waypoint inside a tracked structure's footprint is vetoed, unless the
///   goal itself lies inside that footprint (a deliberate entry).
pub struct AvoidHazardsConstraint {
    avoid_radius: f32,
}

impl AvoidHazardsConstraint {
    pub fn new(avoid_radius: f32) -> Self {
        Self { avoid_radius }
    }
}

impl Constraint for AvoidHazardsConstraint {
    fn apply(
        &self,
        _agent: &AgentSnapshot,
        hazards: &HazardView<'_>,
        goal: Vec2,
        waypoint: Vec2,
    ) -> Option<Vec2> {
        let mut adjusted = waypoint;

        for &enemy in hazards.enemies {
            let offset = adjusted - enemy;
            if offset.length_squared() < self.avoid_radius * self.avoid_radius {
                let away = offset.normalized_or_zero();
                // Degenerate overlap: pick an arbitrary push direction.
                let away = if away == Vec2::ZERO {
                    Vec2::new(1.0, 0.0)
                } else {
                    away
                };
                adjusted = enemy + away * self.avoid_radius;
            }
        }

        for record in hazards.structures {
            if record.footprint.contains(adjusted) && !record.footprint.contains(goal) {
                return None;
            }
        }

        Some(adjusted)
    }
}

/// Holds the authoritative goal coordinate.
///
/// The one stage with per-tick mutable state, so the tree can push a new
/// goal without reconstructing the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedGoalTargeter {
    goal: Vec2,
}

impl FixedGoalTargeter {
    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    pub fn set_goal(&mut self, goal: Vec2) {
        self.goal = goal;
    }
}

/// Applies the currently selected low-level behavior.
///
/// Owns one instance of each behavior; falls back to wandering when no mode
/// has been selected yet.
pub struct BasicActuator {
    seek: Seek,
    arrive: Arrive,
    wander: Wander,
    look_around: LookAround,
    mode: Option<SteeringMode>,
}

impl BasicActuator {
    pub fn new(arrive: Arrive, wander: Wander, look_around: LookAround) -> Self {
        Self {
            seek: Seek,
            arrive,
            wander,
            look_around,
            mode: None,
        }
    }

    pub fn mode(&self) -> Option<SteeringMode> {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Option<SteeringMode>) {
        self.mode = mode;
    }

    fn actuate(&mut self, dt: f32, agent: &AgentSnapshot, target: Vec2) -> SteeringOutput {
        match self.mode {
            Some(SteeringMode::Seek) => self.seek.steer(dt, agent, target),
            Some(SteeringMode::Arrive) => self.arrive.steer(dt, agent, target),
            Some(SteeringMode::LookAround) => self.look_around.steer(dt, agent, target),
            Some(SteeringMode::Wander) | None => self.wander.steer(dt, agent, target),
        }
    }
}

/// The composed per-tick steering computation.
pub struct SteeringPipeline {
    decomposers: Vec<Box<dyn Decomposer>>,
    constraints: Vec<Box<dyn Constraint>>,
    targeter: FixedGoalTargeter,
    actuator: BasicActuator,
}

impl SteeringPipeline {
    pub fn new(actuator: BasicActuator) -> Self {
        Self {
            decomposers: Vec::new(),
            constraints: Vec::new(),
            targeter: FixedGoalTargeter::default(),
            actuator,
        }
    }

    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.decomposers.push(decomposer);
        self
    }

    pub fn with_constraint(mut self, constraint: Box<dyn Constraint>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Pushes this tick's goal into the targeter.
    pub fn set_goal(&mut self, goal: Vec2) {
        self.targeter.set_goal(goal);
    }

    pub fn goal(&self) -> Vec2 {
        self.targeter.goal()
    }

    /// Selects the behavior the actuator applies this tick.
    pub fn set_mode(&mut self, mode: Option<SteeringMode>) {
        self.actuator.set_mode(mode);
    }

    pub fn mode(&self) -> Option<SteeringMode> {
        self.actuator.mode()
    }

    /// Computes the movement output for this tick.
    ///
    /// Decomposition happens first (the first decomposer returning any
    /// waypoints wins), then each candidate runs through the constraint
    /// chain; the first survivor becomes the actuation target. An empty or
    /// fully vetoed decomposition falls back to the raw goal.
    pub fn calculate(
        &mut self,
        dt: f32,
        agent: &AgentSnapshot,
        hazards: &HazardView<'_>,
    ) -> SteeringOutput {
        let goal = self.targeter.goal();

        let mut waypoints = Vec::new();
        for decomposer in &self.decomposers {
            waypoints = decomposer.decompose(agent, goal);
            if !waypoints.is_empty() {
                break;
            }
        }

        let mut resolved = None;
        for waypoint in waypoints {
            let mut candidate = Some(waypoint);
            for constraint in &self.constraints {
                candidate = candidate.and_then(|w| constraint.apply(agent, hazards, goal, w));
            }
            if let Some(waypoint) = candidate {
                resolved = Some(waypoint);
                break;
            }
        }

        // Bias (but never veto) the raw goal when nothing else survived.
        let target = resolved.unwrap_or_else(|| {
            self.constraints
                .iter()
                .fold(goal, |acc, constraint| {
                    constraint.apply(agent, hazards, goal, acc).unwrap_or(acc)
                })
        });

        let mut output = self.actuator.actuate(dt, agent, target);
        output.run_mode = agent.run_mode;
        output
    }
}
