use crate::state::Vec2;

/// Agent tuning constants and runtime-tunable parameters.
///
/// Defaults mirror the balance the behavior was authored against; embedders
/// can load overrides from a TOML file through the runtime crate's loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Vitals ceiling used by urgency math and kit selection.
    pub max_health: f32,
    pub max_energy: f32,

    /// Exponent of the depletion-urgency curve.
    pub urgency_exponent: i32,
    /// Urgency at which health counts as critical.
    pub health_urgency_threshold: f32,
    /// Urgency at which energy counts as critical.
    pub energy_urgency_threshold: f32,

    /// Inset from a structure's walls when visiting its corners.
    pub wall_clearance: Vec2,
    /// Inset from the world edge when visiting bounding corners.
    pub world_edge_margin: Vec2,
    /// Outward offset applied to the entry point when exiting a structure.
    pub exit_margin: f32,

    /// Squared proximity for "reached the structure center".
    pub center_proximity_sq: f32,
    /// Squared proximity for "made it out of the structure".
    pub exit_proximity_sq: f32,
    /// Squared proximity for "reached a world corner".
    pub world_corner_proximity_sq: f32,

    /// Wander-circle radius of the fallback steering behavior.
    pub wander_radius: f32,
    /// How far ahead of the agent the wander circle sits.
    pub wander_distance: f32,
    /// Per-second jitter applied to the wander heading, radians.
    pub wander_jitter: f32,
    /// Angular rate of the look-around scan, radians per second.
    pub look_around_spin: f32,
    /// Waypoints closer than this to a hostile get pushed out of its circle.
    pub enemy_avoid_radius: f32,
}

impl AgentConfig {
    pub const DEFAULT_MAX_HEALTH: f32 = 10.0;
    pub const DEFAULT_MAX_ENERGY: f32 = 20.0;
    pub const DEFAULT_URGENCY_EXPONENT: i32 = 2;
    pub const DEFAULT_HEALTH_URGENCY_THRESHOLD: f32 = 0.65;
    pub const DEFAULT_ENERGY_URGENCY_THRESHOLD: f32 = 0.70;
    pub const DEFAULT_WALL_CLEARANCE: Vec2 = Vec2::new(5.0, 5.0);
    pub const DEFAULT_WORLD_EDGE_MARGIN: Vec2 = Vec2::new(25.0, 25.0);
    pub const DEFAULT_EXIT_MARGIN: f32 = 15.0;
    pub const DEFAULT_CENTER_PROXIMITY_SQ: f32 = 0.1;
    pub const DEFAULT_EXIT_PROXIMITY_SQ: f32 = 5.0;
    pub const DEFAULT_WORLD_CORNER_PROXIMITY_SQ: f32 = 10.0;
    pub const DEFAULT_WANDER_RADIUS: f32 = 5.0;
    pub const DEFAULT_WANDER_DISTANCE: f32 = 6.0;
    pub const DEFAULT_WANDER_JITTER: f32 = 4.0;
    pub const DEFAULT_LOOK_AROUND_SPIN: f32 = 2.5;
    pub const DEFAULT_ENEMY_AVOID_RADIUS: f32 = 12.0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            urgency_exponent: Self::DEFAULT_URGENCY_EXPONENT,
            health_urgency_threshold: Self::DEFAULT_HEALTH_URGENCY_THRESHOLD,
            energy_urgency_threshold: Self::DEFAULT_ENERGY_URGENCY_THRESHOLD,
            wall_clearance: Self::DEFAULT_WALL_CLEARANCE,
            world_edge_margin: Self::DEFAULT_WORLD_EDGE_MARGIN,
            exit_margin: Self::DEFAULT_EXIT_MARGIN,
            center_proximity_sq: Self::DEFAULT_CENTER_PROXIMITY_SQ,
            exit_proximity_sq: Self::DEFAULT_EXIT_PROXIMITY_SQ,
            world_corner_proximity_sq: Self::DEFAULT_WORLD_CORNER_PROXIMITY_SQ,
            wander_radius: Self::DEFAULT_WANDER_RADIUS,
            wander_distance: Self::DEFAULT_WANDER_DISTANCE,
            wander_jitter: Self::DEFAULT_WANDER_JITTER,
            look_around_spin: Self::DEFAULT_LOOK_AROUND_SPIN,
            enemy_avoid_radius: Self::DEFAULT_ENEMY_AVOID_RADIUS,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
