//! Agent vitals snapshot and vital-urgency math.

use super::Vec2;

/// Per-tick copy of the agent's externally-owned vitals.
///
/// Refreshed wholesale from the perception collaborator every tick; the
/// tree mutates only `run_mode` (and, indirectly, `position` by moving).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AgentSnapshot {
    pub position: Vec2,
    /// Facing angle in radians.
    pub orientation: f32,
    pub health: f32,
    pub energy: f32,
    /// Whether the agent is currently sprinting.
    pub run_mode: bool,
    /// Radius within which items can be claimed.
    pub grab_range: f32,
    /// Perception (field-of-view) radius.
    pub fov_range: f32,
    /// Top linear speed the locomotion layer may request.
    pub max_speed: f32,
}

/// Normalized urgency of a depleting vital.
///
/// `(1 - current/maximum)^exponent` - rises sharply only near depletion
/// rather than linearly, so the agent ignores scratches and panics when
/// close to empty.
pub fn depletion_urgency(current: f32, maximum: f32, exponent: i32) -> f32 {
    (1.0 - current / maximum).powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_is_monotonically_non_increasing_in_current() {
        let mut last = f32::INFINITY;
        for h in 0..=10 {
            let urgency = depletion_urgency(h as f32, 10.0, 2);
            assert!(urgency <= last, "urgency rose as health rose (h={h})");
            last = urgency;
        }
    }

    #[test]
    fn urgency_threshold_matches_critical_band() {
        // With max 10 and exponent 2, urgency crosses 0.65 between 1 and 2:
        // (1 - 0.1)^2 = 0.81, (1 - 0.2)^2 = 0.64.
        assert!(depletion_urgency(1.0, 10.0, 2) >= 0.65);
        assert!(depletion_urgency(2.0, 10.0, 2) < 0.65);
    }

    #[test]
    fn full_vital_has_zero_urgency() {
        assert_eq!(depletion_urgency(10.0, 10.0, 2), 0.0);
    }
}
