//! Low-level steering behaviors.
//!
//! Each behavior turns "the agent, a target" into a velocity request. The
//! behavior tree selects which one is active by writing a [`SteeringMode`]
//! to the blackboard; the pipeline's actuator owns the instances and
//! dispatches to the selected one.

use crate::rng::Pcg32;
use crate::state::{AgentSnapshot, Vec2};

use super::SteeringOutput;

/// Names the low-level behavior the actuator should apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SteeringMode {
    /// Aimless local exploration.
    Wander,
    /// Full-speed pursuit of the target.
    Seek,
    /// Pursuit that slows down inside the arrival radius.
    Arrive,
    /// Pursuit while spinning to sweep the field of view.
    LookAround,
}

/// A movement strategy producing a velocity given a target.
pub trait SteeringBehavior: Send {
    fn steer(&mut self, dt: f32, agent: &AgentSnapshot, target: Vec2) -> SteeringOutput;
}

/// Heads straight for the target at top speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Seek;

impl SteeringBehavior for Seek {
    fn steer(&mut self, _dt: f32, agent: &AgentSnapshot, target: Vec2) -> SteeringOutput {
        let direction = (target - agent.position).normalized_or_zero();
        SteeringOutput::new(direction * agent.max_speed, 0.0)
    }
}

/// Heads for the target, slowing linearly inside the slow radius.
#[derive(Clone, Copy, Debug)]
pub struct Arrive {
    /// Distance at which the approach starts slowing down.
    pub slow_radius: f32,
    /// Distance at which the agent is considered there and stops.
    pub stop_radius: f32,
}

impl Arrive {
    pub fn new(slow_radius: f32) -> Self {
        Self {
            slow_radius,
            stop_radius: 0.1,
        }
    }
}

impl SteeringBehavior for Arrive {
    fn steer(&mut self, _dt: f32, agent: &AgentSnapshot, target: Vec2) -> SteeringOutput {
        let offset = target - agent.position;
        let distance = offset.length();

        if distance <= self.stop_radius {
            return SteeringOutput::new(Vec2::ZERO, 0.0);
        }

        let speed = if distance < self.slow_radius {
            agent.max_speed * (distance / self.slow_radius)
        } else {
            agent.max_speed
        };

        SteeringOutput::new(offset.normalized_or_zero() * speed, 0.0)
    }
}

/// Wanders on a jittered circle projected ahead of the agent.
///
/// The classic wander-circle construction: keep a heading on a circle in
/// front of the agent, jitter it a little each tick, and seek the point the
/// heading picks. Deterministic given the seed.
#[derive(Clone, Copy, Debug)]
pub struct Wander {
    pub radius: f32,
    pub distance: f32,
    /// Heading jitter per second, radians.
    pub jitter: f32,
    heading: f32,
    rng: Pcg32,
}

impl Wander {
    pub fn new(radius: f32, distance: f32, jitter: f32, seed: u64) -> Self {
        Self {
            radius,
            distance,
            jitter,
            heading: 0.0,
            rng: Pcg32::new(seed),
        }
    }
}

impl SteeringBehavior for Wander {
    fn steer(&mut self, dt: f32, agent: &AgentSnapshot, _target: Vec2) -> SteeringOutput {
        self.heading += self.rng.next_signed_unit() * self.jitter * dt;

        let circle_center = agent.position + Vec2::from_angle(agent.orientation) * self.distance;
        let wander_point = circle_center + Vec2::from_angle(self.heading) * self.radius;

        let direction = (wander_point - agent.position).normalized_or_zero();
        SteeringOutput::new(direction * agent.max_speed, 0.0)
    }
}

/// Seeks the target while spinning to sweep the field of view.
///
/// Used while searching inside a structure: the agent keeps moving between
/// search points but rotates so the FOV cone passes over everything.
#[derive(Clone, Copy, Debug)]
pub struct LookAround {
    /// Constant scan rate, radians per second.
    pub spin: f32,
}

impl LookAround {
    pub fn new(spin: f32) -> Self {
        Self { spin }
    }
}

impl SteeringBehavior for LookAround {
    fn steer(&mut self, _dt: f32, agent: &AgentSnapshot, target: Vec2) -> SteeringOutput {
        let direction = (target - agent.position).normalized_or_zero();
        SteeringOutput::new(direction * agent.max_speed, self.spin)
    }
}
