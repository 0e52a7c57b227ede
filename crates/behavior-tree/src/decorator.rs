//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.

use crate::{Behavior, Status};

/// Inverts the resolved result of its child behavior.
///
/// # Semantics
///
/// - `Success` becomes `Failure` and vice versa
/// - `Running` passes through unchanged - progress is progress either way
///
/// This expresses "try X, and treat not-succeeding as the expected branch":
/// e.g. "try to use a kit; having none is fine, fall through to the next
/// step of the sequence".
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}
