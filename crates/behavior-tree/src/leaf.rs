//! Leaf behavior nodes.
//!
//! Leaves have no children: [`Action`] wraps a function that performs one
//! unit of behavior and reports its status, [`Conditional`] wraps a
//! predicate over the context.

use std::marker::PhantomData;

use crate::{Behavior, Status};

/// Wraps a unary function `(ctx) -> Status` as a leaf node.
///
/// The function may return any status, including [`Status::Running`] for
/// work that spans multiple ticks (e.g., walking toward a point).
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::{Action, Status};
///
/// let mut pickup = Action::new(|ctx: &mut AgentContext| pickup_item(ctx));
/// ```
pub struct Action<C, F> {
    f: F,
    _ctx: PhantomData<fn(&mut C)>,
}

impl<C, F> Action<C, F>
where
    F: FnMut(&mut C) -> Status,
{
    /// Creates a new action leaf from the given function.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _ctx: PhantomData,
        }
    }
}

impl<C, F> Behavior<C> for Action<C, F>
where
    F: FnMut(&mut C) -> Status + Send,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.f)(ctx)
    }
}

/// Wraps a predicate `(ctx) -> bool` as a leaf node.
///
/// Returns `Success` if the predicate holds, `Failure` otherwise; never
/// `Running` - a condition resolves within the tick it is asked in.
///
/// The predicate receives the context mutably: some checks record
/// bookkeeping as a side effect (e.g., noting the position a structure was
/// entered from while still outside it).
pub struct Conditional<C, P> {
    predicate: P,
    _ctx: PhantomData<fn(&mut C)>,
}

impl<C, P> Conditional<C, P>
where
    P: FnMut(&mut C) -> bool,
{
    /// Creates a new conditional leaf from the given predicate.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            _ctx: PhantomData,
        }
    }
}

impl<C, P> Behavior<C> for Conditional<C, P>
where
    P: FnMut(&mut C) -> bool + Send,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
