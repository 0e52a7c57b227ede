//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])` and compose whole
//! trees as one declarative expression.

use crate::{
    Action, AlwaysSucceed, Behavior, Conditional, DoAll, Inverter, PartialSequence, RunningIsGood,
    Selector, Sequence, Status,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a partial sequence node that resumes at a running child.
///
/// Shorthand for `Box::new(PartialSequence::new(children))`.
#[inline]
pub fn partial_sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(PartialSequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an always-succeed group node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(children))`.
#[inline]
pub fn always_succeed<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(children))
}

/// Creates a running-is-good group node.
///
/// Shorthand for `Box::new(RunningIsGood::new(children))`.
#[inline]
pub fn running_is_good<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(RunningIsGood::new(children))
}

/// Creates a do-all group node.
///
/// Shorthand for `Box::new(DoAll::new(children))`.
#[inline]
pub fn do_all<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(DoAll::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an action leaf from a function.
///
/// Shorthand for `Box::new(Action::new(f))`.
#[inline]
pub fn action<C: 'static, F>(f: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut C) -> Status + Send + 'static,
{
    Box::new(Action::new(f))
}

/// Creates a conditional leaf from a predicate.
///
/// Shorthand for `Box::new(Conditional::new(predicate))`.
#[inline]
pub fn condition<C: 'static, P>(predicate: P) -> Box<dyn Behavior<C>>
where
    P: FnMut(&mut C) -> bool + Send + 'static,
{
    Box::new(Conditional::new(predicate))
}
