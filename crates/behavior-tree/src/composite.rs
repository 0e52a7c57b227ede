//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! [`Sequence`] and [`Selector`] are the short-circuiting AND/OR building
//! blocks; [`PartialSequence`] adds cross-tick resumption; [`AlwaysSucceed`],
//! [`RunningIsGood`] and [`DoAll`] evaluate every child and aggregate.

use crate::{Behavior, Status};

/// Executes child behaviors in order until one fails or is still running.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and
///   returns `Failure`
/// - If a child returns `Running`, the sequence stops and returns `Running`;
///   the next tick restarts from the **first** child (a sequence holds no
///   cursor - use [`PartialSequence`] to resume at the running child)
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
                Status::Running => return Status::Running,
            }
        }
        Status::Success
    }
}

/// A sequence that resumes at the child left running on the previous tick.
///
/// # Semantics
///
/// Identical left-to-right evaluation to [`Sequence`], except that a child
/// returning `Running` is remembered: the next tick resumes evaluation at
/// that same child instead of re-running the earlier ones. This lets a
/// long-running action (e.g., walking to a corner) coexist with cheaper
/// earlier steps without re-running them every tick.
///
/// `Failure` at any child, or completing the whole list, resets the cursor
/// to the first child.
pub struct PartialSequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: usize,
}

impl<C> PartialSequence<C> {
    /// Creates a new partial sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "PartialSequence must have at least one child"
        );
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<C> Behavior<C> for PartialSequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Status::Success => self.cursor += 1,
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
                Status::Running => return Status::Running,
            }
        }
        self.cursor = 0;
        Status::Success
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is how fallback priority ("try pickup, else search a structure,
/// else wander") is expressed.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Failure => continue,
                status => return status,
            }
        }
        Status::Failure
    }
}

/// Ticks all children in order for their side effects, then succeeds.
///
/// Child outcomes are ignored entirely. This keeps an unconditional step
/// (like clearing a flag at the top of every tick) from ever blocking the
/// composite above it.
pub struct AlwaysSucceed<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed group over the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "AlwaysSucceed must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for child in &mut self.children {
            let _ = child.tick(ctx);
        }
        Status::Success
    }
}

/// Ticks all children, treating "still in progress" as an acceptable state.
///
/// # Semantics
///
/// Every child is evaluated each tick. The aggregate is:
/// - `Running` if **any** child returned `Running`, even if others failed
/// - otherwise `Success` if no child failed
/// - otherwise `Failure`
///
/// This lets a parent keep retrying a multi-phase sweep without treating
/// partial failure as fatal while any phase is still making progress.
pub struct RunningIsGood<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> RunningIsGood<C> {
    /// Creates a new running-is-good group over the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "RunningIsGood must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for RunningIsGood<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut any_running = false;
        let mut any_failed = false;

        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Running => any_running = true,
                Status::Failure => any_failed = true,
                Status::Success => {}
            }
        }

        if any_running {
            Status::Running
        } else if any_failed {
            Status::Failure
        } else {
            Status::Success
        }
    }
}

/// Ticks every child unconditionally; succeeds only if every child did.
///
/// Unlike [`Sequence`] there is no short-circuit: mutually independent side
/// effects (e.g., the health check and the energy check) all run every
/// tick regardless of each other's outcome.
pub struct DoAll<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> DoAll<C> {
    /// Creates a new do-all group over the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "DoAll must have at least one child");
        Self { children }
    }
}

impl<C> Behavior<C> for DoAll<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut all_succeeded = true;

        for child in &mut self.children {
            if child.tick(ctx) != Status::Success {
                all_succeeded = false;
            }
        }

        if all_succeeded {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
