//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick Semantics
///
/// A node is evaluated once per simulation step:
/// - Conditions resolve immediately (e.g., "Is health critical?")
/// - Actions may span many steps (e.g., "Walk to the far corner"); they
///   report [`Status::Running`] until the world reaches the desired state
///
/// `Running` is not a suspension: the tick call returns normally and the
/// parent composite decides whether the next tick resumes at this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be performed (e.g., no kit left).
    Failure,

    /// The behavior has made progress but is not yet resolved; evaluate
    /// again next tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps Success and Failure; `Running` is unchanged.
    ///
    /// An in-progress action is still in progress no matter which outcome
    /// the caller considers the expected one.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
