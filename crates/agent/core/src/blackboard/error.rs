//! Blackboard access errors.

use thiserror::Error;

use super::{Slot, ValueKind};

/// Errors surfaced by blackboard reads and writes.
///
/// Creating a duplicate slot or changing a slot's type are programming
/// errors in tree construction and should be treated as fatal by the
/// caller that seeds the board. `Missing`/`TypeMismatch` on reads are
/// downgraded to `Status::Failure` inside behavior leaves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("slot `{slot}` already exists")]
    SlotExists { slot: Slot },

    #[error("slot `{slot}` does not exist")]
    Missing { slot: Slot },

    #[error("slot `{slot}` holds {stored}, requested {requested}")]
    TypeMismatch {
        slot: Slot,
        stored: ValueKind,
        requested: ValueKind,
    },
}
