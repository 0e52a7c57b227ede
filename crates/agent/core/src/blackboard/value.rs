//! Tagged payloads stored in blackboard slots.

use crate::state::{AgentSnapshot, SightedItem, StructureRecord, TargetItem, Vec2, WorldBounds};
use crate::steering::SteeringMode;

/// Payload of a blackboard slot.
///
/// A closed union instead of `Box<dyn Any>`: every slot type the tree and
/// pipeline exchange is enumerated here, so a mismatched read is a typed
/// error rather than a downcast surprise.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Position(Vec2),
    Agent(AgentSnapshot),
    World(WorldBounds),
    Structure(StructureRecord),
    Structures(Vec<StructureRecord>),
    Items(Vec<SightedItem>),
    TargetItem(TargetItem),
    Positions(Vec<Vec2>),
    Steering(Option<SteeringMode>),
}

/// Discriminant of a [`Value`], used in mismatch errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    Position,
    Agent,
    World,
    Structure,
    Structures,
    Items,
    TargetItem,
    Positions,
    Steering,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Position(_) => ValueKind::Position,
            Value::Agent(_) => ValueKind::Agent,
            Value::World(_) => ValueKind::World,
            Value::Structure(_) => ValueKind::Structure,
            Value::Structures(_) => ValueKind::Structures,
            Value::Items(_) => ValueKind::Items,
            Value::TargetItem(_) => ValueKind::TargetItem,
            Value::Positions(_) => ValueKind::Positions,
            Value::Steering(_) => ValueKind::Steering,
        }
    }
}

/// A Rust type that maps onto exactly one [`Value`] variant.
///
/// Implemented for every payload type; gives the board its typed
/// `put`/`get`/`set` surface without any `Any`-style downcasting.
pub trait SlotValue: Sized {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    /// Extracts a copy of the payload if the variant matches.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_slot_value {
    ($ty:ty, $variant:ident) => {
        impl SlotValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_slot_value!(Vec2, Position);
impl_slot_value!(AgentSnapshot, Agent);
impl_slot_value!(WorldBounds, World);
impl_slot_value!(StructureRecord, Structure);
impl_slot_value!(Vec<StructureRecord>, Structures);
impl_slot_value!(Vec<SightedItem>, Items);
impl_slot_value!(TargetItem, TargetItem);
impl_slot_value!(Vec<Vec2>, Positions);
impl_slot_value!(Option<SteeringMode>, Steering);
