//! Common types

use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Deterministic id for seeded records, so mock data is stable across runs.
pub const fn seeded_id(n: u128) -> EntityId {
    Uuid::from_u128(n)
}
