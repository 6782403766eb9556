//! Shape identifier generation.
//!
//! The canvas layer uses the shape id as its sole identity for selection and
//! hit-testing, so ids are assigned once at creation and never reused. The
//! generator is injected as a capability rather than called as a global,
//! which keeps the layout builders deterministic under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Process-unique identifier of a shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh shape ids.
pub trait IdSource {
    fn next_id(&mut self) -> ShapeId;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> ShapeId {
        ShapeId(Uuid::new_v4())
    }
}

/// Deterministic id source for tests: emits UUIDs whose low bits count up.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
    counter: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> ShapeId {
        self.counter += 1;
        ShapeId(Uuid::from_u64_pair(0, self.counter))
    }
}
