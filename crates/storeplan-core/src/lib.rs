//! # Storeplan Core
//!
//! Core types and utilities for the Storeplan floor-plan editor.
//! Provides the fundamental abstractions shared by the layout generator and
//! the (external) canvas layer: geometry primitives, the snapping lattice,
//! RGBA colors, the editor configuration snapshot, shape-id generation, and
//! the error taxonomy.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod lattice;

pub use color::Color;
pub use config::{DisplayFormat, LayoutConfig};
pub use error::{CodeError, Error, Result, ShapeParamError};
pub use geometry::{Point, Size};
pub use id::{IdSource, SequentialIdSource, ShapeId, UuidIdSource};
pub use lattice::Lattice;
