//! # Storeplan Layout
//!
//! Shape factory for the Storeplan floor-plan editor. Translates a validated
//! "add shape" form result into an ordered list of [`model::ShapeRecord`]s
//! ready for insertion into the canvas model.
//!
//! Supports:
//! - Single gondola and mesh-end units
//! - Compound tables (end caps, side locations, repeats, branch numbering)
//! - Wall runs of gondolas
//! - Islands (circle/square/register tables, free text) with availability
//! - Decoration shapes (L-shape paths, areas, pillars, drawing primitives)
//!
//! Every builder is a pure function of (form input, [`LayoutConfig`]
//! snapshot, id source); the crate holds no state between calls.

pub mod builders;
pub mod location;
pub mod model;
pub mod numbering;

pub use builders::{
    build_area, build_circle_table, build_drawing, build_free_text, build_gondola,
    build_mesh_end, build_pillar, build_register_table, build_special_shape,
    build_square_table, build_table, build_wall, Alignment, AreaSpec, AvailableType,
    CircleTableSpec, Direction, DrawingSpec, FreeTextSpec, GondolaSpec, MeshEndSpec,
    PillarSpec, RegisterTableSpec, SpecialShapeSpec, SquareTableSpec, StartCorner,
    TableEndType, TableSpec, WallSpec,
};
pub use location::{next_table_id, pad_wrapping, split_location_num, LocationCode};
pub use model::{Geometry, Placement, ShapeKind, ShapeRecord, ShapeStyle};
pub use numbering::{branch_plan, BranchPlan, NumberingRule, NumberingSpec};

pub use storeplan_core::{
    Color, DisplayFormat, Error, IdSource, Lattice, LayoutConfig, Point, Result,
    SequentialIdSource, ShapeId, Size, UuidIdSource,
};
