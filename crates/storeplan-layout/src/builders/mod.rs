//! Shape builders: one function per shape family.
//!
//! Each builder translates one validated "add shape" form result into shape
//! records. Builders validate their location-code inputs against the
//! configured digit widths and fail with a descriptive error instead of
//! mis-slicing; numeric ranges are assumed to be UI-enforced except where a
//! zero would make the layout degenerate.

use serde::{Deserialize, Serialize};
use storeplan_core::{Color, Result, ShapeParamError};

mod decor;
mod island;
mod table;
mod unit;
mod wall;

pub use decor::{
    build_area, build_drawing, build_pillar, build_special_shape, AreaSpec, DrawingSpec,
    PillarSpec, SpecialShapeSpec,
};
pub use island::{
    build_circle_table, build_free_text, build_register_table, build_square_table,
    AvailableType, CircleTableSpec, FreeTextSpec, RegisterTableSpec, SquareTableSpec,
};
pub use table::{build_table, TableSpec};
pub use unit::{build_gondola, build_mesh_end, GondolaSpec, MeshEndSpec};
pub use wall::{build_wall, WallSpec};

/// Orientation of a structure's run; identical to the record-level
/// [`Placement`](crate::model::Placement).
pub use crate::model::Placement as Alignment;

/// Side of the map a directional input points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Whether this direction runs along the Y axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }
}

/// End-cap configuration of one end of a table run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableEndType {
    /// Basic gondola end cap.
    Basic,
    /// Mesh end cap.
    MeshEnd,
    /// No end cap; the corresponding branch number is not assigned.
    NoEnd,
}

impl TableEndType {
    pub fn is_present(&self) -> bool {
        !matches!(self, TableEndType::NoEnd)
    }
}

/// Which corner of a wall run the numbering starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartCorner {
    /// The origin-side gondola gets the starting branch number.
    Near,
    /// The far gondola gets the starting branch number; numbering descends
    /// toward the origin.
    Far,
}

/// Default border color of generated shapes.
pub const DEFAULT_STROKE: Color = Color::opaque(51, 51, 51);
/// Default fill color of generated shapes.
pub const DEFAULT_FILL: Color = Color::opaque(255, 255, 255);
/// Fill used for structural pillars.
pub const PILLAR_FILL: Color = Color::opaque(153, 153, 153);

/// Initial radius of a circle table, in pixels.
pub const CIRCLE_TABLE_RADIUS_PX: f64 = 30.0;
/// Initial edge of a square table, in pixels.
pub const SQUARE_TABLE_EDGE_PX: f64 = 60.0;
/// Initial size of a register table, in pixels.
pub const REGISTER_TABLE_SIZE_PX: (f64, f64) = (60.0, 45.0);
/// Initial size of a free-text annotation, in pixels.
pub const FREE_TEXT_SIZE_PX: (f64, f64) = (90.0, 30.0);

/// Rejects a structure whose branch numbers cannot all be represented in
/// `branch_num_len` digits. Wrapping inside one structure would assign the
/// same location code twice.
pub(crate) fn check_branch_capacity(
    field: &'static str,
    start_branch: u64,
    total: u64,
    branch_num_len: usize,
) -> Result<()> {
    // branch_num_len is capped at 9 by LayoutConfig::validate, so the
    // modulus fits in u64.
    let capacity = 10u64.pow(branch_num_len as u32);
    if total > 0 && start_branch + total > capacity {
        return Err(ShapeParamError::Invalid {
            field,
            reason: format!(
                "branch numbers run up to {}, past the largest {}-digit value {}",
                start_branch + total - 1,
                branch_num_len,
                capacity - 1
            ),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axis() {
        assert!(Direction::Top.is_vertical());
        assert!(Direction::Bottom.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn test_end_type_presence() {
        assert!(TableEndType::Basic.is_present());
        assert!(TableEndType::MeshEnd.is_present());
        assert!(!TableEndType::NoEnd.is_present());
    }
}
