//! Lattice (snapping grid) unit conversion.
//!
//! Shapes on the map are sized in whole grid cells; the lattice converts a
//! cell count into pixel dimensions. Cell width and height are configured
//! independently so a store can use non-square grid cells.

use serde::{Deserialize, Serialize};

/// Default cell edge in pixels, matching the editor's initial grid.
pub const DEFAULT_CELL_PX: f64 = 15.0;

/// The pixel dimensions of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// Cell width in pixels per cell.
    pub cell_width: f64,
    /// Cell height in pixels per cell.
    pub cell_height: f64,
}

impl Lattice {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        debug_assert!(
            cell_width.is_finite() && cell_width > 0.0,
            "cell_width must be positive and finite, got {cell_width}"
        );
        debug_assert!(
            cell_height.is_finite() && cell_height > 0.0,
            "cell_height must be positive and finite, got {cell_height}"
        );
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Converts a horizontal cell count to pixels.
    pub fn width_px(&self, cells: u32) -> f64 {
        cells as f64 * self.cell_width
    }

    /// Converts a vertical cell count to pixels.
    pub fn height_px(&self, cells: u32) -> f64 {
        cells as f64 * self.cell_height
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_PX,
            cell_height: DEFAULT_CELL_PX,
        }
    }
}
