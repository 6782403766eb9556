//! Single-unit builders: one gondola or one mesh end.

use storeplan_core::{IdSource, LayoutConfig, Point, Result, ShapeParamError, Size};

use super::{Alignment, Direction, DEFAULT_FILL, DEFAULT_STROKE};
use crate::model::{Geometry, ShapeKind, ShapeRecord, ShapeStyle};

/// Form result for a single gondola.
#[derive(Debug, Clone, PartialEq)]
pub struct GondolaSpec {
    pub origin: Point,
    /// Cells along the shelf front.
    pub width_cells: u32,
    /// Cells from front to back.
    pub depth_cells: u32,
    pub alignment: Alignment,
}

/// Form result for a single mesh end.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshEndSpec {
    pub origin: Point,
    pub width_cells: u32,
    pub depth_cells: u32,
    /// Which side of its run the mesh end faces; TOP/BOTTOM lie horizontal,
    /// LEFT/RIGHT lie vertical.
    pub direction: Direction,
}

fn check_cells(width_cells: u32, depth_cells: u32) -> Result<()> {
    if width_cells == 0 {
        return Err(ShapeParamError::ZeroField {
            field: "width_cells",
        }
        .into());
    }
    if depth_cells == 0 {
        return Err(ShapeParamError::ZeroField {
            field: "depth_cells",
        }
        .into());
    }
    Ok(())
}

fn unit_size(
    config: &LayoutConfig,
    width_cells: u32,
    depth_cells: u32,
    alignment: Alignment,
) -> Size {
    let lattice = &config.lattice;
    match alignment {
        Alignment::Horizontal => Size::new(
            lattice.width_px(width_cells),
            lattice.height_px(depth_cells),
        ),
        Alignment::Vertical => Size::new(
            lattice.width_px(depth_cells),
            lattice.height_px(width_cells),
        ),
    }
}

/// Builds one gondola record. Alignment swaps width and height.
pub fn build_gondola(
    spec: &GondolaSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<ShapeRecord> {
    check_cells(spec.width_cells, spec.depth_cells)?;
    let size = unit_size(config, spec.width_cells, spec.depth_cells, spec.alignment);
    Ok(ShapeRecord {
        id: ids.next_id(),
        kind: ShapeKind::Gondola,
        geometry: Geometry::rect(spec.origin, size),
        location: None,
        display_code: None,
        style: ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
        placement: spec.alignment,
        text: None,
        area_id: None,
    })
}

/// Builds one mesh-end record. The facing direction decides the placement.
pub fn build_mesh_end(
    spec: &MeshEndSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<ShapeRecord> {
    check_cells(spec.width_cells, spec.depth_cells)?;
    let alignment = if spec.direction.is_vertical() {
        Alignment::Horizontal
    } else {
        Alignment::Vertical
    };
    let size = unit_size(config, spec.width_cells, spec.depth_cells, alignment);
    Ok(ShapeRecord {
        id: ids.next_id(),
        kind: ShapeKind::MeshEnd,
        geometry: Geometry::rect(spec.origin, size),
        location: None,
        display_code: None,
        style: ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
        placement: alignment,
        text: None,
        area_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeplan_core::{Lattice, SequentialIdSource};

    fn config() -> LayoutConfig {
        LayoutConfig {
            lattice: Lattice::new(10.0, 10.0),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_gondola_alignment_swaps_dimensions() {
        let mut ids = SequentialIdSource::new();
        let base = GondolaSpec {
            origin: Point::new(0.0, 0.0),
            width_cells: 6,
            depth_cells: 3,
            alignment: Alignment::Horizontal,
        };
        let horizontal = build_gondola(&base, &config(), &mut ids).unwrap();
        let vertical = build_gondola(
            &GondolaSpec {
                alignment: Alignment::Vertical,
                ..base
            },
            &config(),
            &mut ids,
        )
        .unwrap();

        let Geometry::Rect { size: h, .. } = horizontal.geometry else {
            panic!("expected rect");
        };
        let Geometry::Rect { size: v, .. } = vertical.geometry else {
            panic!("expected rect");
        };
        assert_eq!((h.width, h.height), (60.0, 30.0));
        assert_eq!((v.width, v.height), (30.0, 60.0));
    }

    #[test]
    fn test_mesh_end_direction_decides_placement() {
        let mut ids = SequentialIdSource::new();
        for (direction, expected) in [
            (Direction::Top, Alignment::Horizontal),
            (Direction::Bottom, Alignment::Horizontal),
            (Direction::Left, Alignment::Vertical),
            (Direction::Right, Alignment::Vertical),
        ] {
            let record = build_mesh_end(
                &MeshEndSpec {
                    origin: Point::new(0.0, 0.0),
                    width_cells: 4,
                    depth_cells: 2,
                    direction,
                },
                &config(),
                &mut ids,
            )
            .unwrap();
            assert_eq!(record.placement, expected, "direction {direction:?}");
            assert_eq!(record.kind, ShapeKind::MeshEnd);
        }
    }

    #[test]
    fn test_zero_cells_rejected() {
        let mut ids = SequentialIdSource::new();
        let err = build_gondola(
            &GondolaSpec {
                origin: Point::new(0.0, 0.0),
                width_cells: 0,
                depth_cells: 3,
                alignment: Alignment::Horizontal,
            },
            &config(),
            &mut ids,
        )
        .unwrap_err();
        assert!(err.is_param_error());
    }
}
