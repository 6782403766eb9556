//! Decoration builders: L-shaped special tables, area boundaries, pillars,
//! and generic drawing primitives. None of these carry location codes.

use storeplan_core::{IdSource, LayoutConfig, Point, Result, ShapeParamError, Size};

use super::{Alignment, Direction, DEFAULT_FILL, DEFAULT_STROKE, PILLAR_FILL};
use crate::model::{Geometry, ShapeKind, ShapeRecord, ShapeStyle};

/// Form result for an L-shaped special table.
///
/// The L is an outer `width` x `depth` rectangle with one quadrant removed;
/// `table_top_depth_cells` is the arm thickness and `direction` picks which
/// edges carry the arms.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialShapeSpec {
    pub origin: Point,
    pub width_cells: u32,
    pub depth_cells: u32,
    pub table_top_depth_cells: u32,
    pub direction: Direction,
}

/// Form result for an "add area" operation. The polygon boundary starts
/// empty and is drawn interactively afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSpec {
    pub area_id: String,
    pub text: String,
}

/// Form result for a structural pillar.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarSpec {
    pub origin: Point,
    pub width_cells: u32,
    pub height_cells: u32,
}

/// A generic drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingSpec {
    Rect { origin: Point, size: Size },
    Ellipse { center: Point, radius_x: f64, radius_y: f64 },
    Line { from: Point, to: Point },
}

fn decoration(
    ids: &mut dyn IdSource,
    kind: ShapeKind,
    geometry: Geometry,
    style: ShapeStyle,
) -> ShapeRecord {
    ShapeRecord {
        id: ids.next_id(),
        kind,
        geometry,
        location: None,
        display_code: None,
        style,
        placement: Alignment::Horizontal,
        text: None,
        area_id: None,
    }
}

/// Builds one L-shaped special-table record as an SVG-style path.
pub fn build_special_shape(
    spec: &SpecialShapeSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<ShapeRecord> {
    for (field, value) in [
        ("width_cells", spec.width_cells),
        ("depth_cells", spec.depth_cells),
        ("table_top_depth_cells", spec.table_top_depth_cells),
    ] {
        if value == 0 {
            return Err(ShapeParamError::ZeroField { field }.into());
        }
    }
    if spec.table_top_depth_cells >= spec.width_cells
        || spec.table_top_depth_cells >= spec.depth_cells
    {
        return Err(ShapeParamError::Invalid {
            field: "table_top_depth_cells",
            reason: format!(
                "must be smaller than width ({}) and depth ({})",
                spec.width_cells, spec.depth_cells
            ),
        }
        .into());
    }

    let lattice = &config.lattice;
    let w = lattice.width_px(spec.width_cells);
    let d = lattice.height_px(spec.depth_cells);
    let tx = lattice.width_px(spec.table_top_depth_cells);
    let ty = lattice.height_px(spec.table_top_depth_cells);

    // One fixed six-vertex template per direction; the removed quadrant sits
    // opposite the named edge.
    let vertices: [(f64, f64); 6] = match spec.direction {
        Direction::Top => [(0.0, 0.0), (w, 0.0), (w, ty), (tx, ty), (tx, d), (0.0, d)],
        Direction::Right => [
            (0.0, 0.0),
            (w, 0.0),
            (w, d),
            (w - tx, d),
            (w - tx, ty),
            (0.0, ty),
        ],
        Direction::Bottom => [
            (w - tx, 0.0),
            (w, 0.0),
            (w, d),
            (0.0, d),
            (0.0, d - ty),
            (w - tx, d - ty),
        ],
        Direction::Left => [
            (0.0, 0.0),
            (tx, 0.0),
            (tx, d - ty),
            (w, d - ty),
            (w, d),
            (0.0, d),
        ],
    };

    let mut data = String::new();
    for (i, (x, y)) in vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        data.push_str(&format!(
            "{}{} {} ",
            cmd,
            spec.origin.x + x,
            spec.origin.y + y
        ));
    }
    data.push('Z');

    Ok(decoration(
        ids,
        ShapeKind::SpecialShape,
        Geometry::PathData { data },
        ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
    ))
}

/// Builds one area placeholder record: an empty polygon boundary carrying
/// only the area id and its label.
pub fn build_area(spec: &AreaSpec, ids: &mut dyn IdSource) -> Result<ShapeRecord> {
    if spec.area_id.trim().is_empty() {
        return Err(ShapeParamError::EmptyField { field: "area_id" }.into());
    }
    let mut record = decoration(
        ids,
        ShapeKind::Area,
        Geometry::Polygon { points: Vec::new() },
        ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
    );
    record.area_id = Some(spec.area_id.clone());
    record.text = Some(spec.text.clone());
    Ok(record)
}

/// Builds one pillar record.
pub fn build_pillar(
    spec: &PillarSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<ShapeRecord> {
    for (field, value) in [
        ("width_cells", spec.width_cells),
        ("height_cells", spec.height_cells),
    ] {
        if value == 0 {
            return Err(ShapeParamError::ZeroField { field }.into());
        }
    }
    let size = Size::new(
        config.lattice.width_px(spec.width_cells),
        config.lattice.height_px(spec.height_cells),
    );
    Ok(decoration(
        ids,
        ShapeKind::Pillar,
        Geometry::rect(spec.origin, size),
        ShapeStyle::outlined(DEFAULT_STROKE, PILLAR_FILL),
    ))
}

/// Builds one generic drawing-primitive record.
pub fn build_drawing(spec: &DrawingSpec, ids: &mut dyn IdSource) -> ShapeRecord {
    let (kind, geometry) = match spec {
        DrawingSpec::Rect { origin, size } => (ShapeKind::Rect, Geometry::rect(*origin, *size)),
        DrawingSpec::Ellipse {
            center,
            radius_x,
            radius_y,
        } => (
            ShapeKind::Ellipse,
            Geometry::Round {
                center: *center,
                radius_x: *radius_x,
                radius_y: *radius_y,
            },
        ),
        DrawingSpec::Line { from, to } => (
            ShapeKind::Line,
            Geometry::PathData {
                data: format!("M{} {} L{} {}", from.x, from.y, to.x, to.y),
            },
        ),
    };
    decoration(
        ids,
        kind,
        geometry,
        ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
    )
}
