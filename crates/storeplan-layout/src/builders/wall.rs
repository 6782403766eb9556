//! Wall builder: a straight run of gondolas with sequential numbering.
//!
//! Simpler than a table: no end caps and no facing flanks, just
//! `num_of_gondola` units in a line. The starting corner decides whether
//! branch numbers ascend from the origin-side unit or descend toward it.

use storeplan_core::{IdSource, LayoutConfig, Point, Result, ShapeParamError, Size};
use tracing::debug;

use super::{
    check_branch_capacity, Alignment, Direction, StartCorner, DEFAULT_FILL, DEFAULT_STROKE,
};
use crate::location::{next_table_id, pad_wrapping, split_location_num, LocationCode};
use crate::model::{sort_by_location, Geometry, ShapeKind, ShapeRecord, ShapeStyle};

/// Form result for an "add wall" operation.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    /// Top-left anchor of the first run.
    pub origin: Point,
    pub alignment: Alignment,
    /// Cells along the run per gondola.
    pub gondola_width_cells: u32,
    /// Cells across the run.
    pub gondola_depth_cells: u32,
    pub num_of_gondola: u32,
    pub repeat_count: u32,
    pub repeat_direction: Direction,
    pub starting_gondola: StartCorner,
    /// Starting location code: table id of the first repeat plus the first
    /// branch number.
    pub start_location_num: String,
}

/// Builds all records for one "add wall" operation.
pub fn build_wall(
    spec: &WallSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<Vec<ShapeRecord>> {
    config.validate()?;
    for (field, value) in [
        ("gondola_width_cells", spec.gondola_width_cells),
        ("gondola_depth_cells", spec.gondola_depth_cells),
        ("num_of_gondola", spec.num_of_gondola),
        ("repeat_count", spec.repeat_count),
    ] {
        if value == 0 {
            return Err(ShapeParamError::ZeroField { field }.into());
        }
    }

    let start = split_location_num(&spec.start_location_num, config)?;
    let start_branch: u64 = start.branch_num.parse().unwrap_or(0);
    let n = spec.num_of_gondola as u64;
    check_branch_capacity("num_of_gondola", start_branch, n, config.branch_num_len)?;

    debug!(
        gondolas = spec.num_of_gondola,
        repeats = spec.repeat_count,
        corner = ?spec.starting_gondola,
        "building wall run"
    );

    let lattice = &config.lattice;
    let (unit_size, step, extent_w, extent_h) = match spec.alignment {
        Alignment::Horizontal => {
            let unit = Size::new(
                lattice.width_px(spec.gondola_width_cells),
                lattice.height_px(spec.gondola_depth_cells),
            );
            (unit, (unit.width, 0.0), unit.width * n as f64, unit.height)
        }
        Alignment::Vertical => {
            let unit = Size::new(
                lattice.width_px(spec.gondola_depth_cells),
                lattice.height_px(spec.gondola_width_cells),
            );
            (unit, (0.0, unit.height), unit.width, unit.height * n as f64)
        }
    };

    let span_w = (spec.repeat_count - 1) as f64 * extent_w;
    let span_h = (spec.repeat_count - 1) as f64 * extent_h;

    let mut records = Vec::new();
    let mut table_id = start.table_id.clone();
    for repeat in 0..spec.repeat_count {
        if repeat > 0 {
            table_id = next_table_id(&table_id, config.table_id_len)?;
        }
        let (dx, dy) = match spec.repeat_direction {
            Direction::Bottom => (0.0, repeat as f64 * extent_h),
            Direction::Right => (repeat as f64 * extent_w, 0.0),
            Direction::Top => (0.0, repeat as f64 * extent_h - span_h),
            Direction::Left => (repeat as f64 * extent_w - span_w, 0.0),
        };
        let run_origin = spec.origin.offset(dx, dy);

        for i in 0..n {
            let branch = match spec.starting_gondola {
                StartCorner::Near => start_branch + i,
                StartCorner::Far => start_branch + n - 1 - i,
            };
            let code = LocationCode::new(
                table_id.clone(),
                pad_wrapping(branch, config.branch_num_len),
            );
            let display = code.display(&config.display_format);
            let origin = run_origin.offset(i as f64 * step.0, i as f64 * step.1);
            records.push(ShapeRecord {
                id: ids.next_id(),
                kind: ShapeKind::Gondola,
                geometry: Geometry::rect(origin, unit_size),
                location: Some(code),
                display_code: Some(display),
                style: ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
                placement: spec.alignment,
                text: None,
                area_id: None,
            });
        }
    }

    sort_by_location(&mut records);
    Ok(records)
}
