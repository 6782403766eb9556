//! Compound table builder.
//!
//! A table structure is an optional front end cap, N side locations down
//! each flank of the run, and an optional back end cap. The whole structure
//! can repeat along a direction; each repeat gets its own table id and the
//! same branch-number plan. Output is sorted by location code, ascending.

use storeplan_core::{IdSource, LayoutConfig, Point, Result, ShapeParamError, Size};
use tracing::debug;

use super::{
    check_branch_capacity, Alignment, Direction, TableEndType, DEFAULT_FILL, DEFAULT_STROKE,
};
use crate::location::{next_table_id, pad_wrapping, split_location_num, LocationCode};
use crate::model::{sort_by_location, Geometry, ShapeKind, ShapeRecord, ShapeStyle};
use crate::numbering::{branch_plan, BranchPlan, NumberingRule, NumberingSpec};

/// Form result for an "add table" operation.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Top-left anchor of the first structure.
    pub origin: Point,
    pub alignment: Alignment,
    /// Cells along the run per side location.
    pub gondola_width_cells: u32,
    /// Cells across the run per side location (one flank).
    pub gondola_depth_cells: u32,
    /// Cells along the run occupied by each end cap.
    pub end_depth_cells: u32,
    /// Side locations per flank (N).
    pub side_count: u32,
    pub front_end: TableEndType,
    pub back_end: TableEndType,
    pub repeat_count: u32,
    pub repeat_direction: Direction,
    pub numbering: NumberingRule,
    /// Numbering starts at the high corner of the run.
    pub reverse_numbering: bool,
    /// Starting location code: table id of the first repeat plus the first
    /// branch number, concatenated and zero-padded to the configured widths.
    pub start_location_num: String,
}

fn cap_kind(end: TableEndType) -> Option<ShapeKind> {
    match end {
        TableEndType::Basic => Some(ShapeKind::Gondola),
        TableEndType::MeshEnd => Some(ShapeKind::MeshEnd),
        TableEndType::NoEnd => None,
    }
}

fn validate(spec: &TableSpec) -> Result<()> {
    for (field, value) in [
        ("gondola_width_cells", spec.gondola_width_cells),
        ("gondola_depth_cells", spec.gondola_depth_cells),
        ("repeat_count", spec.repeat_count),
    ] {
        if value == 0 {
            return Err(ShapeParamError::ZeroField { field }.into());
        }
    }
    let has_cap = spec.front_end.is_present() || spec.back_end.is_present();
    if has_cap && spec.end_depth_cells == 0 {
        return Err(ShapeParamError::ZeroField {
            field: "end_depth_cells",
        }
        .into());
    }
    Ok(())
}

/// Builds all records for one "add table" operation.
pub fn build_table(
    spec: &TableSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
) -> Result<Vec<ShapeRecord>> {
    config.validate()?;
    validate(spec)?;

    let start = split_location_num(&spec.start_location_num, config)?;
    // split_location_num guarantees digits, and widths are capped, so the
    // branch part always parses.
    let start_branch: u64 = start.branch_num.parse().unwrap_or(0);

    let plan = branch_plan(&NumberingSpec {
        rule: spec.numbering,
        reverse: spec.reverse_numbering,
        start_branch,
        side_count: spec.side_count,
        no_front: !spec.front_end.is_present(),
        no_back: !spec.back_end.is_present(),
    });
    check_branch_capacity(
        "side_count",
        start_branch,
        plan.total_count() as u64,
        config.branch_num_len,
    )?;

    debug!(
        repeats = spec.repeat_count,
        sides = spec.side_count,
        rule = ?spec.numbering,
        reverse = spec.reverse_numbering,
        "building table structure"
    );

    let lattice = &config.lattice;
    let caps = usize::from(spec.front_end.is_present()) + usize::from(spec.back_end.is_present());
    let (extent_w, extent_h) = match spec.alignment {
        Alignment::Vertical => (
            2.0 * lattice.width_px(spec.gondola_depth_cells),
            caps as f64 * lattice.height_px(spec.end_depth_cells)
                + spec.side_count as f64 * lattice.height_px(spec.gondola_width_cells),
        ),
        Alignment::Horizontal => (
            caps as f64 * lattice.width_px(spec.end_depth_cells)
                + spec.side_count as f64 * lattice.width_px(spec.gondola_width_cells),
            2.0 * lattice.height_px(spec.gondola_depth_cells),
        ),
    };

    // TOP/LEFT repeats run away from the origin: the total span is computed
    // up front and subtracted so repeat index 0 lands at the far end.
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
        let origin = spec.origin.offset(dx, dy);
        emit_structure(spec, config, ids, &plan, &table_id, origin, &mut records);
    }

    sort_by_location(&mut records);
    Ok(records)
}

fn emit_structure(
    spec: &TableSpec,
    config: &LayoutConfig,
    ids: &mut dyn IdSource,
    plan: &BranchPlan,
    table_id: &str,
    origin: Point,
    records: &mut Vec<ShapeRecord>,
) {
    let lattice = &config.lattice;
    let cap_placement = match spec.alignment {
        Alignment::Vertical => Alignment::Horizontal,
        Alignment::Horizontal => Alignment::Vertical,
    };

    let mut emit = |kind: ShapeKind, geometry: Geometry, placement: Alignment, branch: u64| {
        let code = LocationCode::new(
            table_id,
            pad_wrapping(branch, config.branch_num_len),
        );
        let display = code.display(&config.display_format);
        records.push(ShapeRecord {
            id: ids.next_id(),
            kind,
            geometry,
            location: Some(code),
            display_code: Some(display),
            style: ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
            placement,
            text: None,
            area_id: None,
        });
    };

    match spec.alignment {
        Alignment::Vertical => {
            let depth_px = lattice.width_px(spec.gondola_depth_cells);
            let unit_py = lattice.height_px(spec.gondola_width_cells);
            let cap_py = lattice.height_px(spec.end_depth_cells);
            let cap_size = Size::new(2.0 * depth_px, cap_py);
            let unit_size = Size::new(depth_px, unit_py);

            let mut cursor = origin.y;
            if let (Some(kind), Some(branch)) = (cap_kind(spec.front_end), plan.front) {
                emit(
                    kind,
                    Geometry::rect(Point::new(origin.x, cursor), cap_size),
                    cap_placement,
                    branch,
                );
                cursor += cap_py;
            }
            for i in 0..spec.side_count as usize {
                let y = cursor + i as f64 * unit_py;
                emit(
                    ShapeKind::Gondola,
                    Geometry::rect(Point::new(origin.x, y), unit_size),
                    Alignment::Vertical,
                    plan.left[i],
                );
                emit(
                    ShapeKind::Gondola,
                    Geometry::rect(Point::new(origin.x + depth_px, y), unit_size),
                    Alignment::Vertical,
                    plan.right[i],
                );
            }
            cursor += spec.side_count as f64 * unit_py;
            if let (Some(kind), Some(branch)) = (cap_kind(spec.back_end), plan.back) {
                emit(
                    kind,
                    Geometry::rect(Point::new(origin.x, cursor), cap_size),
                    cap_placement,
                    branch,
                );
            }
        }
        Alignment::Horizontal => {
            let depth_py = lattice.height_px(spec.gondola_depth_cells);
            let unit_px = lattice.width_px(spec.gondola_width_cells);
            let cap_px = lattice.width_px(spec.end_depth_cells);
            let cap_size = Size::new(cap_px, 2.0 * depth_py);
            let unit_size = Size::new(unit_px, depth_py);

            let mut cursor = origin.x;
            if let (Some(kind), Some(branch)) = (cap_kind(spec.front_end), plan.front) {
                emit(
                    kind,
                    Geometry::rect(Point::new(cursor, origin.y), cap_size),
                    cap_placement,
                    branch,
                );
                cursor += cap_px;
            }
            for i in 0..spec.side_count as usize {
                let x = cursor + i as f64 * unit_px;
                // The plan's "left" flank is the top row of a horizontal run.
                emit(
                    ShapeKind::Gondola,
                    Geometry::rect(Point::new(x, origin.y), unit_size),
                    Alignment::Horizontal,
                    plan.left[i],
                );
                emit(
                    ShapeKind::Gondola,
                    Geometry::rect(Point::new(x, origin.y + depth_py), unit_size),
                    Alignment::Horizontal,
                    plan.right[i],
                );
            }
            cursor += spec.side_count as f64 * unit_px;
            if let (Some(kind), Some(branch)) = (cap_kind(spec.back_end), plan.back) {
                emit(
                    kind,
                    Geometry::rect(Point::new(cursor, origin.y), cap_size),
                    cap_placement,
                    branch,
                );
            }
        }
    }
}
