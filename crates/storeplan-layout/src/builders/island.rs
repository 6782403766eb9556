//! Island builders: free-standing tables not part of a table/wall run.
//!
//! Each island variant is a single record with shape-specific default
//! geometry. Availability drives the border rendering: an unavailable
//! island keeps its configured border color but renders it with a zero
//! alpha channel so it can be toggled back later.

use serde::{Deserialize, Serialize};
use storeplan_core::{IdSource, Point, Result, ShapeParamError, Size};

use super::{
    Alignment, CIRCLE_TABLE_RADIUS_PX, DEFAULT_FILL, DEFAULT_STROKE, FREE_TEXT_SIZE_PX,
    REGISTER_TABLE_SIZE_PX, SQUARE_TABLE_EDGE_PX,
};
use crate::model::{Geometry, ShapeKind, ShapeRecord, ShapeStyle};

/// Whether an island is currently a sellable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailableType {
    Available,
    NotAvailable,
}

impl AvailableType {
    fn style(&self) -> ShapeStyle {
        match self {
            AvailableType::Available => ShapeStyle::outlined(DEFAULT_STROKE, DEFAULT_FILL),
            AvailableType::NotAvailable => ShapeStyle::borderless(DEFAULT_STROKE, DEFAULT_FILL),
        }
    }
}

/// Form result for a circle table.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleTableSpec {
    pub center: Point,
    pub available: AvailableType,
}

/// Form result for a square table.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareTableSpec {
    pub origin: Point,
    pub available: AvailableType,
}

/// Form result for a register table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTableSpec {
    pub origin: Point,
    pub available: AvailableType,
}

/// Form result for a free-text annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeTextSpec {
    pub origin: Point,
    pub text: String,
    pub available: AvailableType,
}

fn island_record(
    ids: &mut dyn IdSource,
    kind: ShapeKind,
    geometry: Geometry,
    available: AvailableType,
    text: Option<String>,
) -> ShapeRecord {
    ShapeRecord {
        id: ids.next_id(),
        kind,
        geometry,
        location: None,
        display_code: None,
        style: available.style(),
        placement: Alignment::Horizontal,
        text,
        area_id: None,
    }
}

/// Builds one circle-table record with the default initial radius.
pub fn build_circle_table(spec: &CircleTableSpec, ids: &mut dyn IdSource) -> ShapeRecord {
    island_record(
        ids,
        ShapeKind::CircleTable,
        Geometry::circle(spec.center, CIRCLE_TABLE_RADIUS_PX),
        spec.available,
        None,
    )
}

/// Builds one square-table record with the default initial edge length.
pub fn build_square_table(spec: &SquareTableSpec, ids: &mut dyn IdSource) -> ShapeRecord {
    island_record(
        ids,
        ShapeKind::SquareTable,
        Geometry::rect(
            spec.origin,
            Size::new(SQUARE_TABLE_EDGE_PX, SQUARE_TABLE_EDGE_PX),
        ),
        spec.available,
        None,
    )
}

/// Builds one register-table record with the default initial size.
pub fn build_register_table(spec: &RegisterTableSpec, ids: &mut dyn IdSource) -> ShapeRecord {
    let (width, height) = REGISTER_TABLE_SIZE_PX;
    island_record(
        ids,
        ShapeKind::RegisterTable,
        Geometry::rect(spec.origin, Size::new(width, height)),
        spec.available,
        None,
    )
}

/// Builds one free-text record. The text must not be empty.
pub fn build_free_text(spec: &FreeTextSpec, ids: &mut dyn IdSource) -> Result<ShapeRecord> {
    if spec.text.trim().is_empty() {
        return Err(ShapeParamError::EmptyField { field: "text" }.into());
    }
    let (width, height) = FREE_TEXT_SIZE_PX;
    Ok(island_record(
        ids,
        ShapeKind::FreeText,
        Geometry::rect(spec.origin, Size::new(width, height)),
        spec.available,
        Some(spec.text.clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeplan_core::SequentialIdSource;

    #[test]
    fn test_circle_table_default_radius() {
        let mut ids = SequentialIdSource::new();
        let record = build_circle_table(
            &CircleTableSpec {
                center: Point::new(100.0, 80.0),
                available: AvailableType::Available,
            },
            &mut ids,
        );
        assert_eq!(record.kind, ShapeKind::CircleTable);
        let Geometry::Round {
            center,
            radius_x,
            radius_y,
        } = record.geometry
        else {
            panic!("expected round geometry");
        };
        assert_eq!(center, Point::new(100.0, 80.0));
        assert_eq!(radius_x, CIRCLE_TABLE_RADIUS_PX);
        assert_eq!(radius_y, CIRCLE_TABLE_RADIUS_PX);
    }

    #[test]
    fn test_unavailable_border_is_transparent_but_recoverable() {
        let mut ids = SequentialIdSource::new();
        let record = build_square_table(
            &SquareTableSpec {
                origin: Point::new(0.0, 0.0),
                available: AvailableType::NotAvailable,
            },
            &mut ids,
        );
        assert!(record.style.stroke.ends_with(",0)"));
        // The configured color is still held for re-toggling.
        assert_eq!(record.style.stroke_rgb.a, 1.0);
    }

    #[test]
    fn test_available_border_is_opaque() {
        let mut ids = SequentialIdSource::new();
        let record = build_register_table(
            &RegisterTableSpec {
                origin: Point::new(0.0, 0.0),
                available: AvailableType::Available,
            },
            &mut ids,
        );
        assert_eq!(record.style.stroke, DEFAULT_STROKE.to_css_string());
    }

    #[test]
    fn test_free_text_carries_its_text() {
        let mut ids = SequentialIdSource::new();
        let record = build_free_text(
            &FreeTextSpec {
                origin: Point::new(10.0, 10.0),
                text: "seasonal corner".to_string(),
                available: AvailableType::Available,
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(record.text.as_deref(), Some("seasonal corner"));
        assert!(record.location.is_none());
    }

    #[test]
    fn test_free_text_rejects_blank_text() {
        let mut ids = SequentialIdSource::new();
        let err = build_free_text(
            &FreeTextSpec {
                origin: Point::new(0.0, 0.0),
                text: "   ".to_string(),
                available: AvailableType::Available,
            },
            &mut ids,
        )
        .unwrap_err();
        assert!(err.is_param_error());
    }
}
