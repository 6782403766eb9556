//! Shape record model: the unit of hand-off to the canvas layer.

use serde::{Deserialize, Serialize};
use storeplan_core::{Color, Point, ShapeId, Size};

use crate::location::LocationCode;

/// Closed set of shape variants placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// A single shelving unit.
    Gondola,
    /// An end-cap shelving unit variant distinct from a basic end.
    MeshEnd,
    /// Free-standing round table.
    CircleTable,
    /// Free-standing square table.
    SquareTable,
    /// Checkout register table.
    RegisterTable,
    /// Free-text annotation.
    FreeText,
    /// L-shaped table rendered from a path.
    SpecialShape,
    /// Named area boundary (polygon drawn interactively later).
    Area,
    /// Structural pillar.
    Pillar,
    /// Generic rectangle decoration.
    Rect,
    /// Generic ellipse decoration.
    Ellipse,
    /// Generic line decoration.
    Line,
}

/// Orientation of a gondola/table/wall structure on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Horizontal,
    Vertical,
}

/// Pixel geometry of one shape record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Axis-aligned rectangle with optional rotation around its origin.
    Rect {
        origin: Point,
        size: Size,
        /// Rotation in degrees, default 0.
        rotation: f64,
    },
    /// Round shape described by its center and radii.
    Round {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },
    /// SVG-style path data, positioned by the path coordinates themselves.
    PathData { data: String },
    /// Polygon boundary; empty until drawn interactively.
    Polygon { points: Vec<Point> },
}

impl Geometry {
    pub fn rect(origin: Point, size: Size) -> Self {
        Geometry::Rect {
            origin,
            size,
            rotation: 0.0,
        }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Geometry::Round {
            center,
            radius_x: radius,
            radius_y: radius,
        }
    }
}

/// Stroke/fill rendering and interaction flags of a shape.
///
/// `stroke_rgb` keeps the configured border color even while the rendered
/// `stroke` is fully transparent, so availability can be toggled back on
/// without losing the color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Configured border color.
    pub stroke_rgb: Color,
    /// Rendered border color as a CSS string; alpha 0 when unavailable.
    pub stroke: String,
    /// Rendered fill color as a CSS string.
    pub fill: String,
    pub visible: bool,
    pub selectable: bool,
}

impl ShapeStyle {
    /// Style with the border rendered as configured.
    pub fn outlined(stroke_rgb: Color, fill: Color) -> Self {
        Self {
            stroke_rgb,
            stroke: stroke_rgb.to_css_string(),
            fill: fill.to_css_string(),
            visible: true,
            selectable: true,
        }
    }

    /// Style with the border hidden via a zero alpha channel. The configured
    /// color stays in `stroke_rgb`.
    pub fn borderless(stroke_rgb: Color, fill: Color) -> Self {
        Self {
            stroke_rgb,
            stroke: stroke_rgb.transparent().to_css_string(),
            fill: fill.to_css_string(),
            visible: true,
            selectable: true,
        }
    }
}

/// The unit produced by the shape factory and consumed by the canvas layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Process-unique identity; never reused or mutated after creation.
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    /// Absent for pure-decoration shapes.
    pub location: Option<LocationCode>,
    /// Formatted rendering of `location` per the configured display format.
    pub display_code: Option<String>,
    pub style: ShapeStyle,
    pub placement: Placement,
    /// Text payload for free-text and area shapes.
    pub text: Option<String>,
    /// Identifier of the area this boundary belongs to.
    pub area_id: Option<String>,
}

impl ShapeRecord {
    /// Full location-code string, if this record carries one.
    pub fn location_num(&self) -> Option<String> {
        self.location.as_ref().map(|loc| loc.full_code())
    }
}

/// Sorts records by full location code, ascending string comparison. Records
/// without a code keep their relative order after coded ones.
pub fn sort_by_location(records: &mut [ShapeRecord]) {
    records.sort_by(|a, b| match (a.location_num(), b.location_num()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
