// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for CAD floor plan reconstruction

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::arena::LineId;

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.to_nalgebra() - self.to_nalgebra()).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A straight curve as delivered by the geometry extractor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawLine {
    pub start: Point2D,
    pub end: Point2D,
}

impl RawLine {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// A circular arc as delivered by the geometry extractor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawArc {
    pub center: Point2D,
    pub radius: f64,
    pub start: Point2D,
    pub end: Point2D,
    /// Arc length reported by the extractor, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_length: Option<f64>,
}

impl RawArc {
    pub fn new(center: Point2D, radius: f64, start: Point2D, end: Point2D) -> Self {
        Self {
            center,
            radius,
            start,
            end,
            arc_length: None,
        }
    }

    /// Arc length, preferring the extractor's value.
    ///
    /// Without a reported length the arc is assumed to sweep counter-clockwise
    /// from `start` to `end`.
    pub fn length(&self) -> f64 {
        match self.arc_length {
            Some(len) if len.is_finite() && len > 0.0 => len,
            _ => self.radius * self.sweep_angle(),
        }
    }

    /// Counter-clockwise sweep from `start` to `end`, in `(0, 2π]`
    pub fn sweep_angle(&self) -> f64 {
        let c = self.center.to_nalgebra();
        let a = self.start.to_nalgebra() - c;
        let b = self.end.to_nalgebra() - c;
        let mut sweep = b.y.atan2(b.x) - a.y.atan2(a.x);
        while sweep <= 0.0 {
            sweep += TAU;
        }
        sweep
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.start.is_finite()
            && self.end.is_finite()
            && self.radius.is_finite()
    }
}

/// Raw input curve, tagged by `kind`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawCurve {
    Line(RawLine),
    Arc(RawArc),
}

impl RawCurve {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        RawCurve::Line(RawLine::new(Point2D::new(x1, y1), Point2D::new(x2, y2)))
    }

    /// Quarter arc of radius `radius` around `(cx, cy)`, starting on the +X axis.
    pub fn quarter_arc(cx: f64, cy: f64, radius: f64) -> Self {
        RawCurve::Arc(RawArc::new(
            Point2D::new(cx, cy),
            radius,
            Point2D::new(cx + radius, cy),
            Point2D::new(cx, cy + radius),
        ))
    }
}

/// Line orientation class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        }
    }
}

/// A retained input line with its orientation class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedLine {
    pub start: Point2D,
    pub end: Point2D,
    pub length: f64,
    pub orientation: Orientation,
}

impl ClassifiedLine {
    /// Coordinate on the perpendicular axis (mean Y for horizontal lines,
    /// mean X for vertical ones).
    pub fn position(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => (self.start.x + self.end.x) / 2.0,
            _ => (self.start.y + self.end.y) / 2.0,
        }
    }

    /// `(min, max)` extent along the line's own axis
    pub fn axis_range(&self) -> (f64, f64) {
        let (a, b) = match self.orientation {
            Orientation::Vertical => (self.start.y, self.end.y),
            _ => (self.start.x, self.end.x),
        };
        (a.min(b), a.max(b))
    }
}

/// Wall thickness class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallClass {
    Exterior,
    Interior,
}

/// Opening kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OpeningKind {
    Door,
    Window,
    Unclassified,
}

/// A gap in a wall run, measured along the wall axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    pub span_start: f64,
    pub span_end: f64,
    pub kind: OpeningKind,
    /// Set when a door swing arc corroborated this opening
    pub swing_confirmed: bool,
}

impl Opening {
    pub fn new(span_start: f64, span_end: f64, kind: OpeningKind) -> Self {
        Self {
            span_start,
            span_end,
            kind,
            swing_confirmed: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.span_end - self.span_start
    }

    pub fn midpoint(&self) -> f64 {
        (self.span_start + self.span_end) / 2.0
    }
}

/// Reconstructed wall piece (axis-aligned)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub centerline_start: Point2D,
    pub centerline_end: Point2D,
    pub thickness_measured: f64,
    pub wall_class: WallClass,
    /// Openings ordered along the wall axis
    pub openings: Vec<Opening>,
    /// Lines this wall was paired from
    pub sources: Vec<LineId>,
}

impl WallSegment {
    /// Build an axis-aligned wall from its perpendicular position and axis extent.
    pub fn axis_aligned(
        orientation: Orientation,
        position: f64,
        axis_start: f64,
        axis_end: f64,
        thickness_measured: f64,
        wall_class: WallClass,
    ) -> Self {
        let (centerline_start, centerline_end) = match orientation {
            Orientation::Vertical => (
                Point2D::new(position, axis_start),
                Point2D::new(position, axis_end),
            ),
            _ => (
                Point2D::new(axis_start, position),
                Point2D::new(axis_end, position),
            ),
        };
        Self {
            orientation,
            centerline_start,
            centerline_end,
            thickness_measured,
            wall_class,
            openings: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn length(&self) -> f64 {
        self.centerline_start.distance_to(&self.centerline_end)
    }

    /// Centerline coordinate on the perpendicular axis
    pub fn position(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.centerline_start.x,
            _ => self.centerline_start.y,
        }
    }

    pub fn axis_start(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.centerline_start.y,
            _ => self.centerline_start.x,
        }
    }

    pub fn axis_end(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.centerline_end.y,
            _ => self.centerline_end.x,
        }
    }

    /// Project a point onto the wall: `(axis coordinate, perpendicular distance)`
    pub fn project(&self, point: &Point2D) -> (f64, f64) {
        let p = point.to_nalgebra();
        let origin = self.centerline_start.to_nalgebra();
        let axis: Vector2<f64> = match self.orientation {
            Orientation::Vertical => Vector2::y(),
            _ => Vector2::x(),
        };
        let offset = p - origin;
        let along = offset.dot(&axis);
        let perpendicular = (offset - axis * along).norm();
        (self.axis_start() + along, perpendicular)
    }

    /// Point on the centerline at the given axis coordinate
    pub fn point_at(&self, axis: f64) -> Point2D {
        match self.orientation {
            Orientation::Vertical => Point2D::new(self.position(), axis),
            _ => Point2D::new(axis, self.position()),
        }
    }

    pub fn total_opening_width(&self) -> f64 {
        self.openings.iter().map(Opening::width).sum()
    }
}

/// Drawing extent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// All-zero extent reported when there is no geometry
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Per-class counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FloorPlanSummary {
    pub total_lines: usize,
    pub total_arcs: usize,
    pub exterior_wall_count: usize,
    pub interior_wall_count: usize,
    pub door_count: usize,
    pub window_count: usize,
}

/// Statistics from the pipeline stages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PipelineStats {
    pub input_curves: usize,
    pub skipped_degenerate: usize,
    pub skipped_short: usize,
    pub diagonal_lines: usize,
    pub wall_candidates: usize,
    pub merged_walls: usize,
    pub discarded_short_walls: usize,
    pub swing_arcs: usize,
    pub confirmed_doors: usize,
}

/// Door placement derived from a wall opening
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DoorPlacement {
    pub center: Point2D,
    pub width: f64,
    pub wall_orientation: Orientation,
    pub swing_confirmed: bool,
}

/// Window placement derived from a wall opening
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowPlacement {
    pub position: Point2D,
    pub width: f64,
    pub wall_orientation: Orientation,
}

/// Complete reconstruction result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPlanResult {
    pub bounds: Bounds,
    pub summary: FloorPlanSummary,
    pub exterior_walls: Vec<WallSegment>,
    pub interior_walls: Vec<WallSegment>,
    pub doors: Vec<DoorPlacement>,
    pub windows: Vec<WindowPlacement>,
    pub stats: PipelineStats,
}

impl FloorPlanResult {
    pub fn is_empty(&self) -> bool {
        self.exterior_walls.is_empty() && self.interior_walls.is_empty()
    }

    /// All walls, exterior first
    pub fn walls(&self) -> impl Iterator<Item = &WallSegment> {
        self.exterior_walls.iter().chain(self.interior_walls.iter())
    }
}
