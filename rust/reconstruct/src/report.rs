// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire form of a reconstruction result, as consumed by model creation.
//!
//! Lengths stay in the drawing unit except the fields explicitly suffixed
//! with `Inches` or `Feet`.

use serde::{Deserialize, Serialize};

use crate::config::LengthUnit;
use crate::types::{FloorPlanResult, Orientation, Point2D, WallSegment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundsReport {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_lines: usize,
    pub total_arcs: usize,
    pub exterior_wall_count: usize,
    pub interior_wall_count: usize,
    pub door_count: usize,
    pub window_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningReport {
    pub start: f64,
    pub end: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WallReport {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub length: f64,
    pub orientation: Orientation,
    pub thickness_inches: f64,
    pub openings: Vec<OpeningReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoorReport {
    pub center_x: f64,
    pub center_y: f64,
    pub width_inches: f64,
    pub wall_orientation: Orientation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub wall_orientation: Orientation,
    pub position: Point2D,
    pub width_feet: f64,
    pub width_inches: f64,
}

/// Serializable floor plan description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanReport {
    pub bounds: BoundsReport,
    pub summary: SummaryReport,
    pub exterior_walls: Vec<WallReport>,
    pub interior_walls: Vec<WallReport>,
    pub doors: Vec<DoorReport>,
    pub windows: Vec<WindowReport>,
}

impl WallReport {
    fn from_wall(wall: &WallSegment, unit: LengthUnit) -> Self {
        Self {
            start_x: wall.centerline_start.x,
            start_y: wall.centerline_start.y,
            end_x: wall.centerline_end.x,
            end_y: wall.centerline_end.y,
            length: wall.length(),
            orientation: wall.orientation,
            thickness_inches: wall.thickness_measured * unit.inches_per_unit(),
            openings: wall
                .openings
                .iter()
                .map(|o| OpeningReport {
                    start: o.span_start,
                    end: o.span_end,
                    width: o.width(),
                })
                .collect(),
        }
    }
}

impl FloorPlanReport {
    pub fn from_result(result: &FloorPlanResult, unit: LengthUnit) -> Self {
        let inches = unit.inches_per_unit();
        let feet = unit.feet_per_unit();
        let b = &result.bounds;
        let s = &result.summary;

        Self {
            bounds: BoundsReport {
                min_x: b.min_x,
                min_y: b.min_y,
                max_x: b.max_x,
                max_y: b.max_y,
                width: b.width(),
                height: b.height(),
            },
            summary: SummaryReport {
                total_lines: s.total_lines,
                total_arcs: s.total_arcs,
                exterior_wall_count: s.exterior_wall_count,
                interior_wall_count: s.interior_wall_count,
                door_count: s.door_count,
                window_count: s.window_count,
            },
            exterior_walls: result
                .exterior_walls
                .iter()
                .map(|w| WallReport::from_wall(w, unit))
                .collect(),
            interior_walls: result
                .interior_walls
                .iter()
                .map(|w| WallReport::from_wall(w, unit))
                .collect(),
            doors: result
                .doors
                .iter()
                .map(|d| DoorReport {
                    center_x: d.center.x,
                    center_y: d.center.y,
                    width_inches: d.width * inches,
                    wall_orientation: d.wall_orientation,
                })
                .collect(),
            windows: result
                .windows
                .iter()
                .map(|w| WindowReport {
                    wall_orientation: w.wall_orientation,
                    position: w.position,
                    width_feet: w.width * feet,
                    width_inches: w.width * inches,
                })
                .collect(),
        }
    }
}
