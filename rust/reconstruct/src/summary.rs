// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing extent and per-class tallies

use crate::types::{
    Bounds, ClassifiedLine, DoorPlacement, FloorPlanResult, FloorPlanSummary, OpeningKind,
    PipelineStats, WallClass, WallSegment, WindowPlacement,
};

/// Extent over all retained line endpoints, diagonals included.
///
/// Returns [`Bounds::empty`] when there are no lines.
pub fn compute_bounds(lines: &[ClassifiedLine]) -> Bounds {
    if lines.is_empty() {
        return Bounds::empty();
    }

    let mut bounds = Bounds {
        min_x: f64::MAX,
        min_y: f64::MAX,
        max_x: f64::MIN,
        max_y: f64::MIN,
    };
    for point in lines.iter().flat_map(|l| [l.start, l.end]) {
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.max_y = bounds.max_y.max(point.y);
    }
    bounds
}

/// Assemble the final result from classified walls.
pub fn aggregate(
    lines: &[ClassifiedLine],
    arc_count: usize,
    walls: Vec<WallSegment>,
    stats: PipelineStats,
) -> FloorPlanResult {
    let (exterior_walls, interior_walls): (Vec<_>, Vec<_>) = walls
        .into_iter()
        .partition(|w| w.wall_class == WallClass::Exterior);

    let mut doors = Vec::new();
    let mut windows = Vec::new();
    for wall in exterior_walls.iter().chain(interior_walls.iter()) {
        for opening in &wall.openings {
            let center = wall.point_at(opening.midpoint());
            match opening.kind {
                OpeningKind::Door => doors.push(DoorPlacement {
                    center,
                    width: opening.width(),
                    wall_orientation: wall.orientation,
                    swing_confirmed: opening.swing_confirmed,
                }),
                OpeningKind::Window => windows.push(WindowPlacement {
                    position: center,
                    width: opening.width(),
                    wall_orientation: wall.orientation,
                }),
                OpeningKind::Unclassified => {}
            }
        }
    }

    let summary = FloorPlanSummary {
        total_lines: lines.len(),
        total_arcs: arc_count,
        exterior_wall_count: exterior_walls.len(),
        interior_wall_count: interior_walls.len(),
        door_count: doors.len(),
        window_count: windows.len(),
    };

    FloorPlanResult {
        bounds: compute_bounds(lines),
        summary,
        exterior_walls,
        interior_walls,
        doors,
        windows,
        stats,
    }
}
