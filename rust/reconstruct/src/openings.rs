// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening classification: door swing corroboration and window assignment.
//!
//! Door leaves are drawn with a quarter-circle swing whose center sits on the
//! hinge jamb and whose radius equals the leaf width. An arc in the plausible
//! door radius range, centered on a wall centerline at one of its openings,
//! confirms that opening as a door regardless of its provisional label.
//!
//! Openings still unclassified afterwards are resolved by width: windows on
//! exterior walls, doors on interior walls.

use tracing::debug;

use crate::config::ReconstructionConfig;
use crate::types::{Opening, OpeningKind, RawArc, WallClass, WallSegment};

/// Slack on the opening span test. Hinges sit exactly on a jamb, so the
/// span is closed and only rounding noise is absorbed.
const SPAN_EPSILON: f64 = 1e-6;

/// Counts from the classification stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub swing_arcs: usize,
    pub confirmed_doors: usize,
}

/// Whether an arc's radius is in the door-leaf range
pub fn is_swing_arc(arc: &RawArc, config: &ReconstructionConfig) -> bool {
    arc.radius >= config.min_door_radius && arc.radius <= config.max_door_radius
}

/// Index of the wall whose centerline passes closest to `arc`'s center, with
/// the center's axis coordinate inside the wall extent.
fn nearest_host_wall(walls: &[WallSegment], arc: &RawArc, tolerance: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64, f64)> = None;

    for (i, wall) in walls.iter().enumerate() {
        let (axis, perpendicular) = wall.project(&arc.center);
        if perpendicular > tolerance {
            continue;
        }
        let (lo, hi) = (
            wall.axis_start().min(wall.axis_end()),
            wall.axis_start().max(wall.axis_end()),
        );
        if axis < lo - tolerance || axis > hi + tolerance {
            continue;
        }
        if best.map_or(true, |(_, _, d)| perpendicular < d) {
            best = Some((i, axis, perpendicular));
        }
    }

    best.map(|(i, axis, _)| (i, axis))
}

/// Whether an opening's span covers the axis coordinate of a swing center
fn covers(opening: &Opening, axis: f64) -> bool {
    axis >= opening.span_start - SPAN_EPSILON && axis <= opening.span_end + SPAN_EPSILON
}

/// Refine opening kinds in place. Wall geometry is left untouched.
pub fn classify_openings(
    walls: &mut [WallSegment],
    arcs: &[RawArc],
    config: &ReconstructionConfig,
) -> ClassifyStats {
    let mut stats = ClassifyStats::default();
    let tolerance = config.swing_center_tolerance;

    for arc in arcs.iter().filter(|arc| is_swing_arc(arc, config)) {
        stats.swing_arcs += 1;

        let Some((wall_index, axis)) = nearest_host_wall(walls, arc, tolerance) else {
            continue;
        };
        for opening in walls[wall_index]
            .openings
            .iter_mut()
            .filter(|o| covers(o, axis))
        {
            if !opening.swing_confirmed {
                stats.confirmed_doors += 1;
            }
            opening.kind = OpeningKind::Door;
            opening.swing_confirmed = true;
        }
    }

    for wall in walls.iter_mut() {
        let wall_class = wall.wall_class;
        for opening in wall
            .openings
            .iter_mut()
            .filter(|o| o.kind == OpeningKind::Unclassified)
        {
            let width = opening.width();
            opening.kind = match wall_class {
                WallClass::Exterior
                    if width >= config.window_min_width && width <= config.window_max_width =>
                {
                    OpeningKind::Window
                }
                WallClass::Interior
                    if width >= config.min_door_radius && width <= config.max_door_radius =>
                {
                    OpeningKind::Door
                }
                _ => OpeningKind::Unclassified,
            };
        }
    }

    debug!(
        swing_arcs = stats.swing_arcs,
        confirmed_doors = stats.confirmed_doors,
        "classified openings"
    );
    stats
}
