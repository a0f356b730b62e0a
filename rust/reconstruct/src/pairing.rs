// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parallel-pair matching: the two faces of a wall become one candidate segment.
//!
//! CAD drawings represent a wall as two parallel lines a wall thickness apart.
//! For each axis-aligned orientation the lines are sorted by their
//! perpendicular coordinate and every unconsumed line scans forward for a
//! partner whose distance matches one of the configured thickness classes.
//!
//! The forward scan stops at the first line farther away than the largest
//! thickness plus tolerance. Because the list is sorted nothing beyond that
//! point can match, and this bound also keeps the search linear for the
//! typical drawing where walls are sparse relative to hatch and detail lines.

use tracing::debug;

use crate::arena::{LineArena, LineId};
use crate::config::ReconstructionConfig;
use crate::types::{Orientation, WallClass, WallSegment};

/// Match a measured face-to-face gap against the thickness classes.
///
/// Exterior is tested first, so a gap inside both bands resolves to exterior.
pub fn match_thickness(gap: f64, config: &ReconstructionConfig) -> Option<WallClass> {
    if (gap - config.exterior_wall_thickness).abs() <= config.tolerance {
        Some(WallClass::Exterior)
    } else if (gap - config.interior_wall_thickness).abs() <= config.tolerance {
        Some(WallClass::Interior)
    } else {
        None
    }
}

/// Overlapping interval of two ranges, if any
fn overlap(a: (f64, f64), b: (f64, f64)) -> Option<(f64, f64)> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (end > start).then_some((start, end))
}

/// Pair parallel lines of both axis orientations into candidate walls.
///
/// Consumed lines are recorded in `arena`; each line joins at most one pair.
pub fn pair_parallel_lines(
    arena: &mut LineArena,
    config: &ReconstructionConfig,
) -> Vec<WallSegment> {
    let mut candidates = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let before = candidates.len();
        pair_orientation(arena, orientation, config, &mut candidates);
        debug!(
            orientation = orientation.label(),
            candidates = candidates.len() - before,
            "paired parallel lines"
        );
    }
    candidates
}

fn pair_orientation(
    arena: &mut LineArena,
    orientation: Orientation,
    config: &ReconstructionConfig,
    out: &mut Vec<WallSegment>,
) {
    let mut sorted: Vec<(LineId, f64)> = arena
        .ids_with_orientation(orientation)
        .into_iter()
        .map(|id| (id, arena.get(id).position()))
        .collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let max_gap = config.max_pair_gap();

    for i in 0..sorted.len() {
        let (id_i, pos_i) = sorted[i];
        if arena.is_consumed(id_i) {
            continue;
        }
        let range_i = arena.get(id_i).axis_range();

        for &(id_j, pos_j) in &sorted[i + 1..] {
            let gap = pos_j - pos_i;
            if gap > max_gap {
                break;
            }
            if arena.is_consumed(id_j) {
                continue;
            }

            let Some(wall_class) = match_thickness(gap, config) else {
                continue;
            };

            // Offset parallels (hatching, unrelated detail lines) share too little extent
            let Some((span_start, span_end)) = overlap(range_i, arena.get(id_j).axis_range())
            else {
                continue;
            };
            if span_end - span_start < config.min_overlap {
                continue;
            }

            arena.consume(id_i);
            arena.consume(id_j);

            let mut wall = WallSegment::axis_aligned(
                orientation,
                (pos_i + pos_j) / 2.0,
                span_start,
                span_end,
                gap,
                wall_class,
            );
            wall.sources = vec![id_i, id_j];
            out.push(wall);
            break;
        }
    }
}
