// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry normalization: orientation classification and curve cleanup

use tracing::debug;

use crate::arena::LineArena;
use crate::types::{ClassifiedLine, Orientation, RawArc, RawCurve, RawLine};

/// A line counts as axis-aligned when its off-axis extent is at most this
/// fraction of its length.
pub const AXIS_RATIO: f64 = 0.05;

/// Relative slack on the axis test so lines built exactly on the ratio stay
/// axis-aligned despite rounding in the length computation.
const AXIS_RATIO_EPSILON: f64 = 1e-9;

/// Shorter curves are treated as zero-length
const DEGENERATE_LENGTH: f64 = 1e-9;

/// Counts from the normalization stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub input_curves: usize,
    pub skipped_degenerate: usize,
    pub skipped_short: usize,
    pub diagonal_lines: usize,
}

/// Retained geometry of one drawing
#[derive(Debug, Clone, Default)]
pub struct NormalizedGeometry {
    pub lines: LineArena,
    pub arcs: Vec<RawArc>,
    pub stats: NormalizeStats,
}

/// Classify a line as horizontal, vertical or diagonal (inclusive boundary).
pub fn classify_orientation(line: &RawLine) -> Orientation {
    let dx = (line.end.x - line.start.x).abs();
    let dy = (line.end.y - line.start.y).abs();
    let limit = line.length() * (AXIS_RATIO + AXIS_RATIO_EPSILON);

    if dy <= limit {
        Orientation::Horizontal
    } else if dx <= limit {
        Orientation::Vertical
    } else {
        Orientation::Diagonal
    }
}

/// Normalize raw curves: drop degenerate and short ones, classify lines.
///
/// Never fails; rejected curves are only counted and logged.
pub fn normalize(curves: &[RawCurve], min_line_length: f64) -> NormalizedGeometry {
    let mut stats = NormalizeStats {
        input_curves: curves.len(),
        ..Default::default()
    };
    let mut lines = Vec::new();
    let mut arcs = Vec::new();

    for (index, curve) in curves.iter().enumerate() {
        match curve {
            RawCurve::Line(line) => {
                if !line.start.is_finite() || !line.end.is_finite() {
                    debug!(index, "skipping line with non-finite coordinates");
                    stats.skipped_degenerate += 1;
                    continue;
                }
                let length = line.length();
                if length < DEGENERATE_LENGTH {
                    debug!(index, "skipping zero-length line");
                    stats.skipped_degenerate += 1;
                    continue;
                }
                if length < min_line_length {
                    stats.skipped_short += 1;
                    continue;
                }

                let orientation = classify_orientation(line);
                if orientation == Orientation::Diagonal {
                    stats.diagonal_lines += 1;
                }
                lines.push(ClassifiedLine {
                    start: line.start,
                    end: line.end,
                    length,
                    orientation,
                });
            }
            RawCurve::Arc(arc) => {
                if !arc.is_finite() || arc.radius <= 0.0 {
                    debug!(index, radius = arc.radius, "skipping degenerate arc");
                    stats.skipped_degenerate += 1;
                    continue;
                }
                let length = arc.length();
                if !length.is_finite() || length < DEGENERATE_LENGTH {
                    debug!(index, "skipping zero-length arc");
                    stats.skipped_degenerate += 1;
                    continue;
                }
                if length < min_line_length {
                    stats.skipped_short += 1;
                    continue;
                }
                arcs.push(*arc);
            }
        }
    }

    debug!(
        lines = lines.len(),
        arcs = arcs.len(),
        degenerate = stats.skipped_degenerate,
        short = stats.skipped_short,
        "normalized geometry"
    );

    NormalizedGeometry {
        lines: LineArena::new(lines),
        arcs,
        stats,
    }
}
