// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collinear merge of wall candidates into continuous wall runs.
//!
//! A wall interrupted by doors and windows is drawn as several disjoint pairs
//! of parallel lines, so pairing yields one candidate per solid piece. This
//! module fuses candidates sharing a centerline back into one run and records
//! each interruption as an [`Opening`].
//!
//! Candidates are grouped by orientation, thickness class and centerline
//! position snapped to a coarse grid (absorbing survey noise). Within a group,
//! candidates are walked in axis order:
//!
//! | gap to running end                  | action                          |
//! |-------------------------------------|---------------------------------|
//! | `gap <= minOpeningGap`              | bridge, no opening              |
//! | `minOpeningGap < gap <= maxMergeGap`| record opening, extend run      |
//! | `gap > maxMergeGap`                 | close run, start a new one      |
//!
//! A gap beyond `maxMergeGap` is where a wall run legitimately ends; the next
//! candidate on that line belongs to a different wall.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::ReconstructionConfig;
use crate::types::{Opening, OpeningKind, Orientation, WallClass, WallSegment};

/// Grouping key: candidates with equal keys are nominally on one wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct CenterlineKey {
    orientation: Orientation,
    wall_class: WallClass,
    cell: i64,
}

impl CenterlineKey {
    fn of(wall: &WallSegment, snap: f64) -> Self {
        Self {
            orientation: wall.orientation,
            wall_class: wall.wall_class,
            cell: (wall.position() / snap).round() as i64,
        }
    }
}

/// Result of the merge stage
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Merged walls, ordered by orientation, class, centerline and axis start
    pub walls: Vec<WallSegment>,
    /// Finished runs dropped for being shorter than the minimum wall length
    pub discarded_short: usize,
}

/// Provisional kind of a new gap opening; narrow gaps await the classifier.
pub fn provisional_kind(width: f64, config: &ReconstructionConfig) -> OpeningKind {
    if width >= config.door_width_threshold {
        OpeningKind::Door
    } else {
        OpeningKind::Unclassified
    }
}

/// Merge collinear candidates into wall runs with openings.
///
/// Running this on its own output returns the same walls.
pub fn merge_collinear(candidates: Vec<WallSegment>, config: &ReconstructionConfig) -> MergeOutcome {
    let mut groups: FxHashMap<CenterlineKey, Vec<WallSegment>> = FxHashMap::default();
    for wall in candidates {
        groups
            .entry(CenterlineKey::of(&wall, config.centerline_snap))
            .or_default()
            .push(wall);
    }

    let mut keys: Vec<CenterlineKey> = groups.keys().copied().collect();
    keys.sort();

    let mut outcome = MergeOutcome::default();
    for key in keys {
        let Some(mut group) = groups.remove(&key) else {
            continue;
        };
        group.sort_by(|a, b| {
            a.axis_start()
                .total_cmp(&b.axis_start())
                .then(a.axis_end().total_cmp(&b.axis_end()))
        });

        for run in split_runs(group, config) {
            let wall = run.finish();
            if wall.length() < config.min_wall_length {
                outcome.discarded_short += 1;
                continue;
            }
            outcome.walls.push(wall);
        }
    }

    debug!(
        walls = outcome.walls.len(),
        discarded_short = outcome.discarded_short,
        "merged collinear candidates"
    );
    outcome
}

/// Walk one axis-sorted group and cut it into runs.
fn split_runs(group: Vec<WallSegment>, config: &ReconstructionConfig) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;

    for wall in group {
        let Some(mut run) = current.take() else {
            current = Some(Run::start(wall));
            continue;
        };

        let gap = wall.axis_start() - run.end;
        if gap > config.max_merge_gap {
            runs.push(run);
            current = Some(Run::start(wall));
            continue;
        }

        let opening = (gap > config.min_opening_gap)
            .then(|| Opening::new(run.end, wall.axis_start(), provisional_kind(gap, config)));
        run.absorb(wall, opening);
        current = Some(run);
    }

    runs.extend(current);
    runs
}

/// A wall run under construction
struct Run {
    members: Vec<WallSegment>,
    gap_openings: Vec<Opening>,
    end: f64,
}

impl Run {
    fn start(wall: WallSegment) -> Self {
        Self {
            end: wall.axis_end(),
            members: vec![wall],
            gap_openings: Vec::new(),
        }
    }

    fn absorb(&mut self, wall: WallSegment, opening: Option<Opening>) {
        self.gap_openings.extend(opening);
        self.end = self.end.max(wall.axis_end());
        self.members.push(wall);
    }

    fn finish(mut self) -> WallSegment {
        if self.members.len() == 1 {
            return self.members.remove(0);
        }

        let first = &self.members[0];
        let (orientation, wall_class) = (first.orientation, first.wall_class);
        let start = first.axis_start();

        // Length-weighted centerline and thickness
        let mut weight = 0.0;
        let mut position = 0.0;
        let mut thickness = 0.0;
        for member in &self.members {
            let w = member.length();
            weight += w;
            position += member.position() * w;
            thickness += member.thickness_measured * w;
        }
        let (position, thickness) = if weight > 0.0 {
            (position / weight, thickness / weight)
        } else {
            (first.position(), first.thickness_measured)
        };

        let mut wall =
            WallSegment::axis_aligned(orientation, position, start, self.end, thickness, wall_class);

        let mut openings = self.gap_openings;
        for member in self.members {
            openings.extend(member.openings);
            wall.sources.extend(member.sources);
        }
        openings.sort_by(|a, b| a.span_start.total_cmp(&b.span_start));
        wall.openings = openings;
        wall
    }
}
