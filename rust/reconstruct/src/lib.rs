// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan reconstruction from raw CAD geometry
//!
//! This crate turns the unstructured lines and arcs extracted from an imported
//! CAD drawing into a structured floor plan description:
//! 1. Normalize curves and classify line orientation
//! 2. Pair parallel lines one wall thickness apart into wall candidates
//! 3. Merge collinear candidates into wall runs, recording gaps as openings
//! 4. Classify openings as doors or windows (door swing arcs corroborate doors)
//! 5. Aggregate drawing bounds and per-class counts
//!
//! The pipeline is a synchronous batch computation over one drawing. Several
//! drawings can be processed in parallel with [`reconstruct_many`].
//!
//! # Usage
//!
//! ```rust
//! use cadplan_reconstruct::{reconstruct_floor_plan, RawCurve, ReconstructionConfig};
//!
//! let curves = vec![
//!     RawCurve::line(0.0, 0.0, 20.0, 0.0),
//!     RawCurve::line(0.0, 0.875, 20.0, 0.875),
//! ];
//! let plan = reconstruct_floor_plan(&curves, &ReconstructionConfig::default())?;
//! assert_eq!(plan.summary.exterior_wall_count, 1);
//! # Ok::<(), cadplan_reconstruct::Error>(())
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod openings;
pub mod pairing;
pub mod report;
pub mod summary;
pub mod types;

pub use arena::{LineArena, LineId};
pub use config::{LengthUnit, ReconstructionConfig};
pub use error::{Error, Result};
pub use merge::merge_collinear;
pub use normalize::{classify_orientation, normalize, NormalizedGeometry};
pub use openings::classify_openings;
pub use pairing::pair_parallel_lines;
pub use report::FloorPlanReport;
pub use summary::{aggregate, compute_bounds};
pub use types::{
    Bounds, ClassifiedLine, DoorPlacement, FloorPlanResult, FloorPlanSummary, Opening,
    OpeningKind, Orientation, PipelineStats, Point2D, RawArc, RawCurve, RawLine, WallClass,
    WallSegment, WindowPlacement,
};

use rayon::prelude::*;
use tracing::{debug, info};

/// Reconstruct walls and openings from the curves of one drawing.
///
/// Fails only when `config` is rejected. Drawings without usable geometry
/// produce an empty result.
pub fn reconstruct_floor_plan(
    curves: &[RawCurve],
    config: &ReconstructionConfig,
) -> Result<FloorPlanResult> {
    config.validate()?;

    // Step 1: Normalize
    let mut geometry = normalize(curves, config.min_line_length);
    if geometry.lines.is_empty() && geometry.arcs.is_empty() {
        debug!(input_curves = curves.len(), "no usable curves after normalization");
    }

    // Step 2: Pair wall faces
    let candidates = pair_parallel_lines(&mut geometry.lines, config);
    let wall_candidates = candidates.len();

    // Step 3: Collinear merge
    let merged = merge_collinear(candidates, config);
    let mut walls = merged.walls;

    // Step 4: Openings
    let classified = classify_openings(&mut walls, &geometry.arcs, config);

    // Step 5: Aggregate
    let stats = PipelineStats {
        input_curves: geometry.stats.input_curves,
        skipped_degenerate: geometry.stats.skipped_degenerate,
        skipped_short: geometry.stats.skipped_short,
        diagonal_lines: geometry.stats.diagonal_lines,
        wall_candidates,
        merged_walls: walls.len(),
        discarded_short_walls: merged.discarded_short,
        swing_arcs: classified.swing_arcs,
        confirmed_doors: classified.confirmed_doors,
    };
    let result = aggregate(geometry.lines.lines(), geometry.arcs.len(), walls, stats);

    info!(
        lines = result.summary.total_lines,
        arcs = result.summary.total_arcs,
        exterior_walls = result.summary.exterior_wall_count,
        interior_walls = result.summary.interior_wall_count,
        doors = result.summary.door_count,
        windows = result.summary.window_count,
        "floor plan reconstructed"
    );
    Ok(result)
}

/// Reconstruct and convert straight to the wire form.
pub fn reconstruct_report(
    curves: &[RawCurve],
    config: &ReconstructionConfig,
) -> Result<FloorPlanReport> {
    let result = reconstruct_floor_plan(curves, config)?;
    Ok(FloorPlanReport::from_result(&result, config.unit))
}

/// Reconstruct several independent drawings in parallel.
///
/// The configuration is validated once up front; results keep input order.
pub fn reconstruct_many(
    drawings: &[Vec<RawCurve>],
    config: &ReconstructionConfig,
) -> Result<Vec<FloorPlanResult>> {
    config.validate()?;
    drawings
        .par_iter()
        .map(|curves| reconstruct_floor_plan(curves, config))
        .collect()
}
