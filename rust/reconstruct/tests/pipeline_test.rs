// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end reconstruction of synthetic drawings.

mod common;

use approx::assert_relative_eq;
use cadplan_reconstruct::{
    reconstruct_floor_plan, reconstruct_many, reconstruct_report, Bounds, OpeningKind,
    Orientation, Point2D, RawCurve, ReconstructionConfig, WallClass,
};
use common::synthetic_plan::{exterior_run, room_row, single_room_plan};

fn assert_point(point: Point2D, x: f64, y: f64) {
    assert_relative_eq!(point.x, x, epsilon = 1e-9);
    assert_relative_eq!(point.y, y, epsilon = 1e-9);
}

#[test]
fn test_door_gap_in_exterior_wall() {
    let curves = exterior_run(&[(0.0, 20.0), (25.0, 40.0)]);
    let plan = reconstruct_floor_plan(&curves, &ReconstructionConfig::default()).unwrap();

    assert_eq!(plan.summary.exterior_wall_count, 1);
    assert_eq!(plan.summary.interior_wall_count, 0);
    let wall = &plan.exterior_walls[0];
    assert_eq!(wall.wall_class, WallClass::Exterior);
    assert_relative_eq!(wall.length(), 40.0);
    assert_relative_eq!(wall.thickness_measured, 0.875);
    assert_eq!(wall.openings.len(), 1);
    assert_relative_eq!(wall.openings[0].span_start, 20.0);
    assert_relative_eq!(wall.openings[0].span_end, 25.0);
    assert_eq!(wall.openings[0].kind, OpeningKind::Door);
    assert_eq!(plan.summary.door_count, 1);
    assert_eq!(plan.summary.window_count, 0);
}

#[test]
fn test_narrow_gap_becomes_window() {
    let curves = exterior_run(&[(0.0, 20.0), (23.0, 40.0)]);
    let plan = reconstruct_floor_plan(&curves, &ReconstructionConfig::default()).unwrap();

    assert_eq!(plan.exterior_walls[0].openings[0].kind, OpeningKind::Window);
    assert_eq!(plan.summary.window_count, 1);
    assert_relative_eq!(plan.windows[0].width, 3.0);
    assert_point(plan.windows[0].position, 21.5, 0.4375);
}

#[test]
fn test_gap_below_window_range_stays_unclassified() {
    let mut config = ReconstructionConfig::default();
    config.window_min_width = 3.5;

    let curves = exterior_run(&[(0.0, 20.0), (23.0, 40.0)]);
    let plan = reconstruct_floor_plan(&curves, &config).unwrap();

    assert_eq!(plan.exterior_walls[0].openings[0].kind, OpeningKind::Unclassified);
    assert_eq!(plan.summary.door_count, 0);
    assert_eq!(plan.summary.window_count, 0);
}

#[test]
fn test_swing_arc_confirms_only_its_own_opening() {
    let mut config = ReconstructionConfig::default();
    config.min_overlap = 0.25;

    let mut curves = exterior_run(&[(0.0, 10.0), (13.0, 13.5), (16.5, 40.0)]);
    curves.push(RawCurve::quarter_arc(13.0, 0.875, 3.0));
    let plan = reconstruct_floor_plan(&curves, &config).unwrap();

    let openings = &plan.exterior_walls[0].openings;
    assert_eq!(openings.len(), 2);
    assert_eq!(openings[0].kind, OpeningKind::Door);
    assert!(openings[0].swing_confirmed);
    assert_eq!(openings[1].kind, OpeningKind::Window);
    assert!(!openings[1].swing_confirmed);
    assert_eq!(plan.summary.door_count, 1);
    assert_eq!(plan.summary.window_count, 1);
}

#[test]
fn test_empty_drawing() {
    let plan = reconstruct_floor_plan(&[], &ReconstructionConfig::default()).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.bounds, Bounds::empty());
    assert_eq!(plan.summary.total_lines, 0);
    assert_eq!(plan.summary.total_arcs, 0);
    assert_eq!(plan.summary.door_count, 0);
}

#[test]
fn test_single_room() {
    let plan = reconstruct_floor_plan(&single_room_plan(), &ReconstructionConfig::default()).unwrap();

    assert_eq!(plan.summary.total_lines, 23);
    assert_eq!(plan.summary.total_arcs, 2);
    assert_eq!(plan.summary.exterior_wall_count, 4);
    assert_eq!(plan.summary.interior_wall_count, 1);
    assert_eq!(plan.summary.door_count, 2);
    assert_eq!(plan.summary.window_count, 2);

    assert_eq!(plan.stats.skipped_degenerate, 1);
    assert_eq!(plan.stats.skipped_short, 1);
    assert_eq!(plan.stats.diagonal_lines, 1);
    assert_eq!(plan.stats.wall_candidates, 9);
    assert_eq!(plan.stats.merged_walls, 5);
    assert_eq!(plan.stats.swing_arcs, 1);
    assert_eq!(plan.stats.confirmed_doors, 1);

    assert_eq!(plan.bounds.min_x, 0.0);
    assert_eq!(plan.bounds.min_y, 0.0);
    assert_eq!(plan.bounds.max_x, 40.0);
    assert_eq!(plan.bounds.max_y, 30.0);

    // South, north, west, east
    let south = &plan.exterior_walls[0];
    assert_eq!(south.orientation, Orientation::Horizontal);
    assert_relative_eq!(south.position(), 0.4375);
    assert_relative_eq!(south.axis_start(), 0.875);
    assert_relative_eq!(south.axis_end(), 39.125);
    let kinds: Vec<_> = south.openings.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, vec![OpeningKind::Door, OpeningKind::Window]);

    let north = &plan.exterior_walls[1];
    assert_relative_eq!(north.position(), 29.5625);
    assert!(north.openings.is_empty());

    let west = &plan.exterior_walls[2];
    assert_eq!(west.orientation, Orientation::Vertical);
    assert_eq!(west.openings.len(), 1);
    assert_eq!(west.openings[0].kind, OpeningKind::Window);

    let interior = &plan.interior_walls[0];
    assert_relative_eq!(interior.position(), 20.0);
    assert_relative_eq!(interior.thickness_measured, 0.375);
    assert!(interior.openings[0].swing_confirmed);

    assert_point(plan.doors[0].center, 12.5, 0.4375);
    assert!(!plan.doors[0].swing_confirmed);
    assert_point(plan.doors[1].center, 20.0, 21.5);
    assert!(plan.doors[1].swing_confirmed);
    assert_point(plan.windows[1].position, 0.4375, 13.5);
}

#[test]
fn test_every_wall_face_used_once() {
    let plan = reconstruct_floor_plan(&single_room_plan(), &ReconstructionConfig::default()).unwrap();
    let mut sources: Vec<usize> = plan.walls().flat_map(|w| w.sources.iter().map(|id| id.0)).collect();
    let count = sources.len();
    sources.sort_unstable();
    sources.dedup();
    assert_eq!(sources.len(), count);
    assert_eq!(count, 18);
}

#[test]
fn test_openings_inside_wall_extent() {
    let plan = reconstruct_floor_plan(&single_room_plan(), &ReconstructionConfig::default()).unwrap();
    for wall in plan.walls() {
        for opening in &wall.openings {
            assert!(opening.span_start >= wall.axis_start());
            assert!(opening.span_end <= wall.axis_end());
            assert!(opening.width() > 0.0);
        }
    }
}

#[test]
fn test_rooms_far_apart_stay_separate() {
    let plan = reconstruct_floor_plan(&room_row(3), &ReconstructionConfig::default()).unwrap();
    assert_eq!(plan.summary.exterior_wall_count, 12);
    assert_eq!(plan.summary.interior_wall_count, 3);
    assert_eq!(plan.summary.door_count, 6);
    assert_eq!(plan.summary.window_count, 6);
    assert_eq!(plan.bounds.max_x, 160.0);
}

#[test]
fn test_many_matches_sequential() {
    let config = ReconstructionConfig::default();
    let drawings = vec![single_room_plan(), room_row(2), Vec::new()];

    let batch = reconstruct_many(&drawings, &config).unwrap();
    for (curves, result) in drawings.iter().zip(&batch) {
        let single = reconstruct_floor_plan(curves, &config).unwrap();
        assert_eq!(result.summary, single.summary);
        assert_eq!(result.bounds, single.bounds);
    }
}

#[test]
fn test_rejected_config_fails_batch() {
    let config = ReconstructionConfig::default().with_tolerance(-0.1);
    assert!(reconstruct_many(&[single_room_plan()], &config).is_err());
}

#[test]
fn test_report_from_json_curves() {
    let input = r#"[
        {"kind": "line", "start": {"x": 0.0, "y": 0.0}, "end": {"x": 20.0, "y": 0.0}},
        {"kind": "line", "start": {"x": 25.0, "y": 0.0}, "end": {"x": 40.0, "y": 0.0}},
        {"kind": "line", "start": {"x": 0.0, "y": 0.875}, "end": {"x": 20.0, "y": 0.875}},
        {"kind": "line", "start": {"x": 25.0, "y": 0.875}, "end": {"x": 40.0, "y": 0.875}},
        {"kind": "arc", "center": {"x": 20.0, "y": 0.4375}, "radius": 5.0,
         "start": {"x": 25.0, "y": 0.4375}, "end": {"x": 20.0, "y": 5.4375}}
    ]"#;
    let curves: Vec<RawCurve> = serde_json::from_str(input).unwrap();

    let report = reconstruct_report(&curves, &ReconstructionConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["totalLines"], 4);
    assert_eq!(json["summary"]["totalArcs"], 1);
    assert_eq!(json["exteriorWalls"][0]["thicknessInches"], 10.5);
    assert_eq!(json["exteriorWalls"][0]["length"], 40.0);
    assert_eq!(json["doors"][0]["widthInches"], 60.0);
    assert_eq!(json["doors"][0]["centerX"], 22.5);
    assert_eq!(json["bounds"]["width"], 40.0);
}
