// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synthetic CAD drawings in feet.

#![allow(dead_code)]

use cadplan_reconstruct::RawCurve;

/// Horizontal face at `y`, one line per `(x_start, x_end)` span.
pub fn horizontal_face(curves: &mut Vec<RawCurve>, y: f64, spans: &[(f64, f64)]) {
    for &(a, b) in spans {
        curves.push(RawCurve::line(a, y, b, y));
    }
}

/// Vertical face at `x`, one line per `(y_start, y_end)` span.
pub fn vertical_face(curves: &mut Vec<RawCurve>, x: f64, spans: &[(f64, f64)]) {
    for &(a, b) in spans {
        curves.push(RawCurve::line(x, a, x, b));
    }
}

/// Two horizontal wall faces at y=0 and y=0.875 (10.5" exterior wall).
pub fn exterior_run(spans: &[(f64, f64)]) -> Vec<RawCurve> {
    let mut curves = Vec::new();
    horizontal_face(&mut curves, 0.0, spans);
    horizontal_face(&mut curves, 0.875, spans);
    curves
}

/// One 40' x 30' room:
///
/// - south exterior wall with a 5' door [10, 15] and a 3' window [25, 28]
/// - west exterior wall with a 3' window [12, 15]
/// - north and east exterior walls solid
/// - interior wall on x=20 with a 3' door [20, 23] and its swing arc
/// - clutter: a diagonal hatch line, a bed outline, a sink arc,
///   a NaN line and a sub-threshold stub
pub fn single_room_plan() -> Vec<RawCurve> {
    let mut curves = Vec::new();

    // South
    horizontal_face(&mut curves, 0.0, &[(0.0, 10.0), (15.0, 25.0), (28.0, 40.0)]);
    horizontal_face(&mut curves, 0.875, &[(0.875, 10.0), (15.0, 25.0), (28.0, 39.125)]);
    // North
    horizontal_face(&mut curves, 30.0, &[(0.0, 40.0)]);
    horizontal_face(&mut curves, 29.125, &[(0.875, 39.125)]);
    // West
    vertical_face(&mut curves, 0.0, &[(0.0, 12.0), (15.0, 30.0)]);
    vertical_face(&mut curves, 0.875, &[(0.875, 12.0), (15.0, 29.125)]);
    // East
    vertical_face(&mut curves, 40.0, &[(0.0, 30.0)]);
    vertical_face(&mut curves, 39.125, &[(0.875, 29.125)]);
    // Interior partition
    vertical_face(&mut curves, 19.8125, &[(0.875, 20.0), (23.0, 29.125)]);
    vertical_face(&mut curves, 20.1875, &[(0.875, 20.0), (23.0, 29.125)]);
    curves.push(RawCurve::quarter_arc(20.0, 20.0, 3.0));

    // Clutter
    curves.push(RawCurve::line(5.0, 5.0, 8.0, 8.0));
    horizontal_face(&mut curves, 10.0, &[(30.0, 34.0)]);
    horizontal_face(&mut curves, 16.0, &[(30.0, 34.0)]);
    vertical_face(&mut curves, 30.0, &[(10.0, 16.0)]);
    vertical_face(&mut curves, 34.0, &[(10.0, 16.0)]);
    curves.push(RawCurve::quarter_arc(36.0, 25.0, 0.5));
    curves.push(RawCurve::line(f64::NAN, 3.0, 4.0, 3.0));
    curves.push(RawCurve::line(2.0, 2.0, 2.2, 2.0));

    curves
}

/// A row of `rooms` single-room plans shifted along X, for load tests.
pub fn room_row(rooms: usize) -> Vec<RawCurve> {
    let base = single_room_plan();
    let mut curves = Vec::with_capacity(base.len() * rooms);
    for i in 0..rooms {
        let dx = i as f64 * 60.0;
        curves.extend(base.iter().map(|curve| shift(curve, dx)));
    }
    curves
}

fn shift(curve: &RawCurve, dx: f64) -> RawCurve {
    let mut curve = *curve;
    match &mut curve {
        RawCurve::Line(line) => {
            line.start.x += dx;
            line.end.x += dx;
        }
        RawCurve::Arc(arc) => {
            arc.center.x += dx;
            arc.start.x += dx;
            arc.end.x += dx;
        }
    }
    curve
}
