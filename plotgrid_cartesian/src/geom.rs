// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry payload assembly.
//!
//! Builds GeoJSON-shaped geometry payloads from calc-point sequences for the trace
//! renderers that consume line/polygon geometry. A trace with `connect_gaps`
//! disabled splits into a new segment after every gap-flagged sample.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::trace::CalcTrace;

/// A geometry payload in standard (GeoJSON-like) shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// One open line.
    LineString(Vec<Point>),
    /// Several open lines.
    MultiLineString(Vec<Vec<Point>>),
    /// One polygon, as a list of rings.
    Polygon(Vec<Vec<Point>>),
    /// Several polygons of one ring each.
    MultiPolygon(Vec<Vec<Vec<Point>>>),
    /// The blank payload (an empty point), drawn as nothing.
    Blank,
}

/// Splits a calc trace into line-segment coordinate runs.
///
/// With `connect_gaps` set on the trace, the result is a single run; otherwise a
/// new run starts after every sample flagged `gap_after`.
pub fn calc_trace_line_coords(calc: &CalcTrace) -> Vec<Vec<Point>> {
    let connect_gaps = calc.trace.connect_gaps;
    let mut coords: Vec<Vec<Point>> = Vec::new();
    let mut line: Vec<Point> = Vec::new();

    for pt in &calc.points {
        line.push(pt.coord);
        if !connect_gaps && pt.gap_after && !line.is_empty() {
            coords.push(core::mem::take(&mut line));
        }
    }
    if !line.is_empty() {
        coords.push(line);
    }
    coords
}

/// Builds a line payload: `LineString` for one run, `MultiLineString` otherwise.
pub fn make_line(mut coords: Vec<Vec<Point>>) -> Geometry {
    match coords.len() {
        0 => Geometry::Blank,
        1 => Geometry::LineString(coords.remove(0)),
        _ => Geometry::MultiLineString(coords),
    }
}

/// Builds a polygon payload: `Polygon` for one ring, `MultiPolygon` (one ring per
/// polygon) otherwise.
pub fn make_polygon(coords: Vec<Vec<Point>>) -> Geometry {
    match coords.len() {
        0 => Geometry::Blank,
        1 => Geometry::Polygon(coords),
        _ => Geometry::MultiPolygon(coords.into_iter().map(|ring| alloc::vec![ring]).collect()),
    }
}

/// The blank payload.
pub fn make_blank() -> Geometry {
    Geometry::Blank
}
