// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-point event-data merging for hover/click emission.

use kurbo::Point;

/// An event record under assembly.
///
/// The host populates the generic fields (curve/point numbers) before handing the
/// record to per-trace mergers, which only ever add fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventData {
    /// Index of the trace the event belongs to.
    pub curve_number: usize,
    /// Index of the sample within the trace.
    pub point_number: usize,
    /// Longitude of the sample, for geographic traces.
    pub lon: Option<f64>,
    /// Latitude of the sample, for geographic traces.
    pub lat: Option<f64>,
    /// Location identifier; geographic traces without named regions fall back to
    /// the longitude.
    pub location: Option<f64>,
}

/// Merges a geographic sample's fields into an existing record.
///
/// Only `lon`, `lat`, and `location` are written; everything already on the
/// record is preserved.
pub fn geo_event_data(out: &mut EventData, coord: Point) {
    out.lon = Some(coord.x);
    out.lat = Some(coord.y);
    out.location = Some(coord.x);
}
