// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed global draw-order table for per-subplot trace layers.
//!
//! Trace renderers declare which named layers they need; the sequencer unions
//! those names per subplot and orders them by this table so, for example, bar
//! geometry always paints beneath scatter lines and points regardless of trace
//! declaration order.

/// Trace-layer names in back-to-front draw order.
pub const LAYER_ORDER: &[&str] = &[
    "imagelayer",
    "heatmaplayer",
    "contourlayer",
    "fills",
    "bars",
    "errorbars",
    "lines",
    "points",
];

/// Rank of a layer name in [`LAYER_ORDER`].
///
/// Unknown names rank before all known ones, so an unrecognized layer paints at
/// the very back rather than on top of everything.
pub fn rank(name: &str) -> usize {
    LAYER_ORDER
        .iter()
        .position(|n| *n == name)
        .map_or(0, |i| i + 1)
}
