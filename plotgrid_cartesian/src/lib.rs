// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian subplot layout and rendering-layer composition.
//!
//! This crate decides, for an arbitrary set of traces and axes, how many drawable
//! layers must exist, in what nesting and draw order, and how overlaid axes (e.g.
//! dual y-axes sharing an x-axis) share or duplicate those layers. It is built
//! from three re-entrant passes over a shared [`CartesianLayout`] context and a
//! [`plotgrid_core::LayerTree`]:
//!
//! - [`resolve_subplot_order`] classifies declared axis pairs into main subplots
//!   and overlays and fixes the draw order (mains first).
//! - [`draw_framework`] reconciles the persistent per-subplot layer stacks against
//!   that order, keyed by subplot id so surviving subplots keep their container
//!   identity.
//! - [`plot`] sequences the named trace layers each subplot needs, ordered by the
//!   fixed [`LAYER_ORDER`] table, and dispatches to the registered
//!   [`TraceRenderer`]s.
//!
//! Pixel-level drawing, color resolution, and interaction handling are out of
//! scope; renderers hang their content off the layer handles this crate maintains.

#![no_std]

extern crate alloc;

mod axis_id;
mod event_data;
mod frame;
mod geom;
mod layer_order;
mod layout;
mod lifecycle;
mod sequencer;
mod topology;
mod trace;

pub use axis_id::{AxisDim, AxisId, SubplotId};
pub use event_data::{EventData, geo_event_data};
pub use frame::draw_framework;
pub use geom::{Geometry, calc_trace_line_coords, make_blank, make_line, make_polygon};
pub use layer_order::{LAYER_ORDER, rank};
pub use layout::{AxisLayout, CartesianLayout, Subplot};
pub use lifecycle::clean;
pub use sequencer::plot;
pub use topology::resolve_subplot_order;
pub use trace::{
    CalcPoint, CalcTrace, FillMode, OnComplete, OnCompleteFactory, Trace, TraceRegistry,
    TraceRenderer, TransitionOpts, Visibility,
};
