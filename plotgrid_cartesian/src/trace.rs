// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace descriptions, calc-data, and the trace-renderer capability interface.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use plotgrid_core::LayerTree;

use crate::axis_id::{AxisId, SubplotId};
use crate::layout::Subplot;

/// Trace visibility tri-state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Drawn on its subplot.
    Visible,
    /// Not drawn anywhere.
    Hidden,
    /// Listed in the legend but not drawn on the subplot.
    LegendOnly,
}

/// Trace fill modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// No fill.
    None,
    /// Fill to `x = 0`.
    ToZeroX,
    /// Fill to `y = 0`.
    ToZeroY,
    /// Close the trace onto itself.
    ToSelf,
    /// Fill horizontally to the previous trace.
    ToNextX,
    /// Fill vertically to the previous trace.
    ToNextY,
    /// Fill to the previous trace in both dimensions.
    ToNext,
}

impl FillMode {
    /// Whether this fill's geometry depends on the immediately preceding trace
    /// on the same subplot being current.
    pub fn fills_to_next(self) -> bool {
        matches!(self, Self::ToNextX | Self::ToNextY | Self::ToNext)
    }
}

/// Everything the layout subsystem needs to know about one trace.
#[derive(Clone, Debug)]
pub struct Trace {
    /// Global trace index, stable across partial replots.
    pub index: usize,
    /// The x-axis this trace is assigned to.
    pub xaxis: AxisId,
    /// The y-axis this trace is assigned to.
    pub yaxis: AxisId,
    /// Visibility tri-state.
    pub visible: Visibility,
    /// Fill mode, used for fill-dependency chaining.
    pub fill: FillMode,
    /// Name of the registered renderer drawing this trace.
    pub renderer: &'static str,
    /// Whether line geometry bridges gaps instead of splitting at them.
    pub connect_gaps: bool,
}

impl Trace {
    /// The subplot this trace belongs to, via its axis assignment.
    pub fn subplot(&self) -> SubplotId {
        SubplotId::new(self.xaxis, self.yaxis)
    }
}

/// One precomputed sample of a trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalcPoint {
    /// Sample coordinate pair.
    pub coord: Point,
    /// Whether a gap follows this sample.
    pub gap_after: bool,
}

/// Precomputed per-trace data consumed by rendering.
#[derive(Clone, Debug)]
pub struct CalcTrace {
    /// The owning trace.
    pub trace: Trace,
    /// The trace's calc points.
    pub points: Vec<CalcPoint>,
}

/// Options for an animated transition, threaded through to renderers untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionOpts {
    /// Transition duration in milliseconds.
    pub duration: f64,
}

/// A renderer-completion callback, handed out by the factory below.
pub type OnComplete = Box<dyn FnOnce()>;

/// Factory renderers call once per animated draw to obtain a completion callback.
pub type OnCompleteFactory = dyn Fn() -> OnComplete;

/// Capability interface one trace type exposes to the cartesian subsystem.
pub trait TraceRenderer {
    /// Trace type name; the registry key.
    fn name(&self) -> &'static str;

    /// Plot-family discriminator; only `"cartesian"` renderers participate in
    /// this subsystem's dispatch loop.
    fn base_plot(&self) -> &'static str {
        "cartesian"
    }

    /// Named rendering layers this trace type needs, in its preferred order.
    /// Every name should appear in [`crate::layer_order::LAYER_ORDER`].
    fn layers(&self) -> &'static [&'static str];

    /// Draws all of this type's traces on one subplot at once.
    ///
    /// `calc` holds only this renderer's visible traces on this subplot, already
    /// in draw order.
    fn plot(
        &self,
        tree: &mut LayerTree,
        subplot: &Subplot,
        calc: &[&CalcTrace],
        transition: Option<&TransitionOpts>,
        make_on_complete: Option<&OnCompleteFactory>,
    );
}

/// Runtime registry of trace renderers, keyed by trace type name.
///
/// Dispatch iterates in registration order.
#[derive(Default)]
pub struct TraceRegistry {
    renderers: Vec<Box<dyn TraceRenderer>>,
}

impl TraceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderer. Re-registering a name shadows the old entry.
    pub fn register(&mut self, renderer: Box<dyn TraceRenderer>) {
        self.renderers
            .retain(|r| r.name() != renderer.name());
        self.renderers.push(renderer);
    }

    /// Looks up a renderer by trace type name.
    pub fn get(&self, name: &str) -> Option<&dyn TraceRenderer> {
        self.renderers
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    /// Iterates renderers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn TraceRenderer> {
        self.renderers.iter().map(|r| r.as_ref())
    }
}

impl core::fmt::Debug for TraceRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TraceRegistry")
            .field("renderers", &self.renderers.len())
            .finish()
    }
}
