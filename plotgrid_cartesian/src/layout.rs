// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared cartesian layout context.
//!
//! All three passes (topology resolution, frame building, trace-layer sequencing)
//! operate on one [`CartesianLayout`] passed by mutable reference, with single-writer
//! discipline per pass. It owns the axis table, the per-subplot frame records, and
//! the handles of the three layout-global containers (the cartesian layer itself,
//! the drag-capture container, and the clip-definitions container).

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use plotgrid_core::{LayerTree, NodeId, NodeKind};

use crate::axis_id::{AxisId, SubplotId};

/// Layout state of a single axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// The axis identifier.
    pub id: AxisId,
    /// Another axis of the same dimension whose domain this axis shares, making
    /// every subplot built on this axis an overlay. Cleared by topology resolution
    /// when it forms a chain.
    pub overlaying: Option<AxisId>,
    /// Fractional `[0, 1]` span of the plotting area this axis occupies.
    ///
    /// Overwritten during topology resolution for axes that overlay another.
    pub domain: [f64; 2],
}

impl AxisLayout {
    /// Creates an axis spanning the full `[0, 1]` domain, overlaying nothing.
    pub fn new(id: AxisId) -> Self {
        Self {
            id,
            overlaying: None,
            domain: [0.0, 1.0],
        }
    }

    /// Sets the fractional domain.
    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the overlay reference.
    pub fn with_overlaying(mut self, target: AxisId) -> Self {
        self.overlaying = Some(target);
        self
    }
}

/// Per-subplot frame record: classification plus the full set of layer handles.
///
/// Handles are `None` until the first frame-building pass realizes them. On overlay
/// subplots the background, shape/image sublayers, and the `over*` overflow
/// containers stay `None`; overlays render into their main subplot's overflow
/// containers instead.
#[derive(Clone, Debug, Default)]
pub struct Subplot {
    /// Back-reference to the subplot this one overlays; `None` on main subplots.
    pub mainplot: Option<SubplotId>,
    /// Subplots overlaying this one. Populated only on mains, rebuilt every
    /// frame-building pass.
    pub overlays: Vec<SubplotId>,

    /// The subplot's own container group.
    pub plotgroup: Option<NodeId>,
    /// Background rectangle (mains only).
    pub bg: Option<NodeId>,
    /// Shape-annotation sublayer (mains only).
    pub shapelayer: Option<NodeId>,
    /// Image-annotation sublayer (mains only).
    pub imagelayer: Option<NodeId>,
    /// Grid-line layer.
    pub gridlayer: Option<NodeId>,
    /// Host for overlay subplots' grid layers (mains only).
    pub overgrid: Option<NodeId>,
    /// Zero-line layer.
    pub zerolinelayer: Option<NodeId>,
    /// Host for overlay subplots' zero-line layers (mains only).
    pub overzero: Option<NodeId>,
    /// Plot-area layer holding the trace layers.
    pub plot: Option<NodeId>,
    /// Host for overlay subplots' plot-area layers (mains only).
    pub overplot: Option<NodeId>,
    /// X-axis line path.
    pub xlines: Option<NodeId>,
    /// Y-axis line path. On overlays this aliases [`Self::xlines`]; the overlay's
    /// line layers share one path keyed by the subplot id.
    pub ylines: Option<NodeId>,
    /// Host for overlay subplots' axis-line paths (mains only).
    pub overlines: Option<NodeId>,
    /// X-axis label group.
    pub xaxislayer: Option<NodeId>,
    /// Y-axis label group (aliases [`Self::xaxislayer`] on overlays).
    pub yaxislayer: Option<NodeId>,
    /// Host for overlay subplots' axis-label groups (mains only).
    pub overaxes: Option<NodeId>,
    /// Drag-capture layer, parented under the layout-global drag container.
    pub draglayer: Option<NodeId>,
}

/// The cartesian layout context shared by all passes.
#[derive(Debug)]
pub struct CartesianLayout {
    uid: String,
    axes: HashMap<AxisId, AxisLayout>,
    subplots: HashMap<SubplotId, Subplot>,
    declared: Vec<SubplotId>,
    order: Vec<SubplotId>,
    /// Container holding one group per subplot.
    pub cartesian_layer: NodeId,
    /// Layout-global drag-capture container. Lives outside the subplot groups so
    /// every drag surface stacks above all plot content regardless of subplot order.
    pub draggers: NodeId,
    /// Global clip-definitions container.
    pub defs: NodeId,
}

impl CartesianLayout {
    /// Creates a layout context, joining its three global containers under the
    /// tree root.
    pub fn new(uid: impl Into<String>, tree: &mut LayerTree) -> Self {
        let root = tree.root();
        let cartesian_layer = tree.ensure_child(root, NodeKind::Group, "cartesianlayer");
        let draggers = tree.ensure_child(root, NodeKind::Group, "draggers");
        let defs = tree.ensure_child(root, NodeKind::Group, "defs");
        Self {
            uid: uid.into(),
            axes: HashMap::new(),
            subplots: HashMap::new(),
            declared: Vec::new(),
            order: Vec::new(),
            cartesian_layer,
            draggers,
            defs,
        }
    }

    /// The layout-unique id used to namespace clip resources.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Inserts or replaces an axis.
    pub fn insert_axis(&mut self, axis: AxisLayout) {
        self.axes.insert(axis.id, axis);
    }

    /// Looks up an axis.
    pub fn axis(&self, id: AxisId) -> Option<&AxisLayout> {
        self.axes.get(&id)
    }

    /// Looks up an axis mutably.
    pub fn axis_mut(&mut self, id: AxisId) -> Option<&mut AxisLayout> {
        self.axes.get_mut(&id)
    }

    /// Declares a subplot for the given axis pair, creating its frame record on
    /// first declaration. Re-declaring an existing pair is a no-op.
    pub fn declare_subplot(&mut self, x: AxisId, y: AxisId) -> SubplotId {
        let id = SubplotId::new(x, y);
        if !self.declared.contains(&id) {
            self.declared.push(id);
        }
        self.subplots.entry(id).or_default();
        id
    }

    /// Withdraws a subplot declaration. Its frame record and drawable state are
    /// torn down by the next frame-building pass.
    pub fn remove_subplot(&mut self, id: SubplotId) {
        self.declared.retain(|s| *s != id);
    }

    /// Declared subplots, in declaration order.
    pub fn declared(&self) -> &[SubplotId] {
        &self.declared
    }

    /// The resolved draw order from the most recent topology pass: mains first,
    /// then overlays.
    pub fn order(&self) -> &[SubplotId] {
        &self.order
    }

    pub(crate) fn set_order(&mut self, order: Vec<SubplotId>) {
        self.order = order;
    }

    /// Looks up a subplot frame record.
    pub fn subplot(&self, id: SubplotId) -> Option<&Subplot> {
        self.subplots.get(&id)
    }

    /// Looks up a subplot frame record mutably.
    pub fn subplot_mut(&mut self, id: SubplotId) -> Option<&mut Subplot> {
        self.subplots.get_mut(&id)
    }

    /// Ids of all live frame records (declared or awaiting teardown).
    pub fn subplot_ids(&self) -> Vec<SubplotId> {
        self.subplots.keys().copied().collect()
    }

    pub(crate) fn take_subplot(&mut self, id: SubplotId) -> Option<Subplot> {
        self.subplots.remove(&id)
    }

    /// Deterministic key of a subplot's plot-area clip resource in [`Self::defs`].
    pub fn plot_clip_key(&self, id: SubplotId) -> String {
        format!("clip{}{}plot", self.uid, id)
    }

    /// Deterministic key of an axis's shared clip resource in [`Self::defs`].
    pub fn axis_clip_key(&self, axis: AxisId) -> String {
        format!("clip{}{}", self.uid, axis)
    }
}
