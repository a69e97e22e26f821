// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node kinds, identity, and the per-node style record.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Stable identity of a node in a [`crate::LayerTree`].
///
/// Ids are never reused within a tree, so a stale handle held across a removal
/// simply stops resolving rather than aliasing a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// The drawable element category of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A plain container grouping other nodes.
    Group,
    /// A rectangle (plot backgrounds).
    Rect,
    /// A stroked path (axis lines).
    Path,
    /// A clip resource living in a definitions container.
    ClipPath,
}

/// A paint value for node fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Explicitly unpainted (`fill: none`).
    None,
    /// A solid color fill.
    Solid(peniko::Color),
}

/// Style attributes attached to a node.
///
/// Color/style *resolution* happens elsewhere; this only stores what the layout
/// subsystem itself sets (background stroke suppression, axis-line hints).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Fill paint, if set.
    pub fill: Option<Paint>,
    /// Stroke width in scene coordinates, if set.
    pub stroke_width: Option<f64>,
    /// Whether the renderer should snap strokes to the pixel grid.
    pub crisp: bool,
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) key: String,
    pub(crate) classes: SmallVec<[String; 2]>,
    pub(crate) style: Style,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}
