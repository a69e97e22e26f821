// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot teardown and the family-wide cleanup sweep.

extern crate alloc;

use plotgrid_core::LayerTree;

use crate::axis_id::SubplotId;
use crate::layout::CartesianLayout;

/// Tears down one subplot: its container group with all descendants, its
/// drag-capture layer, its plot-area clip resource, and its frame record.
///
/// Per-axis clips are left in place; other subplots referencing the same axis
/// still need them.
pub(crate) fn purge_subplot(layout: &mut CartesianLayout, tree: &mut LayerTree, id: SubplotId) {
    let token = id.token();
    if let Some(group) = tree.find_child(layout.cartesian_layer, &token) {
        tree.remove_subtree(group);
    }
    if let Some(drag) = tree.find_child(layout.draggers, &token) {
        tree.remove_subtree(drag);
    }
    if let Some(clip) = tree.find_child(layout.defs, &layout.plot_clip_key(id)) {
        tree.remove_subtree(clip);
    }
    layout.take_subplot(id);
}

/// The "no cartesian subplots remain" transition.
///
/// Called by the host when the cartesian plot family disappears from the layout
/// entirely: purges every remaining subplot and additionally clears the shared
/// axis-clip resources, which per-subplot teardown never touches.
pub fn clean(layout: &mut CartesianLayout, tree: &mut LayerTree) {
    for id in layout.subplot_ids() {
        purge_subplot(layout, tree, id);
    }
    layout.set_order(alloc::vec::Vec::new());
    tree.remove_children_with_class(layout.defs, "axesclip");
}
