// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame building: realizing/reconciling the persistent per-subplot layer stacks.
//!
//! [`draw_framework`] is re-entrant: run against already-correct state it creates
//! no nodes and removes none. Subplot containers are keyed by subplot id, so an
//! unchanged subplot keeps its node identity across passes and only its order in
//! the cartesian layer can move.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use plotgrid_core::{LayerTree, NodeId, NodeKind, Paint};

use crate::axis_id::SubplotId;
use crate::layout::CartesianLayout;
use crate::lifecycle::purge_subplot;
use crate::topology::resolve_subplot_order;

/// Resolves topology and reconciles the full subplot layer tree.
///
/// In order: tears down frame records absent from the new resolved order, joins one
/// group per surviving/entering subplot under the cartesian layer (mains first,
/// then overlays), realizes each subplot's layer stack, and finally drops overlay
/// layers orphaned inside the mains' overflow containers.
pub fn draw_framework(layout: &mut CartesianLayout, tree: &mut LayerTree) {
    let order = resolve_subplot_order(layout);

    let keep: HashSet<SubplotId> = order.iter().copied().collect();
    for id in layout.subplot_ids() {
        if !keep.contains(&id) {
            purge_subplot(layout, tree, id);
        }
    }

    let tokens: Vec<String> = order.iter().map(SubplotId::token).collect();
    let token_refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let groups = tree.reconcile_children(
        layout.cartesian_layer,
        NodeKind::Group,
        "subplot",
        &token_refs,
    );

    for (subplot, group) in order.iter().copied().zip(groups) {
        make_subplot_layer(layout, tree, subplot, group);
    }

    // A withdrawn overlay leaves keyed children behind in its main's overflow
    // containers; drop everything not owned by a live overlay.
    for subplot in order.iter().copied() {
        let Some(sp) = layout.subplot(subplot) else {
            continue;
        };
        if sp.mainplot.is_some() {
            continue;
        }
        let live: HashSet<String> = sp.overlays.iter().map(SubplotId::token).collect();
        let hosts = [
            sp.overgrid,
            sp.overzero,
            sp.overplot,
            sp.overlines,
            sp.overaxes,
        ];
        for host in hosts.into_iter().flatten() {
            tree.retain_children(host, |key| live.contains(key));
        }
    }
}

fn make_subplot_layer(
    layout: &mut CartesianLayout,
    tree: &mut LayerTree,
    subplot: SubplotId,
    group: NodeId,
) {
    let token = subplot.token();
    let mainplot = layout.subplot(subplot).and_then(|sp| sp.mainplot);

    match mainplot {
        None => make_main_layers(layout, tree, subplot, group),
        Some(main) => make_overlay_layers(layout, tree, subplot, main, group),
    }

    // Common to mains and overlays.
    let (xlines, ylines) = layout
        .subplot(subplot)
        .map_or((None, None), |sp| (sp.xlines, sp.ylines));
    for lines in [xlines, ylines].into_iter().flatten() {
        tree.set_fill(lines, Paint::None);
        tree.set_crisp(lines, true);
    }

    let draglayer = tree.ensure_child(layout.draggers, NodeKind::Group, &token);
    if let Some(sp) = layout.subplot_mut(subplot) {
        sp.draglayer = Some(draglayer);
    }

    // Clip resources: one private plot-area clip per subplot, plus shared per-axis
    // clips tagged for the family-wide sweep in `clean`.
    let plot_clip_key = layout.plot_clip_key(subplot);
    tree.ensure_child(layout.defs, NodeKind::ClipPath, &plot_clip_key);
    for axis in [subplot.x, subplot.y] {
        let key = layout.axis_clip_key(axis);
        let clip = tree.ensure_child(layout.defs, NodeKind::ClipPath, &key);
        tree.add_class(clip, "axesclip");
    }
}

fn make_main_layers(
    layout: &mut CartesianLayout,
    tree: &mut LayerTree,
    subplot: SubplotId,
    group: NodeId,
) {
    let bg = tree.ensure_child(group, NodeKind::Rect, "bg");
    tree.set_stroke_width(bg, 0.0);

    let back = tree.ensure_child(group, NodeKind::Group, "layer-subplot");
    let shapelayer = tree.ensure_child(back, NodeKind::Group, "shapelayer");
    let imagelayer = tree.ensure_child(back, NodeKind::Group, "imagelayer");

    let gridlayer = tree.ensure_child(group, NodeKind::Group, "gridlayer");
    let overgrid = tree.ensure_child(group, NodeKind::Group, "overgrid");

    let zerolinelayer = tree.ensure_child(group, NodeKind::Group, "zerolinelayer");
    let overzero = tree.ensure_child(group, NodeKind::Group, "overzero");

    let plot = tree.ensure_child(group, NodeKind::Group, "plot");
    let overplot = tree.ensure_child(group, NodeKind::Group, "overplot");

    let xlines = tree.ensure_child(group, NodeKind::Path, "xlines");
    let ylines = tree.ensure_child(group, NodeKind::Path, "ylines");
    let overlines = tree.ensure_child(group, NodeKind::Group, "overlines");

    let xaxislayer = tree.ensure_child(group, NodeKind::Group, "xaxislayer");
    let yaxislayer = tree.ensure_child(group, NodeKind::Group, "yaxislayer");
    let overaxes = tree.ensure_child(group, NodeKind::Group, "overaxes");

    let Some(sp) = layout.subplot_mut(subplot) else {
        return;
    };
    sp.plotgroup = Some(group);
    // Repopulated as this pass reaches the overlays.
    sp.overlays.clear();
    sp.bg = Some(bg);
    sp.shapelayer = Some(shapelayer);
    sp.imagelayer = Some(imagelayer);
    sp.gridlayer = Some(gridlayer);
    sp.overgrid = Some(overgrid);
    sp.zerolinelayer = Some(zerolinelayer);
    sp.overzero = Some(overzero);
    sp.plot = Some(plot);
    sp.overplot = Some(overplot);
    sp.xlines = Some(xlines);
    sp.ylines = Some(ylines);
    sp.overlines = Some(overlines);
    sp.xaxislayer = Some(xaxislayer);
    sp.yaxislayer = Some(yaxislayer);
    sp.overaxes = Some(overaxes);
}

fn make_overlay_layers(
    layout: &mut CartesianLayout,
    tree: &mut LayerTree,
    subplot: SubplotId,
    main: SubplotId,
    group: NodeId,
) {
    // Overlays have no background and no shape/image sublayer; everything else
    // joins the main subplot's overflow containers, keyed by this subplot's id so
    // multiple overlays nest without collision.
    let hosts = layout.subplot(main).map(|m| {
        (
            m.overgrid, m.overzero, m.overplot, m.overlines, m.overaxes,
        )
    });
    let Some((
        Some(overgrid),
        Some(overzero),
        Some(overplot),
        Some(overlines),
        Some(overaxes),
    )) = hosts
    else {
        debug_assert!(
            false,
            "overlay subplot references a main without realized layers"
        );
        return;
    };

    if let Some(m) = layout.subplot_mut(main) {
        m.overlays.push(subplot);
    }

    let token = subplot.token();
    let gridlayer = tree.ensure_child(overgrid, NodeKind::Group, &token);
    let zerolinelayer = tree.ensure_child(overzero, NodeKind::Group, &token);
    let plot = tree.ensure_child(overplot, NodeKind::Group, &token);
    // An overlay's x- and y- line layers share one path node, as do its two
    // axis-label groups; both are keyed by the subplot id alone.
    let xlines = tree.ensure_child(overlines, NodeKind::Path, &token);
    let ylines = tree.ensure_child(overlines, NodeKind::Path, &token);
    let xaxislayer = tree.ensure_child(overaxes, NodeKind::Group, &token);
    let yaxislayer = tree.ensure_child(overaxes, NodeKind::Group, &token);

    let Some(sp) = layout.subplot_mut(subplot) else {
        return;
    };
    sp.plotgroup = Some(group);
    sp.overlays.clear();
    sp.bg = None;
    sp.shapelayer = None;
    sp.imagelayer = None;
    sp.gridlayer = Some(gridlayer);
    sp.overgrid = None;
    sp.zerolinelayer = Some(zerolinelayer);
    sp.overzero = None;
    sp.plot = Some(plot);
    sp.overplot = None;
    sp.xlines = Some(xlines);
    sp.ylines = Some(ylines);
    sp.overlines = None;
    sp.xaxislayer = Some(xaxislayer);
    sp.yaxislayer = Some(yaxislayer);
    sp.overaxes = None;
}
