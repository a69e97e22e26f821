// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-subplot trace-layer sequencing and renderer dispatch pass.

extern crate alloc;

use alloc::vec::Vec;

use plotgrid_core::{LayerTree, NodeKind};

use crate::layer_order::rank;
use crate::layout::CartesianLayout;
use crate::trace::{CalcTrace, OnCompleteFactory, TraceRegistry, TransitionOpts, Visibility};

/// Plots traces on every subplot of the layout.
///
/// `traces` is the set of global trace indices to (re)plot; `None` means a full
/// replot of everything. For each subplot, in resolved order, this pass:
/// - collects the subplot's contributing calc entries, retroactively including
///   the trace immediately preceding a requested fill-to-next trace (its fill
///   geometry depends on the predecessor being current),
/// - unions the layer names needed by the subplot's strictly-visible traces and
///   orders them by the fixed [`crate::layer_order::LAYER_ORDER`] table,
/// - reconciles that ordered list against the trace-layer containers under the
///   subplot's plot layer (name-keyed), and
/// - dispatches once per participating cartesian renderer with its own ordered
///   calc subset.
pub fn plot(
    layout: &CartesianLayout,
    tree: &mut LayerTree,
    registry: &TraceRegistry,
    calcdata: &[CalcTrace],
    traces: Option<&[usize]>,
    transition: Option<&TransitionOpts>,
    make_on_complete: Option<&OnCompleteFactory>,
) {
    // No request list means a complete replot; missing traces drop out naturally.
    let all: Vec<usize>;
    let requested: &[usize] = match traces {
        Some(t) => t,
        None => {
            all = calcdata.iter().map(|cd| cd.trace.index).collect();
            &all
        }
    };

    for subplot in layout.order().iter().copied() {
        let Some(plotinfo) = layout.subplot(subplot) else {
            continue;
        };
        let Some(plot_layer) = plotinfo.plot else {
            continue;
        };

        let mut cd_subplot: Vec<&CalcTrace> = Vec::new();
        let mut layer_names: Vec<&'static str> = Vec::new();
        let mut prev: Option<&CalcTrace> = None;

        for cd in calcdata {
            let trace = &cd.trace;
            if trace.subplot() != subplot {
                continue;
            }
            if requested.contains(&trace.index) {
                // A requested fill-to-next trace is only correct if its
                // predecessor's geometry is current, so pull that one in too.
                if let Some(pcd) = prev
                    && trace.fill.fills_to_next()
                    && !cd_subplot.iter().any(|c| c.trace.index == pcd.trace.index)
                {
                    cd_subplot.push(pcd);
                }
                cd_subplot.push(cd);
            }
            prev = Some(cd);

            if trace.visible == Visibility::Visible
                && let Some(module) = registry.get(trace.renderer)
            {
                for layer in module.layers() {
                    if !layer_names.contains(layer) {
                        layer_names.push(layer);
                    }
                }
            }
        }

        layer_names.sort_by_key(|name| rank(name));

        let ids = tree.reconcile_children(plot_layer, NodeKind::Group, "tracelayer", &layer_names);
        for (id, name) in ids.iter().zip(layer_names.iter()) {
            tree.add_class(*id, name);
        }

        // Plot all traces of each type on this subplot at once; renderers are
        // invoked even with an empty subset so they can clear stale content.
        for module in registry.iter() {
            if module.base_plot() != "cartesian" {
                continue;
            }
            let cd_module: Vec<&CalcTrace> = cd_subplot
                .iter()
                .copied()
                .filter(|cd| {
                    cd.trace.renderer == module.name() && cd.trace.visible == Visibility::Visible
                })
                .collect();
            module.plot(tree, plotinfo, &cd_module, transition, make_on_complete);
        }
    }
}
