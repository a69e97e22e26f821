// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot topology resolution.
//!
//! Classifies every declared axis pair as either a *main* subplot or an *overlay*
//! of a main, and produces the draw order: mains first (declaration order, minus
//! pairs reclassified as overlays), then overlays in discovery order.

extern crate alloc;

use alloc::vec::Vec;

use crate::axis_id::{AxisId, SubplotId};
use crate::layout::CartesianLayout;

/// Resolves the subplot draw order for the current declarations.
///
/// Side effects on the layout, by design:
/// - overlay classification is written back into each frame record's `mainplot`,
/// - overlay subplots' axes get their domains copied from the overlaid axes (for
///   now overlays cover their main completely, so they drag together and share
///   backgrounds), and
/// - an `overlaying` reference that forms a chain (its target itself overlays
///   something) is cleared, flattening overlay nesting to depth 1.
pub fn resolve_subplot_order(layout: &mut CartesianLayout) -> Vec<SubplotId> {
    let declared: Vec<SubplotId> = layout.declared().to_vec();
    let mut mains: Vec<SubplotId> = Vec::new();
    let mut overlays: Vec<SubplotId> = Vec::new();

    for subplot in declared.iter().copied() {
        let xa2 = overlay_target(layout, subplot.x);
        let ya2 = overlay_target(layout, subplot.y);

        let mainplot = SubplotId::new(xa2, ya2);
        if mainplot != subplot && declared.contains(&mainplot) {
            if let Some(sp) = layout.subplot_mut(subplot) {
                sp.mainplot = Some(mainplot);
            }
            copy_domain(layout, xa2, subplot.x);
            copy_domain(layout, ya2, subplot.y);
            overlays.push(subplot);
        } else {
            // Includes the self-overlay case, which resolves back to the
            // subplot's own id.
            if let Some(sp) = layout.subplot_mut(subplot) {
                sp.mainplot = None;
            }
            mains.push(subplot);
        }
    }

    mains.extend_from_slice(&overlays);
    layout.set_order(mains.clone());
    mains
}

/// Follows an axis's `overlaying` reference one hop.
///
/// Returns the axis itself when it overlays nothing, when the target does not
/// exist, or when the target is itself an overlay. In the last case the axis's
/// own `overlaying` reference is cleared as a side effect, so the chain stays
/// broken on later passes.
fn overlay_target(layout: &mut CartesianLayout, id: AxisId) -> AxisId {
    let Some(target) = layout.axis(id).and_then(|a| a.overlaying) else {
        return id;
    };
    if target == id {
        return id;
    }
    match layout.axis(target) {
        None => id,
        Some(t) if t.overlaying.is_some() => {
            if let Some(axis) = layout.axis_mut(id) {
                axis.overlaying = None;
            }
            id
        }
        Some(_) => target,
    }
}

fn copy_domain(layout: &mut CartesianLayout, from: AxisId, to: AxisId) {
    if from == to {
        return;
    }
    let Some(domain) = layout.axis(from).map(|a| a.domain) else {
        return;
    };
    if let Some(axis) = layout.axis_mut(to) {
        axis.domain = domain;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use plotgrid_core::LayerTree;

    use super::*;
    use crate::layout::AxisLayout;

    fn layout_with(axes: &[AxisLayout], pairs: &[(AxisId, AxisId)]) -> CartesianLayout {
        let mut tree = LayerTree::new();
        let mut layout = CartesianLayout::new("1", &mut tree);
        for axis in axes {
            layout.insert_axis(axis.clone());
        }
        for &(x, y) in pairs {
            layout.declare_subplot(x, y);
        }
        layout
    }

    #[test]
    fn independent_pairs_keep_declaration_order() {
        let x = AxisId::x(1);
        let x2 = AxisId::x(2);
        let y = AxisId::y(1);
        let y2 = AxisId::y(2);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x),
                AxisLayout::new(x2),
                AxisLayout::new(y),
                AxisLayout::new(y2),
            ],
            &[(x, y), (x2, y2), (x, y2)],
        );

        let order = resolve_subplot_order(&mut layout);
        let declared: Vec<SubplotId> = layout.declared().to_vec();
        assert_eq!(order, declared);
        for id in order {
            assert_eq!(layout.subplot(id).unwrap().mainplot, None);
        }
    }

    #[test]
    fn overlaying_axis_reclassifies_its_subplot_and_copies_domains() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let y2 = AxisId::y(2);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x).with_domain([0.1, 0.9]),
                AxisLayout::new(y).with_domain([0.2, 0.8]),
                AxisLayout::new(y2)
                    .with_domain([0.0, 1.0])
                    .with_overlaying(y),
            ],
            &[(x, y), (x, y2)],
        );

        let order = resolve_subplot_order(&mut layout);
        let main = SubplotId::new(x, y);
        let over = SubplotId::new(x, y2);
        assert_eq!(order, alloc::vec![main, over]);
        assert_eq!(layout.subplot(over).unwrap().mainplot, Some(main));
        assert_eq!(layout.subplot(main).unwrap().mainplot, None);

        // The overlay's axes inherit the overlaid axes' domains.
        assert_eq!(layout.axis(y2).unwrap().domain, [0.2, 0.8]);
        assert_eq!(layout.axis(x).unwrap().domain, [0.1, 0.9]);
    }

    #[test]
    fn overlays_sort_after_all_mains() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let y2 = AxisId::y(2);
        let x2 = AxisId::x(2);
        let y3 = AxisId::y(3);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x),
                AxisLayout::new(x2),
                AxisLayout::new(y),
                AxisLayout::new(y2).with_overlaying(y),
                AxisLayout::new(y3),
            ],
            &[(x, y), (x, y2), (x2, y3)],
        );

        let order = resolve_subplot_order(&mut layout);
        assert_eq!(
            order,
            alloc::vec![
                SubplotId::new(x, y),
                SubplotId::new(x2, y3),
                SubplotId::new(x, y2),
            ]
        );
    }

    #[test]
    fn chained_overlay_is_broken_and_reference_cleared() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let y2 = AxisId::y(2);
        let y3 = AxisId::y(3);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x),
                AxisLayout::new(y),
                AxisLayout::new(y2).with_overlaying(y),
                AxisLayout::new(y3)
                    .with_domain([0.4, 0.6])
                    .with_overlaying(y2),
            ],
            &[(x, y), (x, y2), (x, y3)],
        );

        let order = resolve_subplot_order(&mut layout);

        // xy3 resolves to a main: its target y2 is itself an overlay.
        let third = SubplotId::new(x, y3);
        assert_eq!(layout.subplot(third).unwrap().mainplot, None);
        assert_eq!(
            layout.axis(y3).unwrap().overlaying,
            None,
            "chained reference must be nulled"
        );
        // Domain inheritance falls back to the axis's own domain.
        assert_eq!(layout.axis(y3).unwrap().domain, [0.4, 0.6]);
        assert_eq!(
            order,
            alloc::vec![SubplotId::new(x, y), third, SubplotId::new(x, y2)]
        );
    }

    #[test]
    fn overlaying_a_nonexistent_axis_falls_back_to_main() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x),
                AxisLayout::new(y).with_overlaying(AxisId::y(7)),
            ],
            &[(x, y)],
        );

        let order = resolve_subplot_order(&mut layout);
        let id = SubplotId::new(x, y);
        assert_eq!(order, alloc::vec![id]);
        assert_eq!(layout.subplot(id).unwrap().mainplot, None);
        // The dangling reference is left in place, not cleared.
        assert_eq!(layout.axis(y).unwrap().overlaying, Some(AxisId::y(7)));
    }

    #[test]
    fn self_overlay_is_a_main() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let mut layout = layout_with(
            &[AxisLayout::new(x), AxisLayout::new(y).with_overlaying(y)],
            &[(x, y)],
        );

        let order = resolve_subplot_order(&mut layout);
        let id = SubplotId::new(x, y);
        assert_eq!(order, alloc::vec![id]);
        assert_eq!(layout.subplot(id).unwrap().mainplot, None);
    }

    #[test]
    fn former_overlay_is_reclassified_when_its_main_disappears() {
        let x = AxisId::x(1);
        let y = AxisId::y(1);
        let y2 = AxisId::y(2);
        let mut layout = layout_with(
            &[
                AxisLayout::new(x),
                AxisLayout::new(y),
                AxisLayout::new(y2).with_overlaying(y),
            ],
            &[(x, y), (x, y2)],
        );
        resolve_subplot_order(&mut layout);
        let over = SubplotId::new(x, y2);
        assert!(layout.subplot(over).unwrap().mainplot.is_some());

        layout.remove_subplot(SubplotId::new(x, y));
        resolve_subplot_order(&mut layout);
        assert_eq!(
            layout.subplot(over).unwrap().mainplot,
            None,
            "overlay of a withdrawn main becomes a main"
        );
    }
}
