// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent drawable layer tree for PlotGrid.
//!
//! Rendering frontends rebuild their *description* of a plot on every pass, but drawable
//! containers are expensive and must keep their identity across passes. This crate provides
//! the substrate both needs meet on: an arena of keyed, ordered container nodes where
//! - a (parent, key) pair resolves to the same [`NodeId`] on every pass
//!   ([`LayerTree::ensure_child`] is an idempotent join), and
//! - a parent's keyed children can be diffed against a new key sequence
//!   ([`LayerTree::reconcile_children`]): missing entries are created, stale ones dropped,
//!   and survivors reordered without losing identity.
//!
//! Nodes carry a primary key, extra class tags, and a small style record (paint, stroke
//! width, crisp-edges hint). Actual drawing is out of scope; consumers hang their own
//! content off the node handles.

#![no_std]

extern crate alloc;

mod node;
mod tree;

pub use node::{NodeId, NodeKind, Paint, Style};
pub use tree::LayerTree;
