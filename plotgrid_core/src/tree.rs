// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer-tree arena and its keyed join/reconcile operations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::node::{Node, NodeId, NodeKind, Paint, Style};

/// An arena of persistent drawable container nodes.
///
/// All lookup-style operations degrade silently: a missing node reads as empty and
/// removals of absent nodes are no-ops. The only hard errors are `debug_assert!`s
/// on conditions that indicate a caller bug (joining under a removed parent,
/// re-joining a key with a different node kind).
#[derive(Debug)]
pub struct LayerTree {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    created: u64,
    root: NodeId,
}

impl LayerTree {
    /// Creates a tree containing only a root group.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                kind: NodeKind::Group,
                key: String::from("root"),
                classes: SmallVec::new(),
                style: Style::default(),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            next_id: 1,
            created: 1,
            root,
        }
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes (including the root).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes besides the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Total number of nodes ever created, monotonic across removals.
    ///
    /// A pass that is idempotent with respect to already-correct state leaves this
    /// counter unchanged.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    /// Whether `id` resolves to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The node's kind, if it is live.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(&id).map(|n| n.kind)
    }

    /// The node's primary key, if it is live.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.key.as_str())
    }

    /// The node's parent, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// The node's children in draw order. Missing nodes read as empty.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[], |n| n.children.as_slice())
    }

    /// The node's style record, if it is live.
    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.nodes.get(&id).map(|n| &n.style)
    }

    /// Appends a new child node under `parent`, unconditionally.
    ///
    /// Most callers want [`Self::ensure_child`] instead.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind, key: &str) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(&parent),
            "appending under a node that does not exist"
        );
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.nodes.insert(
            id,
            Node {
                kind,
                key: String::from(key),
                classes: SmallVec::new(),
                style: Style::default(),
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(id);
        }
        id
    }

    /// Finds the first child of `parent` whose primary key is `key`.
    pub fn find_child(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|c| self.key(*c) == Some(key))
    }

    /// The idempotent keyed join: returns the existing `(parent, key)` child or
    /// creates it on first use.
    pub fn ensure_child(&mut self, parent: NodeId, kind: NodeKind, key: &str) -> NodeId {
        if let Some(id) = self.find_child(parent, key) {
            debug_assert_eq!(
                self.kind(id),
                Some(kind),
                "keyed join re-used with a different node kind"
            );
            return id;
        }
        self.append(parent, kind, key)
    }

    /// Reconciles the `tag`-classed children of `parent` against a new key sequence.
    ///
    /// Children carrying the `tag` class participate; others are left alone (kept in
    /// front, in their existing order). Keys with no matching child enter as new
    /// `kind` nodes tagged with `tag`; participating children whose key is absent
    /// from `keys` are removed with their subtrees; survivors are reordered to match
    /// `keys`. Returns one node per key, in key order, with identity preserved for
    /// survivors.
    pub fn reconcile_children(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        tag: &str,
        keys: &[&str],
    ) -> Vec<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return Vec::new();
        }

        let mut by_key: HashMap<String, NodeId> = HashMap::new();
        let mut rest: Vec<NodeId> = Vec::new();
        for child in self.children(parent).to_vec() {
            if self.has_class(child, tag) {
                if let Some(k) = self.key(child) {
                    by_key.insert(String::from(k), child);
                }
            } else {
                rest.push(child);
            }
        }

        // Exit: participating children whose key is gone.
        let stale: Vec<NodeId> = by_key
            .iter()
            .filter(|(k, _)| !keys.contains(&k.as_str()))
            .map(|(_, id)| *id)
            .collect();
        for id in stale {
            self.remove_subtree(id);
        }

        // Enter + order.
        let mut ordered = Vec::with_capacity(keys.len());
        for &k in keys {
            let id = match by_key.get(k) {
                Some(&id) => id,
                None => {
                    let id = self.append(parent, kind, k);
                    self.add_class(id, tag);
                    id
                }
            };
            ordered.push(id);
        }

        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children = rest;
            p.children.extend_from_slice(&ordered);
        }
        ordered
    }

    /// Removes a node and all of its descendants. No-op if `id` is not live.
    pub fn remove_subtree(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(&id).and_then(|n| n.parent) else {
            // Absent node, or the root (which cannot be removed).
            return;
        };
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|c| *c != id);
        }
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            if let Some(node) = self.nodes.remove(&n) {
                stack.extend_from_slice(&node.children);
            }
        }
    }

    /// Removes every child of `parent` carrying `class`, with their subtrees.
    pub fn remove_children_with_class(&mut self, parent: NodeId, class: &str) {
        let doomed: Vec<NodeId> = self
            .children(parent)
            .iter()
            .copied()
            .filter(|c| self.has_class(*c, class))
            .collect();
        for id in doomed {
            self.remove_subtree(id);
        }
    }

    /// Removes every child of `parent` whose primary key fails `keep`.
    pub fn retain_children(&mut self, parent: NodeId, keep: impl Fn(&str) -> bool) {
        let doomed: Vec<NodeId> = self
            .children(parent)
            .iter()
            .copied()
            .filter(|c| self.key(*c).is_some_and(|k| !keep(k)))
            .collect();
        for id in doomed {
            self.remove_subtree(id);
        }
    }

    /// Adds a class tag to a node. Duplicates and missing nodes are no-ops.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&id)
            && !n.classes.iter().any(|c| c == class)
        {
            n.classes.push(String::from(class));
        }
    }

    /// Whether a node carries the given class tag.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// Sets the node's fill paint.
    pub fn set_fill(&mut self, id: NodeId, fill: Paint) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.style.fill = Some(fill);
        }
    }

    /// Sets the node's stroke width.
    pub fn set_stroke_width(&mut self, id: NodeId, width: f64) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.style.stroke_width = Some(width);
        }
    }

    /// Sets the node's crisp-edges rendering hint.
    pub fn set_crisp(&mut self, id: NodeId, crisp: bool) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.style.crisp = crisp;
        }
    }
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new()
    }
}
