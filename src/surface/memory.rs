// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! In-memory reference surface.
//!
//! Nodes live in an arena and keep the selector key they were registered under;
//! matching is by exact key, not CSS parsing. That is enough for the engine,
//! whose profiles only ever query whole selectors verbatim.

use std::collections::BTreeSet;

use crate::model::{ListItem, NodeId};

use super::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PageNode {
    selector: String,
    text: String,
    classes: BTreeSet<String>,
}

/// An in-memory page: a node arena plus a navigation fragment.
///
/// Removing a node leaves a tombstone so handles stay stable; page order is
/// insertion order among live nodes.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    nodes: Vec<Option<PageNode>>,
    fragment: String,
    observation_root: bool,
    scrolled: Vec<NodeId>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), fragment: String::new(), observation_root: true, scrolled: Vec::new() }
    }

    /// A page whose observation container is missing; watching must abort.
    pub fn without_observation_root() -> Self {
        Self { observation_root: false, ..Self::new() }
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// Adds a row node under `selector` with the given display text.
    pub fn insert_row(&mut self, selector: &str, text: &str) -> NodeId {
        self.insert_node(selector, text)
    }

    /// Adds (or replaces) the single editor field node under `selector`.
    pub fn set_field(&mut self, selector: &str, text: &str) -> NodeId {
        let existing = self.nodes.iter().position(|slot| {
            slot.as_ref().is_some_and(|node| node.selector == selector)
        });
        match existing {
            Some(index) => {
                if let Some(node) = &mut self.nodes[index] {
                    node.text = text.to_owned();
                }
                NodeId(index as u64)
            }
            None => self.insert_node(selector, text),
        }
    }

    /// Clears the editor field under `selector` (no item open).
    pub fn clear_field(&mut self, selector: &str) {
        for slot in &mut self.nodes {
            if slot.as_ref().is_some_and(|node| node.selector == selector) {
                *slot = None;
            }
        }
    }

    pub fn remove_node(&mut self, node: NodeId) {
        if let Some(slot) = self.nodes.get_mut(node.0 as usize) {
            *slot = None;
        }
    }

    pub fn classes_of(&self, node: NodeId) -> Vec<String> {
        self.live(node)
            .map(|n| n.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.live(node).is_some_and(|n| n.classes.contains(class))
    }

    /// Most recent scroll target, if any scroll happened.
    pub fn last_scrolled(&self) -> Option<NodeId> {
        self.scrolled.last().copied()
    }

    /// Every scroll in order, for asserting the one-scroll-per-update bound.
    pub fn scroll_log(&self) -> &[NodeId] {
        &self.scrolled
    }

    fn insert_node(&mut self, selector: &str, text: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(Some(PageNode {
            selector: selector.to_owned(),
            text: text.to_owned(),
            classes: BTreeSet::new(),
        }));
        id
    }

    fn live(&self, node: NodeId) -> Option<&PageNode> {
        self.nodes.get(node.0 as usize).and_then(Option::as_ref)
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn location_fragment(&self) -> String {
        self.fragment.clone()
    }

    fn select_rows(&self, selector: &str) -> Vec<ListItem> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let node = slot.as_ref()?;
                (node.selector == selector)
                    .then(|| ListItem::new(node.text.trim(), NodeId(index as u64)))
            })
            .collect()
    }

    fn field_text(&self, selector: &str) -> Option<String> {
        self.nodes.iter().find_map(|slot| {
            let node = slot.as_ref()?;
            (node.selector == selector).then(|| node.text.trim().to_owned())
        })
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(Some(node)) = self.nodes.get_mut(node.0 as usize) {
            node.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(Some(node)) = self.nodes.get_mut(node.0 as usize) {
            node.classes.remove(class);
        }
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        self.scrolled.push(node);
    }

    fn has_observation_root(&self) -> bool {
        self.observation_root
    }
}

#[cfg(test)]
mod tests;
