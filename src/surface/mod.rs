// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! Page access behind a capability trait.
//!
//! The marker logic never touches a real page directly; everything it needs is
//! expressed through [`Surface`], so the whole engine runs against
//! [`MemorySurface`] in tests and against a host binding in production.

pub mod memory;

pub use memory::MemorySurface;

use crate::model::{ListItem, NodeId};

/// What the engine needs from the host page.
///
/// Every lookup degrades to an empty result rather than an error: a query that
/// matches nothing yields an empty vec or `None`, and the next update cycle
/// self-corrects if the page was mid-render.
pub trait Surface {
    /// Current navigation fragment, used for section detection.
    fn location_fragment(&self) -> String;

    /// All rows matching `selector`, in page order, names trimmed.
    fn select_rows(&self, selector: &str) -> Vec<ListItem>;

    /// Trimmed text of the first node matching `selector`, if any.
    fn field_text(&self, selector: &str) -> Option<String>;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Scrolls `node` into the viewport, centered.
    fn scroll_into_view(&mut self, node: NodeId);

    /// Whether the container the watcher observes exists. When it does not,
    /// watching is aborted for the rest of the page load.
    fn has_observation_root(&self) -> bool;
}
