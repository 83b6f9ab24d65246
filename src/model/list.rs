// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

use std::fmt;

/// Opaque handle to a node in the host page.
///
/// Handles are only meaningful to the surface that issued them and only until
/// the next re-render; list items are rebuilt fresh on every update and never
/// cached across updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Wraps a host-assigned node number. A [`Surface`](crate::surface::Surface)
    /// implementation outside this crate mints its handles through here.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n:{}", self.0)
    }
}

/// A selectable row: its trimmed display name plus the page node carrying it.
///
/// Names are not deduplicated; lookups always take the first match in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    pub node: NodeId,
}

impl ListItem {
    pub fn new(name: impl Into<String>, node: NodeId) -> Self {
        Self { name: name.into(), node }
    }
}
