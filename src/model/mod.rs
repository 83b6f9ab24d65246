// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! Sections, row handles, recency histories, and the per-page-load marker session.
//! This layer is intentionally std-only; page access lives behind `crate::surface`.

pub mod history;
pub mod list;
pub mod section;
pub mod session;

pub use history::{RecencyHistory, HISTORY_CAPACITY};
pub use list::{ListItem, NodeId};
pub use section::{ParseSectionError, Section};
pub use session::MarkerSession;
