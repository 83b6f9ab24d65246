// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! Tagmark: recency marker engine for SPA tag-management consoles.
//!
//! The engine watches page-mutation batches, detects which tag/trigger/variable
//! is currently open, keeps a bounded most-recent-first history per section, and
//! re-applies rank classes to matching list rows after every re-render settles.
//!
//! All page access goes through the [`surface::Surface`] capability trait; the
//! crate ships [`surface::MemorySurface`] so the full loop runs without a host.

pub mod marker;
pub mod model;
pub mod profile;
pub mod surface;
pub mod watch;
