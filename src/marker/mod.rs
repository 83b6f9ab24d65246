// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! The highlight pass and the per-section update orchestrator.
//!
//! An update reads the open item, records it on the section's history, and only
//! when the history actually changed rebuilds the row list and re-applies rank
//! classes. Everything here is synchronous; the debounced scheduling that feeds
//! it lives in `crate::watch`.

use log::debug;

use crate::model::{ListItem, MarkerSession, RecencyHistory, Section, HISTORY_CAPACITY};
use crate::profile::ConsoleProfile;
use crate::surface::Surface;

/// Clears all rank classes from every listed row, then re-applies one class per
/// history rank to the first row matching that entry.
///
/// No-op when either the list or the history is empty. History entries with no
/// matching row are skipped. The rank-0 match, when present, is scrolled into
/// view; nothing else scrolls.
pub fn highlight<S: Surface>(
    surface: &mut S,
    list: &[ListItem],
    history: &RecencyHistory,
    rank_classes: &[String; HISTORY_CAPACITY],
) {
    if list.is_empty() || history.is_empty() {
        return;
    }

    for item in list {
        for class in rank_classes {
            surface.remove_class(item.node, class);
        }
    }

    for (rank, name) in history.iter().enumerate().take(rank_classes.len()) {
        if let Some(target) = first_match(list, name) {
            surface.add_class(target.node, &rank_classes[rank]);
        }
    }

    if let Some(head) = history.head() {
        if let Some(latest) = first_match(list, head) {
            surface.scroll_into_view(latest.node);
        }
    }
}

fn first_match<'a>(list: &'a [ListItem], name: &str) -> Option<&'a ListItem> {
    list.iter().find(|item| item.name == name)
}

/// Runs one update for `section`: read the open item, record it, and when the
/// history changed, rebuild the row list and re-highlight.
///
/// Returns whether a highlight pass ran. All lookups degrade to no-ops: a
/// missing field, a field left blank mid-render, and an unchanged head all
/// leave the page untouched.
pub fn handle_section_update<S: Surface>(
    surface: &mut S,
    session: &mut MarkerSession,
    profile: &ConsoleProfile,
    section: Section,
) -> bool {
    let section_profile = profile.section(section);
    let open_name = surface.field_text(&section_profile.field_selector);

    if !session.history_mut(section).record(open_name.as_deref()) {
        return false;
    }
    debug!("section {section}: now tracking {:?}", session.history(section).head());

    let list = surface.select_rows(&section_profile.row_selector);
    highlight(surface, &list, session.history(section), &section_profile.rank_classes);
    true
}
