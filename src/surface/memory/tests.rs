// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

use crate::surface::Surface;

use super::MemorySurface;

const ROWS: &str = "a.open-tag-button[data-ng-click]";
const FIELD: &str = "[name=\"tag.data.name\"]";

#[test]
fn select_rows_returns_page_order_with_trimmed_names() {
    let mut page = MemorySurface::new();
    page.insert_row(ROWS, "  GA4 Event  ");
    page.insert_row(ROWS, "Consent Init");
    page.insert_row("a.wd-variable-name[data-ng-click]", "Page URL");

    let rows = page.select_rows(ROWS);
    let names: Vec<&str> = rows.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["GA4 Event", "Consent Init"]);
}

#[test]
fn select_rows_on_empty_page_is_empty() {
    let page = MemorySurface::new();
    assert!(page.select_rows(ROWS).is_empty());
}

#[test]
fn removed_nodes_drop_out_of_row_scans() {
    let mut page = MemorySurface::new();
    let a = page.insert_row(ROWS, "A");
    page.insert_row(ROWS, "B");
    page.remove_node(a);

    let rows = page.select_rows(ROWS);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "B");
}

#[test]
fn field_text_reads_first_match_trimmed() {
    let mut page = MemorySurface::new();
    assert_eq!(page.field_text(FIELD), None);

    page.set_field(FIELD, " GA4 Event \n");
    assert_eq!(page.field_text(FIELD), Some("GA4 Event".to_owned()));

    page.set_field(FIELD, "Consent Init");
    assert_eq!(page.field_text(FIELD), Some("Consent Init".to_owned()));

    page.clear_field(FIELD);
    assert_eq!(page.field_text(FIELD), None);
}

#[test]
fn class_toggling_is_per_node() {
    let mut page = MemorySurface::new();
    let a = page.insert_row(ROWS, "A");
    let b = page.insert_row(ROWS, "B");

    page.add_class(a, "gtm-last-open-tag");
    assert!(page.has_class(a, "gtm-last-open-tag"));
    assert!(!page.has_class(b, "gtm-last-open-tag"));

    page.remove_class(a, "gtm-last-open-tag");
    assert!(page.classes_of(a).is_empty());

    // Removing an absent class is a no-op.
    page.remove_class(b, "gtm-last-open-tag");
    assert!(page.classes_of(b).is_empty());
}

#[test]
fn class_edits_on_dead_nodes_are_ignored() {
    let mut page = MemorySurface::new();
    let a = page.insert_row(ROWS, "A");
    page.remove_node(a);

    page.add_class(a, "gtm-last-open-tag");
    assert!(page.classes_of(a).is_empty());
}

#[test]
fn scroll_log_records_targets_in_order() {
    let mut page = MemorySurface::new();
    let a = page.insert_row(ROWS, "A");
    let b = page.insert_row(ROWS, "B");

    assert_eq!(page.last_scrolled(), None);
    page.scroll_into_view(a);
    page.scroll_into_view(b);
    assert_eq!(page.last_scrolled(), Some(b));
    assert_eq!(page.scroll_log(), [a, b]);
}

#[test]
fn observation_root_flag() {
    assert!(MemorySurface::new().has_observation_root());
    assert!(!MemorySurface::without_observation_root().has_observation_root());
}
