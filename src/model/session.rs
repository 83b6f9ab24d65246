// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

use super::history::RecencyHistory;
use super::section::Section;

/// Per-page-load marker state: one independent recency history per section.
///
/// Lives for the page session only; a reload starts from `MarkerSession::new()`.
/// Histories are mutated exclusively through the orchestrator
/// (`crate::marker::handle_section_update`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSession {
    tags: RecencyHistory,
    triggers: RecencyHistory,
    variables: RecencyHistory,
}

impl MarkerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self, section: Section) -> &RecencyHistory {
        match section {
            Section::Tags => &self.tags,
            Section::Triggers => &self.triggers,
            Section::Variables => &self.variables,
        }
    }

    pub fn history_mut(&mut self, section: Section) -> &mut RecencyHistory {
        match section {
            Section::Tags => &mut self.tags,
            Section::Triggers => &mut self.triggers,
            Section::Variables => &mut self.variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerSession, Section};

    #[test]
    fn histories_are_independent_per_section() {
        let mut session = MarkerSession::new();
        session.history_mut(Section::Tags).record(Some("GA4 Event"));
        session.history_mut(Section::Triggers).record(Some("All Pages"));

        assert_eq!(session.history(Section::Tags).head(), Some("GA4 Event"));
        assert_eq!(session.history(Section::Triggers).head(), Some("All Pages"));
        assert!(session.history(Section::Variables).is_empty());
    }

    #[test]
    fn new_session_starts_empty() {
        let session = MarkerSession::new();
        for section in Section::ALL {
            assert!(session.history(section).is_empty());
        }
    }
}
