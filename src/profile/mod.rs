// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! Console profiles: which selectors identify rows and open-item editor fields,
//! and which rank classes the highlighter applies per section.
//!
//! The default profile targets the Google Tag Manager console; other consoles
//! can be described as JSON and loaded with [`ConsoleProfile::from_json`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Section, HISTORY_CAPACITY};

/// Selectors and rank classes for one section.
///
/// `rank_classes[0]` marks the most recently opened item, `[1]` the second,
/// `[2]` the third.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProfile {
    /// Matches every selectable row carrying an item name.
    pub row_selector: String,
    /// Matches the editor field holding the name of the item currently open.
    pub field_selector: String,
    pub rank_classes: [String; HISTORY_CAPACITY],
}

impl SectionProfile {
    pub fn new(
        row_selector: impl Into<String>,
        field_selector: impl Into<String>,
        rank_classes: [&str; HISTORY_CAPACITY],
    ) -> Self {
        Self {
            row_selector: row_selector.into(),
            field_selector: field_selector.into(),
            rank_classes: rank_classes.map(str::to_owned),
        }
    }
}

/// Per-section profiles for one console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleProfile {
    pub tags: SectionProfile,
    pub triggers: SectionProfile,
    pub variables: SectionProfile,
}

impl ConsoleProfile {
    /// The Google Tag Manager console.
    pub fn gtm() -> Self {
        Self {
            tags: SectionProfile::new(
                "a.open-tag-button[data-ng-click]",
                "[name=\"tag.data.name\"]",
                ["gtm-last-open-tag", "gtm-second-last-open-tag", "gtm-third-last-open-tag"],
            ),
            triggers: SectionProfile::new(
                "a.wd-open-trigger-button[data-ng-click]",
                "[name=\"trigger.data.name\"]",
                [
                    "gtm-last-open-trigger",
                    "gtm-second-last-open-trigger",
                    "gtm-third-last-open-trigger",
                ],
            ),
            variables: SectionProfile::new(
                "a.wd-variable-name[data-ng-click]",
                "[name=\"variable.data.name\"]",
                [
                    "gtm-last-open-variable",
                    "gtm-second-last-open-variable",
                    "gtm-third-last-open-variable",
                ],
            ),
        }
    }

    /// Parses a profile from JSON and validates that no selector or class is empty.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self =
            serde_json::from_str(json).map_err(|source| ProfileError::Json { source })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn section(&self, section: Section) -> &SectionProfile {
        match section {
            Section::Tags => &self.tags,
            Section::Triggers => &self.triggers,
            Section::Variables => &self.variables,
        }
    }

    fn validate(&self) -> Result<(), ProfileError> {
        for section in Section::ALL {
            let profile = self.section(section);
            if profile.row_selector.trim().is_empty() {
                return Err(ProfileError::EmptySelector { section, field: SelectorField::Row });
            }
            if profile.field_selector.trim().is_empty() {
                return Err(ProfileError::EmptySelector { section, field: SelectorField::Field });
            }
            if let Some(rank) = profile.rank_classes.iter().position(|c| c.trim().is_empty()) {
                return Err(ProfileError::EmptyRankClass { section, rank });
            }
        }
        Ok(())
    }
}

impl Default for ConsoleProfile {
    fn default() -> Self {
        Self::gtm()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    Row,
    Field,
}

#[derive(Debug)]
pub enum ProfileError {
    Json { source: serde_json::Error },
    EmptySelector { section: Section, field: SelectorField },
    EmptyRankClass { section: Section, rank: usize },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "cannot parse console profile: {source}"),
            Self::EmptySelector { section, field } => {
                let field = match field {
                    SelectorField::Row => "row",
                    SelectorField::Field => "field",
                };
                write!(f, "empty {field} selector for section {section}")
            }
            Self::EmptyRankClass { section, rank } => {
                write!(f, "empty rank class {rank} for section {section}")
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::EmptySelector { .. } | Self::EmptyRankClass { .. } => None,
        }
    }
}
