// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// One of the three top-level configuration categories the console can show.
///
/// A page outside all three categories is `Option::<Section>::None`; keeping
/// the enum itself three-valued means every section-indexed table has exactly
/// three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Tags,
    Triggers,
    Variables,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Tags, Section::Triggers, Section::Variables];

    /// Maps a navigation fragment to a section by substring containment,
    /// checked in priority order tags → triggers → variables.
    pub fn detect(fragment: &str) -> Option<Section> {
        if fragment.contains("/tags") {
            Some(Section::Tags)
        } else if fragment.contains("/triggers") {
            Some(Section::Triggers)
        } else if fragment.contains("/variables") {
            Some(Section::Variables)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Tags => "tags",
            Section::Triggers => "triggers",
            Section::Variables => "variables",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError;

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid section")
    }
}

impl std::error::Error for ParseSectionError {}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tags" => Ok(Self::Tags),
            "triggers" => Ok(Self::Triggers),
            "variables" => Ok(Self::Variables),
            _ => Err(ParseSectionError),
        }
    }
}
