//! The final parse result handed to callers.

use super::language::Language;
use super::quality::{Quality, Revision};
use chrono::NaiveDate;
use showforge_common::Series;

/// How a release identifies the episodes it contains.
///
/// The three schemes are mutually exclusive: a release is numbered by
/// season/episode, by absolute episode number, or by air date, never by a
/// mixture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", tag = "scheme"))]
pub enum Numbering {
    Seasonal {
        season: u16,
        /// Episode numbers within the season. Empty for a full-season pack.
        episodes: Vec<u16>,
        /// Whether the release covers the whole season with no episode list.
        full_season: bool,
    },
    Absolute {
        /// Absolute episode numbers across all seasons.
        episodes: Vec<u16>,
    },
    Daily {
        air_date: NaiveDate,
    },
}

impl Numbering {
    pub fn is_full_season(&self) -> bool {
        matches!(
            self,
            Numbering::Seasonal {
                full_season: true,
                ..
            }
        )
    }
}

/// Everything the engine extracted from one release title.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedEpisodeInfo {
    /// Title of the series as resolved against the library, or the engine's
    /// best guess from the leading unclassified words.
    pub series_title: String,
    /// The resolved series, when a lookup matched.
    pub series: Option<Series>,
    /// Episode numbering, absent only for specials recognized without one.
    pub numbering: Option<Numbering>,
    pub quality: Quality,
    pub revision: Revision,
    pub language: Language,
    /// Release group name, when one could be recovered.
    pub release_group: Option<String>,
    /// Checksum carried by the release name, kept only for anime releases.
    pub release_hash: Option<String>,
    /// Whether the release is a special or mini-series episode.
    pub special: bool,
}

impl ParsedEpisodeInfo {
    /// Season number, when seasonally numbered.
    pub fn season(&self) -> Option<u16> {
        match &self.numbering {
            Some(Numbering::Seasonal { season, .. }) => Some(*season),
            _ => None,
        }
    }

    /// Episode numbers within the season, when seasonally numbered.
    pub fn episodes(&self) -> &[u16] {
        match &self.numbering {
            Some(Numbering::Seasonal { episodes, .. }) => episodes,
            _ => &[],
        }
    }

    /// Absolute episode numbers, when absolutely numbered.
    pub fn absolute_episodes(&self) -> &[u16] {
        match &self.numbering {
            Some(Numbering::Absolute { episodes }) => episodes,
            _ => &[],
        }
    }

    /// Air date, when daily numbered.
    pub fn air_date(&self) -> Option<NaiveDate> {
        match &self.numbering {
            Some(Numbering::Daily { air_date }) => Some(*air_date),
            _ => None,
        }
    }

    pub fn is_full_season(&self) -> bool {
        self.numbering
            .as_ref()
            .is_some_and(Numbering::is_full_season)
    }
}
