//! Core reference entities shared across showforge.
//!
//! `Series` and `Episode` are read-only entities supplied by metadata
//! collaborators (remote lookup, library database). The parsing engine
//! consumes them for validation and never mutates them.

use crate::ids::{EpisodeId, SeriesId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numbering convention a series follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    /// Season/episode numbering resets per season.
    #[default]
    Standard,
    /// Episodes identified by air date (news, talk shows).
    Daily,
    /// Absolute numbering across all seasons (common for anime).
    Anime,
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesType::Standard => write!(f, "standard"),
            SeriesType::Daily => write!(f, "daily"),
            SeriesType::Anime => write!(f, "anime"),
        }
    }
}

/// A series known to the library or a metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    /// Display title as the provider records it.
    pub title: String,
    /// Normalized title used as the lookup key.
    pub clean_title: String,
    /// First-aired year, when known.
    pub year: Option<u16>,
    pub kind: SeriesType,
}

impl Series {
    /// Create a series, deriving the normalized lookup key from the title.
    pub fn new(id: SeriesId, title: impl Into<String>, kind: SeriesType) -> Self {
        let title = title.into();
        let clean_title = clean_series_title(&title);
        Self {
            id,
            title,
            clean_title,
            year: None,
            kind,
        }
    }

    /// Attach a first-aired year.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

/// A single episode of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub series_id: SeriesId,
    pub season: u16,
    /// Episode number within the season.
    pub number: u16,
    /// Absolute number across all seasons, when the provider records one.
    pub absolute_number: Option<u16>,
    pub air_date: Option<NaiveDate>,
    pub title: Option<String>,
}

impl Episode {
    pub fn new(id: EpisodeId, series_id: SeriesId, season: u16, number: u16) -> Self {
        Self {
            id,
            series_id,
            season,
            number,
            absolute_number: None,
            air_date: None,
            title: None,
        }
    }

    pub fn with_absolute_number(mut self, n: u16) -> Self {
        self.absolute_number = Some(n);
        self
    }

    pub fn with_air_date(mut self, date: NaiveDate) -> Self {
        self.air_date = Some(date);
        self
    }
}

/// Normalize a series title into its lookup key.
///
/// Lowercases, replaces separators with single spaces, and strips every
/// character that is neither alphanumeric nor a space. Both sides of a
/// lookup (stored series and probed window) must use the same key.
pub fn clean_series_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_was_space = true;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_series_title() {
        assert_eq!(clean_series_title("Breaking.Bad"), "breaking bad");
        assert_eq!(clean_series_title("Castle (2009)"), "castle 2009");
        assert_eq!(clean_series_title("Hunter_X_Hunter"), "hunter x hunter");
        assert_eq!(clean_series_title("  Chuck  "), "chuck");
        assert_eq!(clean_series_title("Mr. Robot"), "mr robot");
    }

    #[test]
    fn test_series_builder() {
        let series = Series::new(SeriesId::from(1), "Castle 2009", SeriesType::Standard)
            .with_year(2009);
        assert_eq!(series.clean_title, "castle 2009");
        assert_eq!(series.year, Some(2009));
    }

    #[test]
    fn test_episode_builder() {
        let ep = Episode::new(EpisodeId::from(10), SeriesId::from(1), 4, 5)
            .with_absolute_number(63)
            .with_air_date(NaiveDate::from_ymd_opt(2010, 11, 1).unwrap());
        assert_eq!(ep.season, 4);
        assert_eq!(ep.number, 5);
        assert_eq!(ep.absolute_number, Some(63));
        assert!(ep.air_date.is_some());
    }

    #[test]
    fn test_series_type_display() {
        assert_eq!(SeriesType::Anime.to_string(), "anime");
        assert_eq!(SeriesType::default(), SeriesType::Standard);
    }
}
