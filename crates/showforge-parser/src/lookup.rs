//! Lookup seams between the parsing engine and the library.
//!
//! The engine validates what it extracts against known series and episodes,
//! but never owns that data. Callers hand in implementations of these
//! traits; [`NoLookup`] runs the engine standalone and [`MemoryLookup`]
//! backs tests and small tools.

use showforge_common::{Episode, Series, SeriesId};

/// Resolves normalized title probes to known series.
pub trait SeriesLookup {
    fn find_by_title(&self, clean_title: &str) -> Option<Series>;
    fn find_by_title_and_year(&self, clean_title: &str, year: u16) -> Option<Series>;
}

/// Supplies the known episodes of a series for numbering validation.
pub trait EpisodeLookup {
    fn episodes_by_season(&self, series: SeriesId, season: u16) -> Vec<Episode>;
    fn episode_by_absolute_number(&self, series: SeriesId, number: u16) -> Option<Episode>;
    fn all_episodes(&self, series: SeriesId) -> Vec<Episode>;
}

/// A lookup that knows nothing. Parsing still works; series resolution and
/// numbering validation are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl SeriesLookup for NoLookup {
    fn find_by_title(&self, _clean_title: &str) -> Option<Series> {
        None
    }

    fn find_by_title_and_year(&self, _clean_title: &str, _year: u16) -> Option<Series> {
        None
    }
}

impl EpisodeLookup for NoLookup {
    fn episodes_by_season(&self, _series: SeriesId, _season: u16) -> Vec<Episode> {
        Vec::new()
    }

    fn episode_by_absolute_number(&self, _series: SeriesId, _number: u16) -> Option<Episode> {
        None
    }

    fn all_episodes(&self, _series: SeriesId) -> Vec<Episode> {
        Vec::new()
    }
}

/// An in-memory lookup over explicitly registered series and episodes.
#[derive(Debug, Default, Clone)]
pub struct MemoryLookup {
    series: Vec<Series>,
    episodes: Vec<Episode>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    pub fn add_episode(&mut self, episode: Episode) -> &mut Self {
        self.episodes.push(episode);
        self
    }
}

impl SeriesLookup for MemoryLookup {
    fn find_by_title(&self, clean_title: &str) -> Option<Series> {
        self.series
            .iter()
            .find(|s| s.clean_title == clean_title)
            .cloned()
    }

    fn find_by_title_and_year(&self, clean_title: &str, year: u16) -> Option<Series> {
        self.series
            .iter()
            .find(|s| {
                let with_year = format!("{clean_title} {year}");
                s.clean_title == with_year
                    || (s.year == Some(year) && s.clean_title == clean_title)
            })
            .cloned()
    }
}

impl EpisodeLookup for MemoryLookup {
    fn episodes_by_season(&self, series: SeriesId, season: u16) -> Vec<Episode> {
        self.episodes
            .iter()
            .filter(|e| e.series_id == series && e.season == season)
            .cloned()
            .collect()
    }

    fn episode_by_absolute_number(&self, series: SeriesId, number: u16) -> Option<Episode> {
        self.episodes
            .iter()
            .find(|e| e.series_id == series && e.absolute_number == Some(number))
            .cloned()
    }

    fn all_episodes(&self, series: SeriesId) -> Vec<Episode> {
        self.episodes
            .iter()
            .filter(|e| e.series_id == series)
            .cloned()
            .collect()
    }
}
