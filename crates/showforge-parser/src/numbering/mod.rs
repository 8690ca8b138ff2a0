//! Numbering extraction.
//!
//! A release is numbered by exactly one scheme. The series type picks the
//! strategy: daily series only ever parse air dates, anime prefers absolute
//! numbers with a seasonal fallback, standard series parse season/episode
//! shapes. With no series context every strategy gets a chance, seasonal
//! first.

pub mod absolute;
pub mod daily;
pub mod seasonal;

use crate::error::{ParseError, Result};
use crate::lookup::EpisodeLookup;
use crate::model::{Numbering, ParsedInfo};
use showforge_common::{Series, SeriesType};

/// A chosen numbering plus the bookkeeping downstream stages need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingOutcome {
    pub numbering: Numbering,
    /// Offset of the winning numbering token within the title. REAL markers
    /// only count when they appear after this position.
    pub position: usize,
    /// Whether the winning shape carried no season number (mini/special
    /// shorthand like `Part 3`).
    pub mini: bool,
}

/// Extract the numbering for a title, honoring the series type.
pub fn extract(
    info: &ParsedInfo<'_>,
    series: Option<&Series>,
    episodes: &dyn EpisodeLookup,
) -> Result<Option<NumberingOutcome>> {
    match series.map(|s| s.kind) {
        Some(SeriesType::Daily) => daily::extract(info),
        Some(SeriesType::Anime) => {
            if let Some(outcome) = absolute::extract(info, series, episodes)? {
                return Ok(Some(outcome));
            }
            seasonal::extract(info, series, episodes)
        }
        Some(SeriesType::Standard) => seasonal::extract(info, series, episodes),
        None => {
            if let Some(outcome) = seasonal::extract(info, None, episodes)? {
                return Ok(Some(outcome));
            }
            if let Some(outcome) = daily::extract(info)? {
                return Ok(Some(outcome));
            }
            absolute::extract(info, None, episodes)
        }
    }
}

/// Read a named numeric capture, surfacing a missing group as the pattern
/// defect it is.
pub(crate) fn capture_u16(
    caps: &regex::Captures<'_>,
    group: &'static str,
    pattern: &'static str,
) -> Result<u16> {
    let m = caps
        .name(group)
        .ok_or(ParseError::MissingCapture { pattern, group })?;
    Ok(m.as_str().parse().unwrap_or(0))
}
