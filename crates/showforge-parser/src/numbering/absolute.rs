//! Absolute episode-number extraction for anime-style releases.

use super::NumberingOutcome;
use crate::error::Result;
use crate::lookup::EpisodeLookup;
use crate::model::{Numbering, ParsedInfo, Token};
use regex::Regex;
use showforge_common::Series;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| crate::analyzers::rx(r"\d+"));

/// Longest a plausible release range can span.
const MAX_RANGE_SPAN: u16 = 20;

#[derive(Debug, Clone)]
struct Candidate<'a> {
    token: Token<'a>,
    numbers: Vec<u16>,
}

/// Extract absolute episode numbers.
///
/// With a known series every candidate must validate against the library;
/// the first fully valid candidate wins, then single-number subsets of the
/// failed candidates are retried in order. As a last resort a lone year
/// token infers the episodes that aired in that year.
pub fn extract(
    info: &ParsedInfo<'_>,
    series: Option<&Series>,
    episodes: &dyn EpisodeLookup,
) -> Result<Option<NumberingOutcome>> {
    let mut primary: Vec<Candidate<'_>> = Vec::new();
    let mut subsets: Vec<Candidate<'_>> = Vec::new();

    for token in &info.absolute_episodes {
        let Some(numbers) = expand(token) else {
            continue;
        };
        if numbers.len() > 1 {
            for &n in &numbers {
                subsets.push(Candidate {
                    token: *token,
                    numbers: vec![n],
                });
            }
        }
        primary.push(Candidate {
            token: *token,
            numbers,
        });
    }

    let Some(series) = series else {
        // Reduced validation: take the first candidate as written.
        return Ok(primary.first().map(outcome));
    };

    let validates = |candidate: &Candidate<'_>| {
        candidate
            .numbers
            .iter()
            .all(|&n| episodes.episode_by_absolute_number(series.id, n).is_some())
    };

    if let Some(winner) = primary.iter().find(|c| validates(c)) {
        return Ok(Some(outcome(winner)));
    }
    // Retry order is candidate order, not specificity; a later, larger
    // subset never displaces an earlier valid one.
    if let Some(winner) = subsets.iter().find(|c| validates(c)) {
        return Ok(Some(outcome(winner)));
    }

    if let [year_token] = info.years.as_slice() {
        if let Ok(year) = year_token.text.parse::<i32>() {
            let mut aired: Vec<u16> = episodes
                .all_episodes(series.id)
                .into_iter()
                .filter(|e| {
                    e.air_date
                        .is_some_and(|d| chrono::Datelike::year(&d) == year)
                })
                .filter_map(|e| e.absolute_number)
                .collect();
            aired.sort_unstable();
            aired.dedup();
            if !aired.is_empty() {
                return Ok(Some(NumberingOutcome {
                    numbering: Numbering::Absolute { episodes: aired },
                    position: year_token.offset,
                    mini: false,
                }));
            }
        }
    }

    Ok(None)
}

/// Expand a token's digit runs into an episode list.
///
/// Two runs form a range; more than two must be strictly consecutive.
/// Empty, inverted, and over-long ranges are rejected.
fn expand(token: &Token<'_>) -> Option<Vec<u16>> {
    let runs: Vec<u16> = DIGIT_RUN
        .find_iter(token.text)
        .map(|m| m.as_str().parse::<u16>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    match runs.as_slice() {
        [] => None,
        [single] => Some(vec![*single]),
        [first, last] => {
            if last < first || last - first > MAX_RANGE_SPAN {
                return None;
            }
            Some((*first..=*last).collect())
        }
        many => {
            let consecutive = many.windows(2).all(|w| w[1] == w[0] + 1);
            consecutive.then(|| many.to_vec())
        }
    }
}

fn outcome(candidate: &Candidate<'_>) -> NumberingOutcome {
    NumberingOutcome {
        numbering: Numbering::Absolute {
            episodes: candidate.numbers.clone(),
        },
        position: candidate.token.offset,
        mini: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MemoryLookup;
    use crate::pipeline;
    use crate::segment;
    use showforge_common::{Episode, SeriesId, SeriesType};

    fn anime_series() -> Series {
        Series::new(SeriesId::from(1), "Hunter X Hunter", SeriesType::Anime)
    }

    fn library(absolutes: &[u16]) -> MemoryLookup {
        let mut lookup = MemoryLookup::new();
        for (idx, &n) in absolutes.iter().enumerate() {
            lookup.add_episode(
                Episode::new((idx as i64).into(), SeriesId::from(1), 1, n)
                    .with_absolute_number(n),
            );
        }
        lookup
    }

    fn episodes_of(title: &str, series: Option<&Series>, lookup: &MemoryLookup) -> Vec<u16> {
        let info = pipeline::run(segment::fragments(title));
        match extract(&info, series, lookup).expect("no pattern defects") {
            Some(NumberingOutcome {
                numbering: Numbering::Absolute { episodes },
                ..
            }) => episodes,
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_single_absolute_number() {
        let series = anime_series();
        let lookup = library(&[33]);
        let eps = episodes_of(
            "[HorribleSubs] Hunter X Hunter - 33 [720p]",
            Some(&series),
            &lookup,
        );
        assert_eq!(eps, vec![33]);
    }

    #[test]
    fn test_range_expansion() {
        let lookup = library(&[]);
        let eps = episodes_of("[Group] Show - 101-103 [720p]", None, &lookup);
        assert_eq!(eps, vec![101, 102, 103]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let lookup = library(&[]);
        let eps = episodes_of("[Group] Show - 105-103 [720p]", None, &lookup);
        assert!(eps.is_empty());
    }

    #[test]
    fn test_overlong_range_rejected() {
        let lookup = library(&[]);
        let eps = episodes_of("[Group] Show - 100-190 [720p]", None, &lookup);
        assert!(eps.is_empty());
    }

    #[test]
    fn subset_retry_is_first_match_not_most_specific() {
        // The range 33-34 fails (34 unknown), so its single-number subsets
        // are retried in order and 33 wins even though 34 would also be a
        // defensible pick if it were known.
        let series = anime_series();
        let lookup = library(&[33]);
        let eps = episodes_of("[Group] Show - 33-34 [720p]", Some(&series), &lookup);
        assert_eq!(eps, vec![33]);
    }

    #[test]
    fn test_year_air_date_inference() {
        let series = anime_series();
        let mut lookup = MemoryLookup::new();
        lookup.add_episode(
            Episode::new(1.into(), SeriesId::from(1), 1, 7)
                .with_absolute_number(7)
                .with_air_date(chrono::NaiveDate::from_ymd_opt(2011, 3, 1).unwrap()),
        );
        let info = pipeline::run(segment::fragments("Show.2011.HDTV.x264"));
        let outcome = extract(&info, Some(&series), &lookup)
            .expect("no pattern defects")
            .expect("year inference should fire");
        assert_eq!(
            outcome.numbering,
            Numbering::Absolute { episodes: vec![7] }
        );
    }
}
