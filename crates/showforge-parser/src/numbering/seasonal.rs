//! Season/episode extraction and candidate reconciliation.

use super::{capture_u16, NumberingOutcome};
use crate::analyzers::rx;
use crate::error::Result;
use crate::lookup::EpisodeLookup;
use crate::model::{Numbering, ParsedInfo, Token};
use regex::Regex;
use showforge_common::Series;
use std::sync::LazyLock;

/// Longest a plausible episode list can run.
const MAX_EPISODES: usize = 20;

/// `Season 2 Episode 3` wording.
static WORDED: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)^season[\W_]*(?P<season>\d{1,2})[\W_]+episode[\W_]*(?P<first>\d{1,4})$")
});

/// `S03E01-06`: inline season/episode with an explicit range.
static INLINE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)^s(?P<season>\d{1,2})[\W_]?e(?:p(?:isode)?)?[\W_]?(?P<first>\d{1,4})[\W_]?-[\W_]?(?:e(?:p)?)?(?P<last>\d{1,4})$")
});

/// `S01E05`, `S01E01E02`, `1x05`, `4x05x06`: season then an episode list.
static INLINE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)^s?(?P<season>\d{1,2})(?P<eps>(?:[\W_]?[ex][\W_]?\d{1,4})+)$")
});

/// `Part 3`, `Ep.2`, `E01-02`: episode shorthand with no season.
static MINI: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)^(?:ep?|episode|part|pt)[\W_]?(?P<first>\d{1,3})(?:[\W_]?-[\W_]?(?P<last>\d{1,3}))?$")
});

/// `103`, `1013`: compressed digit pair.
static BARE_PAIR: LazyLock<Regex> = LazyLock::new(|| rx(r"^(?P<pair>\d{3,4})$"));

/// `Season 1`, `S02`: a season with no episodes, a full-season pack.
static SEASON_ONLY: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?i)^s(?:eason)?[\W_]?(?P<season>\d{1,2})$"));

/// Every `S<digits>` occurrence; more than one distinct season inside a
/// single token is a garbled name, not a multi-season release.
static SEASON_MENTION: LazyLock<Regex> = LazyLock::new(|| rx(r"(?i)s(?P<season>\d{1,2})"));

static YEAR_SHAPED: LazyLock<Regex> = LazyLock::new(|| rx(r"^(?:19[4-9]\d|20\d{2})$"));

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| rx(r"\d+"));

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate<'a> {
    token: Token<'a>,
    /// `None` for mini/special shorthand; defaults to season 1 at the end.
    season: Option<u16>,
    episodes: Vec<u16>,
    full_season: bool,
}

impl Candidate<'_> {
    fn agrees_with(&self, other: &Self) -> bool {
        self.season == other.season
            && self.episodes == other.episodes
            && self.full_season == other.full_season
    }
}

/// Extract season/episode numbering from the season-shaped tokens.
pub fn extract(
    info: &ParsedInfo<'_>,
    series: Option<&Series>,
    episodes: &dyn EpisodeLookup,
) -> Result<Option<NumberingOutcome>> {
    let mut candidates = Vec::new();
    for token in &info.seasons {
        if distinct_season_mentions(token) > 1 {
            tracing::trace!(token = token.text, "discarding multi-season token");
            continue;
        }
        if let Some(candidate) = interpret(token)? {
            candidates.push(candidate);
        }
    }

    if let Some(series) = series {
        candidates.retain(|c| validates(c, series, episodes));
    }

    Ok(reconcile(candidates, info).map(|winner| NumberingOutcome {
        position: winner.token.offset,
        mini: winner.season.is_none(),
        numbering: Numbering::Seasonal {
            season: winner.season.unwrap_or(1),
            episodes: winner.episodes,
            full_season: winner.full_season,
        },
    }))
}

/// Run the shape tiers over one token; the first tier that fits wins.
fn interpret<'a>(token: &Token<'a>) -> Result<Option<Candidate<'a>>> {
    if let Some(caps) = WORDED.captures(token.text) {
        let season = capture_u16(&caps, "season", "season-worded")?;
        let first = capture_u16(&caps, "first", "season-worded")?;
        return Ok(Some(candidate(token, Some(season), vec![first], false)));
    }
    if let Some(caps) = INLINE_RANGE.captures(token.text) {
        let season = capture_u16(&caps, "season", "season-inline-range")?;
        let first = capture_u16(&caps, "first", "season-inline-range")?;
        let last = capture_u16(&caps, "last", "season-inline-range")?;
        return Ok(expand_range(first, last).map(|eps| candidate(token, Some(season), eps, false)));
    }
    if let Some(caps) = INLINE_LIST.captures(token.text) {
        let season = capture_u16(&caps, "season", "season-inline-list")?;
        let eps_text = caps
            .name("eps")
            .ok_or(crate::error::ParseError::MissingCapture {
                pattern: "season-inline-list",
                group: "eps",
            })?;
        let list: Vec<u16> = DIGIT_RUN
            .find_iter(eps_text.as_str())
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        return Ok(episode_list(list).map(|eps| candidate(token, Some(season), eps, false)));
    }
    if let Some(caps) = MINI.captures(token.text) {
        let first = capture_u16(&caps, "first", "season-mini")?;
        let eps = match caps.name("last") {
            Some(last) => expand_range(first, last.as_str().parse().unwrap_or(0)),
            None => Some(vec![first]),
        };
        return Ok(eps.map(|eps| candidate(token, None, eps, false)));
    }
    if let Some(caps) = BARE_PAIR.captures(token.text) {
        let pair = capture_u16(&caps, "pair", "season-bare-pair")?;
        let (season, episode) = (pair / 100, pair % 100);
        if season == 0 {
            return Ok(None);
        }
        return Ok(Some(candidate(token, Some(season), vec![episode], false)));
    }
    if let Some(caps) = SEASON_ONLY.captures(token.text) {
        let season = capture_u16(&caps, "season", "season-only")?;
        return Ok(Some(candidate(token, Some(season), Vec::new(), true)));
    }
    Ok(None)
}

/// Expand `first..=last`, salvaging an inverted pair as its first number.
fn expand_range(first: u16, last: u16) -> Option<Vec<u16>> {
    if last < first {
        // Two captures with the numbers flipped: keep the first rather than
        // throwing the whole token away.
        return Some(vec![first]);
    }
    let eps: Vec<u16> = (first..=last).collect();
    (eps.len() <= MAX_EPISODES).then_some(eps)
}

/// Apply the list rules to explicitly enumerated episodes.
fn episode_list(list: Vec<u16>) -> Option<Vec<u16>> {
    match list.as_slice() {
        [] => None,
        [first, last] if last < first => Some(vec![*first]),
        _ if list.len() > MAX_EPISODES => None,
        _ => Some(list),
    }
}

fn distinct_season_mentions(token: &Token<'_>) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for caps in SEASON_MENTION.captures_iter(token.text) {
        if let Some(m) = caps.name("season") {
            if !seen.contains(&m.as_str()) {
                seen.push(m.as_str());
            }
        }
    }
    seen.len()
}

fn validates(candidate: &Candidate<'_>, series: &Series, episodes: &dyn EpisodeLookup) -> bool {
    if candidate.episodes.is_empty() {
        return true;
    }
    let season = candidate.season.unwrap_or(1);
    let known = episodes.episodes_by_season(series.id, season);
    if known.is_empty() {
        // Nothing to validate against; trust the shape.
        return true;
    }
    candidate
        .episodes
        .iter()
        .all(|n| known.iter().any(|e| e.number == *n))
}

/// Reconcile disagreeing candidates down to one reading.
///
/// Filters fire in order, each only when it leaves at least one candidate:
/// drop year-shaped tokens, drop season-less shorthand, drop full-season
/// packs. If the survivors are single episodes of one season they collapse
/// into a range; anything still ambiguous parses as nothing.
fn reconcile<'a>(
    mut candidates: Vec<Candidate<'a>>,
    info: &ParsedInfo<'_>,
) -> Option<Candidate<'a>> {
    loop {
        match candidates.as_slice() {
            [] => return None,
            [first, rest @ ..] if rest.iter().all(|c| c.agrees_with(first)) => {
                return candidates.into_iter().next();
            }
            _ => {}
        }

        if drop_where(&mut candidates, |c| is_year_shaped(c, info))
            || drop_where(&mut candidates, |c| c.season.is_none())
            || drop_where(&mut candidates, |c| c.full_season)
        {
            continue;
        }

        return merge_singles(candidates);
    }
}

/// Drop the candidates matching `reject`, but never all of them. Returns
/// whether anything changed.
fn drop_where(
    candidates: &mut Vec<Candidate<'_>>,
    reject: impl Fn(&Candidate<'_>) -> bool,
) -> bool {
    let kept: Vec<_> = candidates.iter().filter(|c| !reject(c)).cloned().collect();
    if kept.is_empty() || kept.len() == candidates.len() {
        return false;
    }
    *candidates = kept;
    true
}

fn is_year_shaped(candidate: &Candidate<'_>, info: &ParsedInfo<'_>) -> bool {
    YEAR_SHAPED.is_match(candidate.token.text)
        || info.years.iter().any(|y| y.text == candidate.token.text)
}

/// Same-season single episodes collapse into an inclusive range.
fn merge_singles<'a>(candidates: Vec<Candidate<'a>>) -> Option<Candidate<'a>> {
    let all_singles = candidates
        .iter()
        .all(|c| c.episodes.len() == 1 && !c.full_season);
    if !all_singles {
        return None;
    }
    let season = candidates.first()?.season;
    if !candidates.iter().all(|c| c.season == season) {
        return None;
    }
    let min = candidates.iter().map(|c| c.episodes[0]).min()?;
    let max = candidates.iter().map(|c| c.episodes[0]).max()?;
    let merged: Vec<u16> = (min..=max).collect();
    if merged.len() > MAX_EPISODES {
        return None;
    }
    let mut winner = candidates.into_iter().next()?;
    winner.episodes = merged;
    Some(winner)
}

fn candidate<'a>(
    token: &Token<'a>,
    season: Option<u16>,
    episodes: Vec<u16>,
    full_season: bool,
) -> Candidate<'a> {
    Candidate {
        token: *token,
        season,
        episodes,
        full_season,
    }
}
