//! Analyzers for numbering signals: season/episode markers, absolute
//! episode numbers, air dates, years, and checksum-shaped spans.

use super::{rx, scan_pattern, Analyzer};
use crate::model::{Category, Token};
use regex::Regex;
use std::sync::LazyLock;

/// `S01E05`, `Season 1 Episode 2`, `S03E01-06`, `Season 2`.
static SEASON_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>s(?:eason)?[\W_]?\d{1,2}(?:[\W_]?(?:e(?:p(?:isode)?)?|x)[\W_]?\d{1,4}(?:[\W_]?[ex-][\W_]?\d{1,4})*)?)(?:[\W_]|$)")
});

/// `1x05`, `4x05x06`.
static CROSS_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>\d{1,2}x\d{2,4}(?:[\W_]?[x-][\W_]?\d{2,4})*)(?:[\W_]|$)")
});

/// `Part 1`, `Pt.2`, `Ep03`, `E01`. No season number; the extractor
/// defaults these to season 1 and flags the result as a mini/special.
static MINI_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>(?:ep?|episode|part|pt)[\W_]?\d{1,3}(?:[\W_]?-[\W_]?\d{1,3})?)(?:[\W_]|$)")
});

/// Bare 3-4 digit run: compressed season/episode pair (`103` = S01E03).
static BARE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?:^|[\W_])(?P<m>\d{3,4})(?:[\W_]|$)"));

/// Season/episode markers in every shape the scene uses.
pub struct SeasonEpisodeAnalyzer;

impl Analyzer for SeasonEpisodeAnalyzer {
    fn category(&self) -> Category {
        Category::SeasonEpisode
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&SEASON_EPISODE, token, &mut hits);
        scan_pattern(&CROSS_NUMBER, token, &mut hits);
        scan_pattern(&MINI_NUMBER, token, &mut hits);
        scan_pattern(&BARE_PAIR, token, &mut hits);
        hits
    }
}

/// `- 33`, `- 101-102`, optionally with a trailing `v2` version marker.
/// The hyphen with separators on both sides is the anime numbering
/// convention; without it a digit run stays available for other analyzers.
static ABSOLUTE_AFTER_DASH: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?:^|[\W_])-[\W_]*(?P<m>\d{2,3}(?:[-_. ]\d{2,3})*)(?:[\W_]?[vV]\d)?(?:[\W_]|$)")
});

/// A bracket group holding nothing but an episode number: `[12]`, `[01v2]`.
static ABSOLUTE_BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| rx(r"^(?P<m>\d{2,3}(?:[-_. ]\d{2,3})*)(?:[vV]\d)?$"));

/// Absolute episode numbers in anime naming conventions.
pub struct AbsoluteEpisodeAnalyzer;

impl Analyzer for AbsoluteEpisodeAnalyzer {
    fn category(&self) -> Category {
        Category::AbsoluteEpisode
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&ABSOLUTE_AFTER_DASH, token, &mut hits);
        if token.bracketed {
            scan_pattern(&ABSOLUTE_BRACKETED, token, &mut hits);
        }
        hits
    }
}

/// Air-date shapes, year first: `2020.01.05`, `2020 05 01`, `20-01-05`.
/// Swapped day/month and the two-digit-year pivot are the date extractor's
/// concern; the analyzer only claims the span.
static DAILY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?:^|[\W_])(?P<m>(?:19|20)\d{2}[-_. /]\d{1,2}[-_. /]\d{1,2}|\d{2}[-_. ]\d{2}[-_. ]\d{2})(?:[\W_]|$)")
});

/// Air dates in release titles.
pub struct DailyDateAnalyzer;

impl Analyzer for DailyDateAnalyzer {
    fn category(&self) -> Category {
        Category::DailyDate
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&DAILY_DATE, token, &mut hits);
        hits
    }
}

/// Plausible first-aired years. Nothing before 1940 is claimed; older
/// four-digit runs are more likely titles or episode numbers.
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?:^|[\W_])(?P<m>19[4-9]\d|20\d{2})(?:[\W_]|$)"));

/// Four-digit year markers.
pub struct YearAnalyzer;

impl Analyzer for YearAnalyzer {
    fn category(&self) -> Category {
        Category::Year
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&YEAR, token, &mut hits);
        hits
    }
}

/// Eight hex digits: a CRC32 checksum as anime groups embed them.
static HASH: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?:^|[\W_])(?P<m>[0-9a-fA-F]{8})(?:[\W_]|$)"));

/// Checksum-shaped spans. Whether one is legitimate is decided later, once
/// the series type is known.
pub struct HashAnalyzer;

impl Analyzer for HashAnalyzer {
    fn category(&self) -> Category {
        Category::Hash
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&HASH, token, &mut hits);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{bracketed, texts, token};
    use super::*;

    #[test]
    fn test_standard_season_episode() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Chuck.S04E05.HDTV"));
        assert_eq!(texts(&hits), vec!["S04E05"]);
    }

    #[test]
    fn test_episode_range() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("WEEDS.S03E01-06.DUAL"));
        assert_eq!(texts(&hits), vec!["S03E01-06"]);
    }

    #[test]
    fn test_cross_notation() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show.4x05x06.720p"));
        assert_eq!(texts(&hits), vec!["4x05x06"]);
    }

    #[test]
    fn test_spelled_out_wording() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show Season 2 Episode 3 HDTV"));
        assert_eq!(texts(&hits), vec!["Season 2 Episode 3"]);
    }

    #[test]
    fn test_season_alone() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show.Season.1.DVDRip"));
        assert_eq!(texts(&hits), vec!["Season.1"]);
    }

    #[test]
    fn test_bare_pair() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show.Title.103.HDTV"));
        assert_eq!(texts(&hits), vec!["103"]);
    }

    #[test]
    fn test_bare_pair_not_taken_from_resolution() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show.Title.720p"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_mini_shorthand() {
        let hits = SeasonEpisodeAnalyzer.scan(&token("Show.Part.3.HDTV"));
        assert_eq!(texts(&hits), vec!["Part.3"]);
    }

    #[test]
    fn test_absolute_after_dash() {
        let hits = AbsoluteEpisodeAnalyzer.scan(&token(" Hunter X Hunter - 33 "));
        assert_eq!(texts(&hits), vec!["33"]);
    }

    #[test]
    fn test_absolute_ignores_episode_range_dash() {
        // The dash in `E01-06` binds to the digits, not to a separator run.
        let hits = AbsoluteEpisodeAnalyzer.scan(&token("WEEDS.S03E01-06.DUAL"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_absolute_bracketed() {
        let hits = AbsoluteEpisodeAnalyzer.scan(&bracketed("12"));
        assert_eq!(texts(&hits), vec!["12"]);
        assert!(AbsoluteEpisodeAnalyzer.scan(&token("12")).is_empty());
    }

    #[test]
    fn test_absolute_version_suffix_left_behind() {
        let hits = AbsoluteEpisodeAnalyzer.scan(&token(" Title - 33v2 "));
        assert_eq!(texts(&hits), vec!["33"]);
    }

    #[test]
    fn test_daily_date() {
        let hits = DailyDateAnalyzer.scan(&token("The.Daily.Show.2020.01.05.HDTV"));
        assert_eq!(texts(&hits), vec!["2020.01.05"]);
    }

    #[test]
    fn test_daily_date_ignores_plain_year() {
        let hits = DailyDateAnalyzer.scan(&token("Castle.2009.S01E14"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_year() {
        let hits = YearAnalyzer.scan(&token("Castle.2009.S01E14"));
        assert_eq!(texts(&hits), vec!["2009"]);
        assert!(YearAnalyzer.scan(&token("Show.1013.HDTV")).is_empty());
    }

    #[test]
    fn test_hash() {
        let hits = HashAnalyzer.scan(&bracketed("ABCD1234"));
        assert_eq!(texts(&hits), vec!["ABCD1234"]);
        assert!(HashAnalyzer.scan(&token("ABCDEFGH")).is_empty());
    }
}
