//! Analyzers for marker words: spelled-out languages, special-episode
//! markers, and re-release markers.

use super::{rx, scan_pattern, Analyzer};
use crate::model::{Category, Token};
use regex::Regex;
use std::sync::LazyLock;

/// Spelled-out language names and multi-audio markers. Terse two/three
/// letter codes are deliberately absent; those are matched case-sensitively
/// by the language classifier to keep ordinary title words safe.
static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>english|truefrench|french|vostfr|spanish|espanol|castellano|german|deutsch|italian|danish|dutch|flemish|japanese|cantonese|mandarin|chinese|korean|russian|polish|vietnamese|swedish|norwegian|nordic|finnish|turkish|portuguese|greek|hungarian|hundub|hebrew|czech|multi(?:[-_. ]?(?:audio|lang))?|dual(?:[-_. ]?audio)?)(?:[\W_]|$)")
});

pub struct LanguageAnalyzer;

impl Analyzer for LanguageAnalyzer {
    fn category(&self) -> Category {
        Category::Language
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&LANGUAGE, token, &mut hits);
        hits
    }
}

static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?i)(?:^|[\W_])(?P<m>specials?|ova|oad|omake)(?:[\W_]|$)"));

/// Special-episode markers.
pub struct SpecialAnalyzer;

impl Analyzer for SpecialAnalyzer {
    fn category(&self) -> Category {
        Category::Special
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&SPECIAL, token, &mut hits);
        hits
    }
}

static PROPER: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?i)(?:^|[\W_])(?P<m>proper|repack|rerip|v[2-9])(?:[\W_]|$)"));

/// Re-release markers that bump the revision version.
pub struct ProperAnalyzer;

impl Analyzer for ProperAnalyzer {
    fn category(&self) -> Category {
        Category::Proper
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&PROPER, token, &mut hits);
        hits
    }
}

/// `REAL` must keep its casing; the ordinary word "real" appears in plenty
/// of series titles.
static REAL: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?:^|[\W_])(?P<m>REAL)(?:[\W_]|$)"));

pub struct RealAnalyzer;

impl Analyzer for RealAnalyzer {
    fn category(&self) -> Category {
        Category::Real
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&REAL, token, &mut hits);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{texts, token};
    use super::*;

    #[test]
    fn test_language_words() {
        let hits = LanguageAnalyzer.scan(&token(".S01E14.French.HDTV"));
        assert_eq!(texts(&hits), vec!["French"]);
        let hits = LanguageAnalyzer.scan(&token(".S03E01-06.DUAL.BDRip"));
        assert_eq!(texts(&hits), vec!["DUAL"]);
    }

    #[test]
    fn test_special_markers() {
        let hits = SpecialAnalyzer.scan(&token("Show.OVA.720p"));
        assert_eq!(texts(&hits), vec!["OVA"]);
    }

    #[test]
    fn test_proper_and_version() {
        let hits = ProperAnalyzer.scan(&token(".REAL.PROPER.720p"));
        assert_eq!(texts(&hits), vec!["PROPER"]);
        let hits = ProperAnalyzer.scan(&token(".v2.720p"));
        assert_eq!(texts(&hits), vec!["v2"]);
    }

    #[test]
    fn test_real_is_case_sensitive() {
        assert_eq!(texts(&RealAnalyzer.scan(&token(".REAL.PROPER"))), vec!["REAL"]);
        assert!(RealAnalyzer.scan(&token("The.Real.World")).is_empty());
    }
}
