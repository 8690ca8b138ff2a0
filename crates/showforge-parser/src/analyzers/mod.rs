//! Token analyzers.
//!
//! Each analyzer recognizes one signal class inside a fragment. The pipeline
//! offers every fragment to the roster in order; the first analyzer that
//! claims a sub-span wins the fragment, and the unclaimed gaps go back on
//! the work queue. Roster order therefore doubles as precedence: date shapes
//! outrank years, years outrank bare season/episode digit pairs.

mod markers;
mod numeric;
mod quality;

use crate::model::info::merge_subsuming;
use crate::model::{Category, Token};
use regex::Regex;
use std::sync::LazyLock;

pub use markers::{LanguageAnalyzer, ProperAnalyzer, RealAnalyzer, SpecialAnalyzer};
pub use numeric::{
    AbsoluteEpisodeAnalyzer, DailyDateAnalyzer, HashAnalyzer, SeasonEpisodeAnalyzer, YearAnalyzer,
};
pub use quality::{
    AudioAnalyzer, CodecAnalyzer, ExtensionAnalyzer, ResolutionAnalyzer, SourceAnalyzer,
};

/// Recognizes one signal class inside a fragment.
pub trait Analyzer: Send + Sync {
    fn category(&self) -> Category;
    /// All sub-spans of `token` this analyzer claims, free of redundancy.
    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>>;
}

/// The full analyzer roster in precedence order.
pub fn roster() -> &'static [Box<dyn Analyzer>] {
    static ROSTER: LazyLock<Vec<Box<dyn Analyzer>>> = LazyLock::new(|| {
        vec![
            Box::new(ExtensionAnalyzer),
            Box::new(DailyDateAnalyzer),
            Box::new(YearAnalyzer),
            Box::new(AbsoluteEpisodeAnalyzer),
            Box::new(SeasonEpisodeAnalyzer),
            Box::new(ResolutionAnalyzer),
            Box::new(CodecAnalyzer),
            Box::new(AudioAnalyzer),
            Box::new(SourceAnalyzer),
            Box::new(LanguageAnalyzer),
            Box::new(SpecialAnalyzer),
            Box::new(ProperAnalyzer),
            Box::new(RealAnalyzer),
            Box::new(HashAnalyzer),
        ]
    });
    &ROSTER
}

/// Compile a pattern, panicking at first use on a malformed table entry.
pub(crate) fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern `{pattern}`: {e}"))
}

/// Collect the claimed spans of `re` over `token`.
///
/// The span is the `m` capture when the pattern names one, otherwise the
/// whole match. Patterns use consumed separator runs as boundaries, so two
/// adjacent occurrences may need a second pass over the remainder; the
/// pipeline's work queue provides it.
pub(crate) fn scan_pattern<'a>(re: &Regex, token: &Token<'a>, hits: &mut Vec<Token<'a>>) {
    for caps in re.captures_iter(token.text) {
        let Some(m) = caps.name("m").or_else(|| caps.get(0)) else {
            continue;
        };
        merge_subsuming(hits, token.slice(m.start(), m.end()));
    }
}
