//! Accumulated signal state for a title under analysis.

use super::token::{Category, Token};

/// Everything the analyzer pipeline has learned about a title so far.
///
/// Each category holds the tokens assigned to it, kept free of redundancy by
/// the subsumption rule: a token whose span is already covered by a recorded
/// token is dropped, and recording a token evicts any recorded token it
/// covers.
#[derive(Debug, Default, Clone)]
pub struct ParsedInfo<'a> {
    pub seasons: Vec<Token<'a>>,
    pub absolute_episodes: Vec<Token<'a>>,
    pub daily_dates: Vec<Token<'a>>,
    pub hashes: Vec<Token<'a>>,
    pub languages: Vec<Token<'a>>,
    pub resolutions: Vec<Token<'a>>,
    pub codecs: Vec<Token<'a>>,
    pub audios: Vec<Token<'a>>,
    pub sources: Vec<Token<'a>>,
    pub specials: Vec<Token<'a>>,
    pub years: Vec<Token<'a>>,
    pub propers: Vec<Token<'a>>,
    pub reals: Vec<Token<'a>>,
    pub extensions: Vec<Token<'a>>,
    /// Fragments no analyzer claimed, in discovery order.
    pub unknown: Vec<Token<'a>>,
    /// Release-group candidates recovered from unknown fragments.
    pub release_groups: Vec<Token<'a>>,
}

impl<'a> ParsedInfo<'a> {
    /// Record a token under a category, applying the subsumption rule.
    pub fn record(&mut self, category: Category, token: Token<'a>) {
        merge_subsuming(self.category_mut(category), token);
    }

    pub fn category(&self, category: Category) -> &Vec<Token<'a>> {
        match category {
            Category::SeasonEpisode => &self.seasons,
            Category::AbsoluteEpisode => &self.absolute_episodes,
            Category::DailyDate => &self.daily_dates,
            Category::Hash => &self.hashes,
            Category::Language => &self.languages,
            Category::Resolution => &self.resolutions,
            Category::Codec => &self.codecs,
            Category::Audio => &self.audios,
            Category::Source => &self.sources,
            Category::Special => &self.specials,
            Category::Year => &self.years,
            Category::Proper => &self.propers,
            Category::Real => &self.reals,
            Category::FileExtension => &self.extensions,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut Vec<Token<'a>> {
        match category {
            Category::SeasonEpisode => &mut self.seasons,
            Category::AbsoluteEpisode => &mut self.absolute_episodes,
            Category::DailyDate => &mut self.daily_dates,
            Category::Hash => &mut self.hashes,
            Category::Language => &mut self.languages,
            Category::Resolution => &mut self.resolutions,
            Category::Codec => &mut self.codecs,
            Category::Audio => &mut self.audios,
            Category::Source => &mut self.sources,
            Category::Special => &mut self.specials,
            Category::Year => &mut self.years,
            Category::Proper => &mut self.propers,
            Category::Real => &mut self.reals,
            Category::FileExtension => &mut self.extensions,
        }
    }

    /// Offset of the earliest classified signal, if any.
    ///
    /// Unknown fragments, recovered release groups, and years are not
    /// signals; a year usually belongs to the series title, and the result
    /// marks where the descriptive tail of the title begins.
    pub fn first_signal_offset(&self) -> Option<usize> {
        [
            &self.seasons,
            &self.absolute_episodes,
            &self.daily_dates,
            &self.hashes,
            &self.languages,
            &self.resolutions,
            &self.codecs,
            &self.audios,
            &self.sources,
            &self.specials,
            &self.propers,
            &self.reals,
            &self.extensions,
        ]
        .into_iter()
        .flatten()
        .map(|t| t.offset)
        .min()
    }
}

/// Merge `token` into `items` under the subsumption rule.
///
/// Returns whether the token was kept.
pub fn merge_subsuming<'a>(items: &mut Vec<Token<'a>>, token: Token<'a>) -> bool {
    if items.iter().any(|existing| existing.contains(&token)) {
        return false;
    }
    items.retain(|existing| !token.contains(existing));
    items.push(token);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, offset: usize) -> Token<'_> {
        Token::new(text, offset, 100, false)
    }

    #[test]
    fn test_subsumption_rejects_contained_newcomer() {
        let mut items = vec![tok("S01E01-06", 6)];
        assert!(!merge_subsuming(&mut items, tok("S01E01", 6)));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "S01E01-06");
    }

    #[test]
    fn test_subsumption_evicts_contained_incumbent() {
        let mut items = vec![tok("S01E01", 6)];
        assert!(merge_subsuming(&mut items, tok("S01E01-06", 6)));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "S01E01-06");
    }

    #[test]
    fn test_subsumption_keeps_disjoint_tokens() {
        let mut items = vec![tok("S01E01", 6)];
        assert!(merge_subsuming(&mut items, tok("S02E02", 30)));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_equal_span_is_rejected() {
        let mut items = vec![tok("720p", 6)];
        assert!(!merge_subsuming(&mut items, tok("720p", 6)));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_first_signal_offset() {
        let mut info = ParsedInfo::default();
        assert_eq!(info.first_signal_offset(), None);
        info.record(Category::Source, tok("HDTV", 40));
        info.record(Category::SeasonEpisode, tok("S01E01", 12));
        info.unknown.push(tok("Chuck", 0));
        assert_eq!(info.first_signal_offset(), Some(12));
    }
}
