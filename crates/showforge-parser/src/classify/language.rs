//! Language classification.
//!
//! Spelled-out language tokens come from the pipeline; a secondary
//! case-sensitive pass over the whole title catches terse markers like
//! `VOSTFR` or `ita` that would be unsafe to match case-insensitively.
//! The first non-English finding wins; otherwise releases default to
//! English, which scene names leave untagged.

use crate::analyzers::rx;
use crate::model::{Language, ParsedInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Word fragments mapped to languages, checked in order against the
/// lowercased token text. More specific entries come first: `truefrench`
/// before `french`, `hundub` before plain `hungarian`.
const WORD_MAP: &[(&str, Language)] = &[
    ("truefrench", Language::French),
    ("vostfr", Language::French),
    ("french", Language::French),
    ("espanol", Language::Spanish),
    ("castellano", Language::Spanish),
    ("spanish", Language::Spanish),
    ("deutsch", Language::German),
    ("german", Language::German),
    ("italian", Language::Italian),
    ("danish", Language::Danish),
    ("flemish", Language::Flemish),
    ("dutch", Language::Dutch),
    ("japanese", Language::Japanese),
    ("cantonese", Language::Cantonese),
    ("mandarin", Language::Mandarin),
    ("chinese", Language::Mandarin),
    ("korean", Language::Korean),
    ("russian", Language::Russian),
    ("polish", Language::Polish),
    ("vietnamese", Language::Vietnamese),
    ("swedish", Language::Swedish),
    ("norwegian", Language::Norwegian),
    ("nordic", Language::Norwegian),
    ("finnish", Language::Finnish),
    ("turkish", Language::Turkish),
    ("portuguese", Language::Portuguese),
    ("greek", Language::Greek),
    ("hundub", Language::Hungarian),
    ("hungarian", Language::Hungarian),
    ("hebrew", Language::Hebrew),
    ("czech", Language::Czech),
    ("multi", Language::Multi),
    ("dual", Language::Multi),
    ("english", Language::English),
];

/// Case-sensitive markers too terse for the analyzer's word list. `ITA` is
/// a language; `Ita` is somebody's name.
static TERSE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?:^|[-._ ])(?:(?P<french>FR|VF|VOSTFR)|(?P<italian>ita|ITA)|(?P<german>ger|GER)|(?P<russian>rus|RUS)|(?P<hungarian>HUN|HUNDUB)|(?P<dutch>NLsubs?|nlsubs?)|(?P<greek>GREEK))(?:[-._ ]|$)")
});

/// Classify the audio language of a release.
pub fn classify(input: &str, info: &ParsedInfo<'_>) -> Language {
    let mut found: Vec<Language> = Vec::new();

    for token in &info.languages {
        let text = token.text.to_ascii_lowercase();
        if let Some((_, language)) = WORD_MAP.iter().find(|(needle, _)| text.contains(needle)) {
            found.push(*language);
        }
    }

    for caps in TERSE_MARKERS.captures_iter(input) {
        for (group, language) in [
            ("french", Language::French),
            ("italian", Language::Italian),
            ("german", Language::German),
            ("russian", Language::Russian),
            ("hungarian", Language::Hungarian),
            ("dutch", Language::Dutch),
            ("greek", Language::Greek),
        ] {
            if caps.name(group).is_some() {
                found.push(language);
            }
        }
    }

    found
        .into_iter()
        .find(|l| *l != Language::English)
        .unwrap_or(Language::English)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use crate::segment;

    fn language_of(title: &str) -> Language {
        let info = pipeline::run(segment::fragments(title));
        classify(title, &info)
    }

    #[test]
    fn test_untagged_defaults_to_english() {
        assert_eq!(language_of("Chuck.S04E05.HDTV.XviD-LOL"), Language::English);
    }

    #[test]
    fn test_spelled_out_language() {
        assert_eq!(
            language_of("Castle.2009.S01E14.French.HDTV.XviD-LOL"),
            Language::French
        );
        assert_eq!(
            language_of("Show.S01E01.German.DL.1080p.WEB-DL"),
            Language::German
        );
    }

    #[test]
    fn test_dual_audio_is_multi() {
        assert_eq!(
            language_of("WEEDS.S03E01-06.DUAL.BDRip.XviD.AC3.-HELLYWOOD"),
            Language::Multi
        );
    }

    #[test]
    fn test_terse_marker_is_case_sensitive() {
        assert_eq!(language_of("Show.S01E01.VOSTFR.HDTV"), Language::French);
        assert_eq!(language_of("Show.S01E01.ITA.HDTV"), Language::Italian);
        // Lowercase `fr` inside ordinary words never fires.
        assert_eq!(language_of("Friends.S01E01.HDTV"), Language::English);
    }

    #[test]
    fn test_non_english_beats_explicit_english_tag() {
        assert_eq!(
            language_of("Show.S01E01.English.French.HDTV"),
            Language::French
        );
    }
}
