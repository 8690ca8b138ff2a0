//! Release-name parsing for episodic video.
//!
//! `showforge-parser` turns scene-style release titles and file paths into
//! structured episode information: series, numbering, quality, revision,
//! language, and release group. Parsing is a multi-pass pipeline:
//!
//! 1. [`segment`] splits the title into fragments,
//! 2. the analyzer roster classifies spans to a fixed point,
//! 3. unclassified words resolve the series against a [`SeriesLookup`],
//!    with one context re-parse after a match,
//! 4. numbering, quality, and language extractors read the classified
//!    state into a [`ParsedEpisodeInfo`].
//!
//! "Not parseable" is an ordinary outcome (`Ok(None)`); errors are
//! reserved for internal pattern defects.
//!
//! ```
//! use showforge_parser::Parser;
//!
//! let parser = Parser::standalone();
//! let info = parser
//!     .parse_title("Chuck.S04E05.HDTV.XviD-LOL")?
//!     .expect("well-formed release name");
//! assert_eq!(info.season(), Some(4));
//! assert_eq!(info.episodes(), &[5]);
//! assert_eq!(info.release_group.as_deref(), Some("LOL"));
//! # Ok::<(), showforge_parser::ParseError>(())
//! ```

pub mod analyzers;
pub mod classify;
pub mod conflict;
pub mod error;
pub mod lookup;
pub mod model;
pub mod numbering;
pub mod pipeline;
pub mod resolve;
pub mod segment;

pub use error::{ParseError, Result};
pub use lookup::{EpisodeLookup, MemoryLookup, NoLookup, SeriesLookup};
pub use model::{Category, Language, Numbering, ParsedEpisodeInfo, ParsedInfo, Quality, Revision, Token};

use crate::resolve::ResolveState;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Titles that are nothing but a checksum: md5-shaped, short-id-shaped, or
/// a bare CRC32 with an optional extension.
static HASHED_TITLES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[0-9a-zA-Z]{32}$",
        r"^[a-z0-9]{24}$",
        r"^[0-9a-fA-F]{8}(?:\.[a-zA-Z0-9]{2,4})?$",
    ]
    .into_iter()
    .map(analyzers::rx)
    .collect()
});

/// The parsing engine, wired to the caller's library.
///
/// Both lookups may be [`NoLookup`]; parsing then runs without series
/// resolution or numbering validation.
pub struct Parser<'a> {
    series: &'a dyn SeriesLookup,
    episodes: &'a dyn EpisodeLookup,
}

impl<'a> Parser<'a> {
    pub fn new(series: &'a dyn SeriesLookup, episodes: &'a dyn EpisodeLookup) -> Self {
        Self { series, episodes }
    }

    /// A parser with no library behind it.
    pub fn standalone() -> Parser<'static> {
        Parser {
            series: &NoLookup,
            episodes: &NoLookup,
        }
    }

    /// Parse a release title.
    ///
    /// Returns `Ok(None)` for titles that carry no episode information:
    /// junk names, bare checksums, or titles where no numbering survives
    /// reconciliation.
    pub fn parse_title(&self, title: &str) -> Result<Option<ParsedEpisodeInfo>> {
        let trimmed = title.trim();
        if !trimmed.chars().any(char::is_alphanumeric) {
            return Ok(None);
        }
        if is_hashed_junk(trimmed) || is_spam(trimmed) {
            tracing::debug!(title = trimmed, "rejected junk title");
            return Ok(None);
        }

        let normalized = segment::normalize_reversed(trimmed);
        let input: &str = &normalized;

        let mut first_pass = pipeline::run(segment::fragments(input));
        conflict::recover_release_groups(&mut first_pass);

        let mut state = ResolveState::Unresolved;
        let series_match = resolve::resolve_series(input, &first_pass, self.series);

        let reparsed: String;
        let (series, active, mut info) = match series_match {
            Some(m) => {
                state = ResolveState::ProbeMatched;
                tracing::trace!(state = ?state, series = %m.series.title, "re-parsing with series context");
                reparsed = resolve::blank_spans(input, &m.consumed);
                let mut second_pass = pipeline::run(segment::fragments(&reparsed));
                conflict::recover_release_groups(&mut second_pass);
                state = ResolveState::Reparsed;
                (Some(m.series), reparsed.as_str(), second_pass)
            }
            None => (None, input, first_pass),
        };

        conflict::resolve_hashes(&mut info, active, series.as_ref().map(|s| s.kind));

        let outcome = numbering::extract(&info, series.as_ref(), self.episodes)?;
        let special =
            !info.specials.is_empty() || outcome.as_ref().map_or(false, |o| o.mini);
        if outcome.is_none() && !special {
            tracing::debug!(state = ?state, title = trimmed, "no numbering found");
            return Ok(None);
        }

        let position = outcome.as_ref().map(|o| o.position);
        let (quality, revision) = classify::quality::classify(active, &info, position);
        let language = classify::language::classify(active, &info);
        let series_title = match &series {
            Some(s) => s.title.clone(),
            None => title_guess(&info),
        };
        tracing::debug!(
            state = ?state,
            series = series_title,
            quality = %quality,
            "parsed release title"
        );

        Ok(Some(ParsedEpisodeInfo {
            series_title,
            series,
            numbering: outcome.map(|o| o.numbering),
            quality,
            revision,
            language,
            release_group: info.release_groups.first().map(|t| t.text.to_string()),
            release_hash: info.hashes.first().map(|t| t.text.to_string()),
            special,
        }))
    }

    /// Parse a file path, trying the filename alone, then the parent
    /// directory combined with the filename, then the directory with just
    /// the extension (for releases stored as `Show.S01E01/abc.mkv`).
    pub fn parse_path(&self, path: &Path) -> Result<Option<ParsedEpisodeInfo>> {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };
        if let Some(parsed) = self.parse_title(file_name)? {
            return Ok(Some(parsed));
        }
        let Some(dir_name) = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            return Ok(None);
        };
        if let Some(parsed) = self.parse_title(&format!("{dir_name} {file_name}"))? {
            return Ok(Some(parsed));
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if let Some(parsed) = self.parse_title(&format!("{dir_name}.{ext}"))? {
                return Ok(Some(parsed));
            }
        }
        Ok(None)
    }
}

/// Extract just the release group from a title.
pub fn parse_release_group(title: &str) -> Option<String> {
    let normalized = segment::normalize_reversed(title.trim());
    let mut info = pipeline::run(segment::fragments(&normalized));
    conflict::recover_release_groups(&mut info);
    info.release_groups.first().map(|t| t.text.to_string())
}

/// Extract just the language from a title.
pub fn parse_language(title: &str) -> Language {
    let normalized = segment::normalize_reversed(title.trim());
    let info = pipeline::run(segment::fragments(&normalized));
    classify::language::classify(&normalized, &info)
}

fn is_hashed_junk(title: &str) -> bool {
    HASHED_TITLES.iter().any(|re| re.is_match(title))
}

/// Obfuscated spam names pair a password hint with an encoding marker.
fn is_spam(title: &str) -> bool {
    let lower = title.to_ascii_lowercase();
    lower.contains("password") && lower.contains("yenc")
}

/// Best-effort series title when no lookup matched: the unclassified words
/// before the first recognized signal, joined as written.
fn title_guess(info: &ParsedInfo<'_>) -> String {
    let boundary = info.first_signal_offset().unwrap_or(usize::MAX);
    let mut words = Vec::new();
    for token in &info.unknown {
        for word in segment::split_words(token) {
            if word.offset < boundary {
                words.push(word.text);
            }
        }
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_junk_rejected() {
        let parser = Parser::standalone();
        assert!(parser
            .parse_title("8bc83239a8d99f37bd191792a6180030")
            .expect("guard must not error")
            .is_none());
        assert!(parser
            .parse_title("ABCD1234.mkv")
            .expect("guard must not error")
            .is_none());
        // Opaque lowercase identifier, exactly 24 characters.
        assert!(parser
            .parse_title("abcdefghijklmnopqrstuvwx")
            .expect("guard must not error")
            .is_none());
    }

    #[test]
    fn test_spam_pair_rejected() {
        let parser = Parser::standalone();
        let result = parser
            .parse_title("Show.S01E01 password protected yEnc")
            .expect("guard must not error");
        assert!(result.is_none());
    }

    #[test]
    fn test_no_alphanumeric_rejected() {
        let parser = Parser::standalone();
        assert!(parser.parse_title("[]---___").expect("trivial").is_none());
    }

    #[test]
    fn test_quality_only_title_is_not_an_episode() {
        let parser = Parser::standalone();
        assert!(parser
            .parse_title("Some.Movie.720p.BluRay.x264")
            .expect("no defects")
            .is_none());
    }

    #[test]
    fn test_title_guess_stops_at_first_signal() {
        let parser = Parser::standalone();
        let info = parser
            .parse_title("Parks.and.Recreation.S02E21.HDTV.XviD-GRP")
            .expect("no defects")
            .expect("parses");
        assert_eq!(info.series_title, "Parks and Recreation");
    }

    #[test]
    fn test_parse_path_uses_directory_context() {
        let parser = Parser::standalone();
        let info = parser
            .parse_path(Path::new("Show.S01E05.720p.HDTV/group-release.mkv"))
            .expect("no defects")
            .expect("directory carries the numbering");
        assert_eq!(info.season(), Some(1));
        assert_eq!(info.episodes(), &[5]);
    }

    #[test]
    fn test_parse_language_on_reversed_title() {
        assert_eq!(
            parse_language("VTDH.HCNERF.50E10S.kcuhC"),
            Language::French
        );
    }

    #[test]
    fn test_parse_release_group_helper() {
        assert_eq!(
            parse_release_group("Chuck.S04E05.HDTV.XviD-LOL").as_deref(),
            Some("LOL")
        );
        assert_eq!(parse_release_group("Chuck.S04E05.HDTV"), None);
    }

    #[test]
    fn test_reversed_title_parses() {
        let parser = Parser::standalone();
        let info = parser
            .parse_title("LOL-DIVX.VTDH.50E10S.kcuhC")
            .expect("no defects")
            .expect("reversal is undone before parsing");
        assert_eq!(info.season(), Some(1));
        assert_eq!(info.episodes(), &[5]);
    }
}
