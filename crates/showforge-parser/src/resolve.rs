//! Series resolution.
//!
//! After the pipeline has classified what it can, the unclassified words at
//! the front of the title are probed against the library with growing
//! windows. A match consumes the probed words; the caller then blanks them
//! out and re-runs the pipeline exactly once, so quality and numbering are
//! re-read with the series title out of the way. The state machine is
//! deliberately small: `Unresolved` to `ProbeMatched` to `Reparsed`, never
//! more than one re-parse per title.

use crate::model::{ParsedInfo, Token};
use crate::segment;
use crate::SeriesLookup;
use showforge_common::{clean_series_title, Series};

/// Where a title sits in the resolve/re-parse cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveState {
    /// No lookup probe has matched.
    Unresolved,
    /// A probe matched; the consumed words await blanking.
    ProbeMatched,
    /// The one permitted context re-parse has run.
    Reparsed,
}

/// A successful series probe.
#[derive(Debug, Clone)]
pub struct SeriesMatch<'a> {
    pub series: Series,
    /// Tokens the probe consumed; the re-parse blanks these spans.
    pub consumed: Vec<Token<'a>>,
}

/// Probe the library for the series a title refers to.
pub fn resolve_series<'a>(
    input: &'a str,
    info: &ParsedInfo<'a>,
    lookup: &dyn SeriesLookup,
) -> Option<SeriesMatch<'a>> {
    let mut words = Vec::new();
    for token in &info.unknown {
        words.extend(segment::split_words(token));
    }
    if let Some(m) = probe_windows(&words, info, lookup) {
        return Some(m);
    }
    if let Some(m) = probe_combinations(info, lookup) {
        return Some(m);
    }

    // A series title can lose one of its own words to a signal category
    // ("Show 720p"); once every window over the unknown words has missed,
    // retry the windows over the whole separator-split title.
    let whole = Token::new(input, 0, input.len(), false);
    probe_windows(&segment::split_words(&whole), info, lookup)
}

/// Growing windows from the first word, probed by title then title+year.
fn probe_windows<'a>(
    words: &[Token<'a>],
    info: &ParsedInfo<'a>,
    lookup: &dyn SeriesLookup,
) -> Option<SeriesMatch<'a>> {
    for n in 1..=words.len() {
        let probe = clean_join(&words[..n]);
        if probe.is_empty() {
            continue;
        }
        if let Some(series) = lookup.find_by_title(&probe) {
            tracing::debug!(probe, series = %series.title, "series matched by title window");
            return Some(SeriesMatch {
                series,
                consumed: words[..n].to_vec(),
            });
        }
        for year in &info.years {
            let Ok(y) = year.text.parse::<u16>() else {
                continue;
            };
            if let Some(series) = lookup.find_by_title_and_year(&probe, y) {
                tracing::debug!(probe, year = y, series = %series.title, "series matched by title and year");
                let mut consumed = words[..n].to_vec();
                consumed.push(*year);
                return Some(SeriesMatch { series, consumed });
            }
        }
    }
    None
}

/// Fallback probes: one unknown token combined with one numbering or
/// checksum signal, in both orders.
fn probe_combinations<'a>(
    info: &ParsedInfo<'a>,
    lookup: &dyn SeriesLookup,
) -> Option<SeriesMatch<'a>> {
    for token in &info.unknown {
        let token_words = segment::split_words(token);
        if token_words.is_empty() {
            continue;
        }
        let base = clean_join(&token_words);
        let signals = info
            .years
            .iter()
            .chain(&info.absolute_episodes)
            .chain(&info.hashes)
            .chain(&info.seasons);
        for signal in signals {
            let signal_text = clean_series_title(signal.text);
            for probe in [
                format!("{base} {signal_text}"),
                format!("{signal_text} {base}"),
            ] {
                if let Some(series) = lookup.find_by_title(&probe) {
                    tracing::debug!(probe, series = %series.title, "series matched by fallback probe");
                    let mut consumed = token_words.clone();
                    consumed.push(*signal);
                    return Some(SeriesMatch { series, consumed });
                }
            }
        }
    }
    None
}

/// Replace the consumed spans of `input` with spaces, preserving length so
/// every surviving span keeps its offset.
pub fn blank_spans(input: &str, consumed: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, ch) in input.char_indices() {
        let inside = consumed.iter().any(|t| t.offset <= idx && idx < t.end());
        if inside {
            for _ in 0..ch.len_utf8() {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn clean_join(words: &[Token<'_>]) -> String {
    let joined = words
        .iter()
        .map(|w| w.text)
        .collect::<Vec<_>>()
        .join(" ");
    clean_series_title(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MemoryLookup;
    use crate::pipeline;
    use showforge_common::{SeriesId, SeriesType};

    fn parse(title: &str) -> ParsedInfo<'_> {
        let mut info = pipeline::run(segment::fragments(title));
        crate::conflict::recover_release_groups(&mut info);
        info
    }

    fn library() -> MemoryLookup {
        let mut lookup = MemoryLookup::new();
        lookup.add_series(Series::new(
            SeriesId::from(1),
            "Hunter X Hunter",
            SeriesType::Anime,
        ));
        lookup.add_series(
            Series::new(SeriesId::from(2), "Castle 2009", SeriesType::Standard).with_year(2009),
        );
        lookup
    }

    #[test]
    fn test_window_probe_skips_promoted_group() {
        let input = "[HorribleSubs] Hunter X Hunter - 33 [720p]";
        let info = parse(input);
        let m = resolve_series(input, &info, &library()).expect("series should resolve");
        assert_eq!(m.series.title, "Hunter X Hunter");
        let consumed: Vec<_> = m.consumed.iter().map(|t| t.text).collect();
        assert_eq!(consumed, vec!["Hunter", "X", "Hunter"]);
    }

    #[test]
    fn test_title_and_year_probe() {
        let input = "Castle.2009.S01E14.French.HDTV.XviD-LOL";
        let info = parse(input);
        let m = resolve_series(input, &info, &library()).expect("series should resolve");
        assert_eq!(m.series.title, "Castle 2009");
        assert!(m.consumed.iter().any(|t| t.text == "2009"));
    }

    #[test]
    fn test_whole_title_retry_rescues_classified_word() {
        // "720p" is claimed as a resolution, so no unknown-word window can
        // cover the full series title; the whole-title retry still can.
        let input = "Show.720p.S01E01.HDTV.XviD-LOL";
        let info = parse(input);
        let mut lookup = library();
        lookup.add_series(Series::new(
            SeriesId::from(4),
            "Show 720p",
            SeriesType::Standard,
        ));
        let m = resolve_series(input, &info, &lookup).expect("series should resolve");
        assert_eq!(m.series.title, "Show 720p");
        let consumed: Vec<_> = m.consumed.iter().map(|t| t.text).collect();
        assert_eq!(consumed, vec!["Show", "720p"]);
    }

    #[test]
    fn test_unmatched_title_stays_unresolved() {
        let input = "Some.Unknown.Show.S01E01.HDTV";
        let info = parse(input);
        assert!(resolve_series(input, &info, &library()).is_none());
    }

    #[test]
    fn test_blank_spans_preserves_offsets() {
        let input = "Castle.2009.S01E14";
        let token = Token::new("Castle", 0, input.len(), false);
        let blanked = blank_spans(input, &[token]);
        assert_eq!(blanked.len(), input.len());
        assert_eq!(&blanked[7..11], "2009");
        assert!(blanked.starts_with("      ."));
    }
}
