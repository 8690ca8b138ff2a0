//! The fixed-point analysis driver.
//!
//! Fragments go on a work queue. Each is offered to the analyzer roster in
//! precedence order; the first analyzer claiming a sub-span wins, the
//! claimed spans are recorded, and the gaps between them return to the
//! queue. Every re-enqueued remainder is strictly shorter than its source,
//! so the loop terminates. Fragments no analyzer claims become unknown
//! tokens, which later feed series resolution and release-group recovery.

use crate::analyzers;
use crate::model::{ParsedInfo, Token};
use std::collections::VecDeque;

/// Run the analyzer roster over `fragments` to a fixed point.
pub fn run<'a>(fragments: Vec<Token<'a>>) -> ParsedInfo<'a> {
    let roster = analyzers::roster();
    let mut info = ParsedInfo::default();
    let mut queue: VecDeque<Token<'a>> = fragments.into();

    while let Some(token) = queue.pop_front() {
        let mut claimed = false;
        for analyzer in roster {
            let hits = analyzer.scan(&token);
            if hits.is_empty() {
                continue;
            }
            let mut spans: Vec<(usize, usize)> =
                hits.iter().map(|h| (h.offset, h.end())).collect();
            spans.sort_unstable();
            tracing::trace!(
                category = ?analyzer.category(),
                fragment = token.text,
                hits = hits.len(),
                "analyzer claimed fragment"
            );
            for hit in hits {
                info.record(analyzer.category(), hit);
            }
            for rem in remainders(&token, &spans) {
                if rem.has_alphanumeric() {
                    queue.push_back(rem);
                }
            }
            claimed = true;
            break;
        }
        if !claimed {
            info.unknown.push(token);
        }
    }

    info.unknown.sort_by_key(|t| t.offset);
    cleanup(&mut info);
    info
}

/// The gaps of `token` left over after removing `spans` (absolute offsets).
fn remainders<'a>(token: &Token<'a>, spans: &[(usize, usize)]) -> Vec<Token<'a>> {
    let mut out = Vec::new();
    let mut cursor = 0usize;
    for &(start, end) in spans {
        let rel_start = start.saturating_sub(token.offset);
        let rel_end = end - token.offset;
        if rel_start > cursor {
            out.push(token.slice(cursor, rel_start));
        }
        cursor = cursor.max(rel_end);
    }
    if cursor < token.text.len() {
        out.push(token.slice(cursor, token.text.len()));
    }
    out
}

/// Cross-category repairs after the fixed point is reached.
///
/// A resolution span and a season or hash span claiming the same text means
/// one analyzer mis-fired; the numbering reading loses. A codec span
/// overlapping a season or absolute span likewise invalidates the numbers.
fn cleanup(info: &mut ParsedInfo<'_>) {
    let resolutions = info.resolutions.clone();
    info.seasons
        .retain(|s| !resolutions.iter().any(|r| r.contains(s) || s.contains(r)));
    info.hashes
        .retain(|h| !resolutions.iter().any(|r| r.contains(h) || h.contains(r)));

    let codecs = info.codecs.clone();
    info.seasons.retain(|s| !codecs.iter().any(|c| c.overlaps(s)));
    info.absolute_episodes
        .retain(|a| !codecs.iter().any(|c| c.overlaps(a)));
}
