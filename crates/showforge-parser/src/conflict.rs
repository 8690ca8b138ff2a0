//! Post-pipeline conflict resolution: release-group recovery from unknown
//! fragments and checksum legitimacy.

use crate::model::{ParsedInfo, Token};
use crate::segment;
use showforge_common::SeriesType;
use std::sync::LazyLock;

/// Release-group word shape: optional short prefix, hyphen, then the group
/// name. `-LOL` and `x264-KILLERS` both qualify; `Blue-Bloods` does not,
/// because recovery only looks behind the first classified signal.
static GROUP_SHAPE: LazyLock<regex::Regex> = LazyLock::new(|| {
    crate::analyzers::rx(r"^(?P<prefix>[0-9A-Za-z]{1,5})?-(?P<group>\w{3,})$")
});

/// Recover release-group candidates from the unknown fragments.
///
/// A bracket group opening the title is the subtitle-group convention and
/// is promoted first. After that, hyphen-led words outrank prefixed ones.
/// Promoted fragments leave the unknown pool so they cannot pollute series
/// title windows.
pub fn recover_release_groups(info: &mut ParsedInfo<'_>) {
    if let Some(pos) = info
        .unknown
        .iter()
        .position(|t| t.bracketed && t.offset <= 1)
    {
        let leading = info.unknown.remove(pos);
        info.release_groups.push(leading);
    }

    let Some(first_signal) = info.first_signal_offset() else {
        return;
    };

    let mut hyphen_led = Vec::new();
    let mut prefixed = Vec::new();
    let mut consumed = Vec::new();
    for (idx, token) in info.unknown.iter().enumerate() {
        if token.offset < first_signal {
            continue;
        }
        for word in segment::split_words(token) {
            let Some(caps) = GROUP_SHAPE.captures(word.text) else {
                continue;
            };
            let Some(group) = caps.name("group") else {
                continue;
            };
            let candidate = word.slice(group.start(), group.end());
            if caps.name("prefix").is_none() {
                hyphen_led.push(candidate);
            } else {
                prefixed.push(candidate);
            }
            if consumed.last() != Some(&idx) {
                consumed.push(idx);
            }
        }
    }

    let mut removed = 0usize;
    for idx in consumed {
        info.unknown.remove(idx - removed);
        removed += 1;
    }
    info.release_groups.extend(hyphen_led);
    info.release_groups.extend(prefixed);
}

/// Decide whether a checksum-shaped span is legitimate.
///
/// Only anime releases carry checksums. A checksum is legitimate when it is
/// the sole candidate and sits at the very tail of the name, with nothing
/// but separators between it and the extension (or the end). Two or more
/// candidates mean the shape matched coincidental text; all of them demote
/// back to unknown.
pub fn resolve_hashes(info: &mut ParsedInfo<'_>, input: &str, kind: Option<SeriesType>) {
    if info.hashes.is_empty() {
        return;
    }
    let tail_end = info
        .extensions
        .first()
        .map(|e| e.offset)
        .unwrap_or(input.len());
    let keep = kind == Some(SeriesType::Anime)
        && info.hashes.len() == 1
        && {
            let hash = &info.hashes[0];
            hash.end() <= tail_end
                && input[hash.end()..tail_end]
                    .chars()
                    .all(|c| !c.is_alphanumeric())
        };
    if keep {
        return;
    }
    let demoted: Vec<_> = info.hashes.drain(..).collect();
    info.unknown.extend(demoted);
    info.unknown.sort_by_key(|t| t.offset);
}
