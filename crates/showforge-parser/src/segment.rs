//! Title segmentation.
//!
//! Splits a raw title into fragments before analysis: square-bracket groups
//! become their own fragments (flagged as bracketed), parenthesized groups
//! are split out of the remaining text, and fragments without any letter or
//! digit are dropped. Byte offsets into the original string are preserved so
//! downstream spans stay comparable.

use crate::model::Token;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Mirror-image season/episode or resolution markers betray a reversed title.
static REVERSED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[-._ ])(?:p027|p0801|p0612|\d{1,2}E\d{1,2}S)(?:[-._ ]|$)")
        .unwrap_or_else(|e| panic!("invalid reversed-marker pattern: {e}"))
});

/// Undo character-reversal vandalism, leaving normal titles untouched.
///
/// A reversed title shows markers like `p027` or `50E10S`. The file
/// extension, when present, is not reversed with the rest of the name.
pub fn normalize_reversed(title: &str) -> Cow<'_, str> {
    if !REVERSED_MARKER.is_match(title) {
        return Cow::Borrowed(title);
    }
    let (stem, ext) = match title.rfind('.') {
        Some(idx)
            if title.len() - idx <= 5
                && title[idx + 1..].chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            (&title[..idx], &title[idx..])
        }
        _ => (title, ""),
    };
    let mut out: String = stem.chars().rev().collect();
    out.push_str(ext);
    Cow::Owned(out)
}

/// Split a title into analyzable fragments.
pub fn fragments(input: &str) -> Vec<Token<'_>> {
    let total_len = input.len();
    let mut out = Vec::new();
    for (range, bracketed) in split_groups(input, 0, '[', ']') {
        if bracketed {
            push_fragment(&mut out, input, range, total_len, true);
        } else {
            for (inner, parenthesized) in split_groups(&input[range.clone()], range.start, '(', ')')
            {
                // Parenthesized groups are fragment boundaries but carry no
                // bracket semantics.
                let _ = parenthesized;
                push_fragment(&mut out, input, inner, total_len, false);
            }
        }
    }
    out
}

/// Split a title into its separator-delimited words.
///
/// Separators are `.`, `_`, and spaces; hyphens stay attached to their word
/// so release-group shapes like `-LOL` survive. Words without a letter or
/// digit are dropped.
pub fn split_words<'a>(token: &Token<'a>) -> Vec<Token<'a>> {
    let mut out = Vec::new();
    let mut start = None;
    for (idx, ch) in token.text.char_indices() {
        if matches!(ch, '.' | '_' | ' ') {
            if let Some(s) = start.take() {
                let word = token.slice(s, idx);
                if word.has_alphanumeric() {
                    out.push(word);
                }
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        let word = token.slice(s, token.text.len());
        if word.has_alphanumeric() {
            out.push(word);
        }
    }
    out
}

/// Split `text` into top-level `open`..`close` groups and the runs between
/// them. Ranges are absolute (shifted by `base`). Nested groups stay inside
/// their outermost group.
fn split_groups(
    text: &str,
    base: usize,
    open: char,
    close: char,
) -> Vec<(std::ops::Range<usize>, bool)> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut run_start = 0usize;
    let mut group_start = 0usize;
    for (idx, ch) in text.char_indices() {
        if ch == open {
            if depth == 0 {
                if idx > run_start {
                    out.push((base + run_start..base + idx, false));
                }
                group_start = idx + open.len_utf8();
            }
            depth += 1;
        } else if ch == close && depth > 0 {
            depth -= 1;
            if depth == 0 {
                out.push((base + group_start..base + idx, true));
                run_start = idx + close.len_utf8();
            }
        }
    }
    if run_start < text.len() {
        // An unclosed group falls back to plain text.
        let tail_start = if depth > 0 { group_start } else { run_start };
        out.push((base + tail_start..base + text.len(), false));
    }
    out
}

fn push_fragment<'a>(
    out: &mut Vec<Token<'a>>,
    input: &'a str,
    range: std::ops::Range<usize>,
    total_len: usize,
    bracketed: bool,
) {
    let token = Token::new(&input[range.clone()], range.start, total_len, bracketed);
    if token.has_alphanumeric() {
        out.push(token);
    }
}
