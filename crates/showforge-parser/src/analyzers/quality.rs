//! Analyzers for quality signals: resolution, video codec, audio codec,
//! distribution source, and the trailing file extension.

use super::{rx, scan_pattern, Analyzer};
use crate::model::{Category, Token};
use regex::Regex;
use std::sync::LazyLock;

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>(?:480|576|720|1080|2160)[pi]|1280x720|1920x1080|3840x2160)(?:[\W_]|$)")
});

/// Video resolution markers, as a named tier or literal dimensions.
pub struct ResolutionAnalyzer;

impl Analyzer for ResolutionAnalyzer {
    fn category(&self) -> Category {
        Category::Resolution
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&RESOLUTION, token, &mut hits);
        hits
    }
}

static CODEC: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>xvidhd|xvid|divx|x26[45]|h[-_. ]?26[45]|hevc|avc|av1|vp9)(?:[\W_]|$)")
});

/// Video codec markers.
pub struct CodecAnalyzer;

impl Analyzer for CodecAnalyzer {
    fn category(&self) -> Category {
        Category::Codec
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&CODEC, token, &mut hits);
        hits
    }
}

static AUDIO: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>dts[-_. ]?hd(?:[-_. ]?(?:ma|hra))?|dts|true[-_. ]?hd|atmos|e[-_. ]?ac3|ac3|dd[p+]?[-_. ]?[2571][-_. ]?[01]|ddp|aac(?:[-_. ]?2[-_. ]?0)?|mp3|flac|opus|[57][-_. ]1)(?:[\W_]|$)")
});

/// Audio codec and channel-layout markers.
pub struct AudioAnalyzer;

impl Analyzer for AudioAnalyzer {
    fn category(&self) -> Category {
        Category::Audio
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&AUDIO, token, &mut hits);
        hits
    }
}

static SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)(?:^|[\W_])(?P<m>raw[-_. ]?hd(?:tv)?|mpeg[-_. ]?2|blu[-_. ]?ray|bd[-_. ]?mux|bd[-_. ]?rip|br[-_. ]?rip|web[-_. ]?dl|web[-_. ]?rip|web[-_. ]?mux|web|hdtv|pdtv|sdtv|dsr(?:ip)?|sat[-_. ]?rip|tv[-_. ]?rip|dvd[-_. ]?rip|dvd[-_. ]?mux|dvd[59]|dvdr?|hd[-_. ]?rip|b[dr][-_. ]?remux|remux)(?:[\W_]|$)")
});

/// Distribution source markers.
pub struct SourceAnalyzer;

impl Analyzer for SourceAnalyzer {
    fn category(&self) -> Category {
        Category::Source
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        let mut hits = Vec::new();
        scan_pattern(&SOURCE, token, &mut hits);
        hits
    }
}

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\.(?P<m>mkv|mp4|avi|wmv|mov|mpg|mpeg|m4v|m2ts|ts|webm|strm|iso|img)$")
});

/// The trailing file extension.
///
/// Only fires on the fragment that reaches the very end of the title.
/// Codec names like `XviD` are never claimed, even at the end; a title
/// ending in its codec still needs that codec for quality classification.
pub struct ExtensionAnalyzer;

impl Analyzer for ExtensionAnalyzer {
    fn category(&self) -> Category {
        Category::FileExtension
    }

    fn scan<'a>(&self, token: &Token<'a>) -> Vec<Token<'a>> {
        if token.end() != token.total_len {
            return Vec::new();
        }
        let mut hits = Vec::new();
        scan_pattern(&EXTENSION, token, &mut hits);
        hits
    }
}
