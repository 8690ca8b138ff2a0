//! Quality classification.
//!
//! An ordered cascade over the recognized source, resolution, and codec
//! tokens. Earlier rules are more specific; the first rule whose signals
//! are present decides the tier. The cascade never errors, it only gets
//! less confident, ending at an extension-based guess and finally
//! `Unknown`.

use crate::analyzers::rx;
use crate::model::{ParsedInfo, Quality, Revision, Token};
use regex::Regex;
use std::sync::LazyLock;

static VERSION_MARKER: LazyLock<Regex> = LazyLock::new(|| rx(r"(?i)^v(?P<n>[2-9])$"));

/// A standalone `HD` word rescues a resolution-less broadcast rip from SDTV.
static BARE_HD: LazyLock<Regex> = LazyLock::new(|| rx(r"(?i)(?:^|[\W_])hd(?:[\W_]|$)"));

/// Anime bluray shorthand: `[BD]`, `BD 1080p`.
static ANIME_BD: LazyLock<Regex> =
    LazyLock::new(|| rx(r"(?i)(?:^|[\W_])bd(?:[\W_]?(?:720|1080))?(?:[\W_]|$)"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ResolutionClass {
    R480,
    R576,
    R720,
    R1080,
    R2160,
}

/// Classify the quality tier and revision of a release.
///
/// `numbering_position` is where the winning numbering token started; REAL
/// markers before it belong to the series title, not the revision.
pub fn classify(
    input: &str,
    info: &ParsedInfo<'_>,
    numbering_position: Option<usize>,
) -> (Quality, Revision) {
    (tier(input, info), revision(info, numbering_position))
}

fn tier(input: &str, info: &ParsedInfo<'_>) -> Quality {
    let source = |needle: &[&str]| {
        info.sources
            .iter()
            .any(|t| matches_any(t, needle))
    };
    let resolution = resolution_class(info);

    // Broadcast-grade MPEG2 transport streams.
    if source(&["rawhd", "rawhdtv", "mpeg2", "mpeg-2", "mpeg.2", "mpeg_2"]) {
        return Quality::RawHd;
    }

    let xvid_class = info
        .codecs
        .iter()
        .any(|t| matches_any(t, &["xvid", "divx", "xvidhd"]));

    if source(&["bluray", "blu-ray", "blu.ray", "blu_ray", "bdmux", "bd-mux", "bd.mux"]) {
        if xvid_class {
            return Quality::Dvd;
        }
        return match resolution {
            Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => Quality::Bluray1080p,
            Some(ResolutionClass::R480) | Some(ResolutionClass::R576) => Quality::Dvd,
            _ => Quality::Bluray720p,
        };
    }

    if source(&[
        "webdl", "web-dl", "web.dl", "web_dl", "web", "webrip", "web-rip", "web.rip", "web_rip",
        "webmux", "web-mux", "web.mux",
    ]) {
        return match resolution {
            Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => Quality::WebDl1080p,
            Some(ResolutionClass::R720) => Quality::WebDl720p,
            _ => Quality::WebDl480p,
        };
    }

    if source(&["hdtv", "pdtv"]) {
        return match resolution {
            Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => Quality::Hdtv1080p,
            Some(ResolutionClass::R720) => Quality::Hdtv720p,
            Some(ResolutionClass::R480) | Some(ResolutionClass::R576) => Quality::Sdtv,
            None => {
                if BARE_HD.is_match(input) {
                    Quality::Hdtv720p
                } else {
                    Quality::Sdtv
                }
            }
        };
    }

    if source(&["bdrip", "bd-rip", "bd.rip", "bd_rip", "brrip", "br-rip", "br.rip", "br_rip"]) {
        return match resolution {
            Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => Quality::Bluray1080p,
            Some(ResolutionClass::R720) => Quality::Bluray720p,
            _ => Quality::Dvd,
        };
    }

    if source(&[
        "dvd", "dvdr", "dvd5", "dvd9", "dvdrip", "dvd-rip", "dvd.rip", "dvd_rip", "dvdmux",
        "dvd-mux", "dvd.mux", "xvidvd",
    ]) {
        return Quality::Dvd;
    }

    if source(&["sdtv", "dsr", "dsrip", "tvrip", "tv-rip", "tv.rip", "tv_rip", "satrip", "sat-rip", "sat.rip", "sat_rip"]) {
        return Quality::Sdtv;
    }

    if ANIME_BD.is_match(input) {
        return match resolution {
            Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => Quality::Bluray1080p,
            Some(ResolutionClass::R480) | Some(ResolutionClass::R576) => Quality::Dvd,
            _ => Quality::Bluray720p,
        };
    }

    match resolution {
        Some(ResolutionClass::R1080) | Some(ResolutionClass::R2160) => {
            return Quality::Hdtv1080p
        }
        Some(ResolutionClass::R720) => return Quality::Hdtv720p,
        Some(ResolutionClass::R480) | Some(ResolutionClass::R576) => return Quality::Sdtv,
        None => {}
    }

    if info.codecs.iter().any(|t| matches_any(t, &["x264", "h264", "h.264", "h-264", "h_264"])) {
        return Quality::Sdtv;
    }

    if let Some(ext) = info.extensions.first() {
        return extension_fallback(ext.text);
    }

    Quality::Unknown
}

/// The last resort: guess from the container when the name says nothing.
fn extension_fallback(extension: &str) -> Quality {
    match extension.to_ascii_lowercase().as_str() {
        "avi" | "wmv" | "mp4" | "mpg" | "mpeg" | "mov" => Quality::Sdtv,
        "mkv" | "ts" | "m2ts" | "m4v" | "webm" => Quality::Hdtv720p,
        _ => Quality::Unknown,
    }
}

fn revision(info: &ParsedInfo<'_>, numbering_position: Option<usize>) -> Revision {
    let mut version: u8 = 1;
    for token in &info.propers {
        if let Some(caps) = VERSION_MARKER.captures(token.text) {
            let marked = caps
                .name("n")
                .and_then(|m| m.as_str().parse::<u8>().ok())
                .unwrap_or(2);
            version = version.max(marked);
        } else {
            version = version.max(2);
        }
    }

    let real = match numbering_position {
        Some(pos) => info.reals.iter().filter(|t| t.offset > pos).count() as u8,
        None => 0,
    };

    Revision::new(version, real)
}

fn resolution_class(info: &ParsedInfo<'_>) -> Option<ResolutionClass> {
    let mut best: Option<ResolutionClass> = None;
    for token in &info.resolutions {
        let text = token.text.to_ascii_lowercase();
        let class = if text.contains("2160") || text.contains("3840") {
            ResolutionClass::R2160
        } else if text.contains("1080") || text.contains("1920") {
            ResolutionClass::R1080
        } else if text.contains("720") || text.contains("1280") {
            ResolutionClass::R720
        } else if text.contains("576") {
            ResolutionClass::R576
        } else if text.contains("480") {
            ResolutionClass::R480
        } else {
            continue;
        };
        best = Some(match best {
            Some(current) if current >= class => current,
            _ => class,
        });
    }
    best
}

fn matches_any(token: &Token<'_>, needles: &[&str]) -> bool {
    let text = token.text.to_ascii_lowercase();
    needles.iter().any(|n| text == *n)
}
