//! Quality tiers and revision markers.

/// Quality tier of a release, ordered from worst to best.
///
/// The ordering is meaningful: upgrade decisions compare tiers directly, so
/// the variants are declared in ascending order of desirability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Quality {
    #[default]
    Unknown,
    Sdtv,
    Dvd,
    WebDl480p,
    Hdtv720p,
    WebDl720p,
    Bluray720p,
    Hdtv1080p,
    WebDl1080p,
    Bluray1080p,
    RawHd,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quality::Unknown => "Unknown",
            Quality::Sdtv => "SDTV",
            Quality::Dvd => "DVD",
            Quality::WebDl480p => "WEBDL-480p",
            Quality::Hdtv720p => "HDTV-720p",
            Quality::WebDl720p => "WEBDL-720p",
            Quality::Bluray720p => "Bluray-720p",
            Quality::Hdtv1080p => "HDTV-1080p",
            Quality::WebDl1080p => "WEBDL-1080p",
            Quality::Bluray1080p => "Bluray-1080p",
            Quality::RawHd => "RAWHD",
        };
        write!(f, "{name}")
    }
}

/// Re-release state of a single quality tier.
///
/// `version` starts at 1 for an original release and rises with PROPER,
/// REPACK, and `v2`..`v9` markers. `real` counts REAL markers that follow the
/// episode numbering; a REAL release corrects content rather than packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Revision {
    pub version: u8,
    pub real: u8,
}

impl Default for Revision {
    fn default() -> Self {
        Self { version: 1, real: 0 }
    }
}

impl Revision {
    pub fn new(version: u8, real: u8) -> Self {
        Self { version, real }
    }

    /// Whether this revision supersedes the original release.
    pub fn is_repack(&self) -> bool {
        self.version > 1
    }
}
