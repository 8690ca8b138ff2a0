//! Classified spans of a release title.
//!
//! A [`Token`] is a borrowed slice of the title under analysis together with
//! its absolute position. Positions always refer to the full title string, so
//! two tokens produced from different fragments can still be compared by span.

/// Signal classes a span of the title can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Season/episode numbering (`S01E05`, `1x05`, `103`, `Season 1`).
    SeasonEpisode,
    /// Absolute episode numbering (`- 33`, `[12]`).
    AbsoluteEpisode,
    /// Air-date numbering (`2020.01.05`).
    DailyDate,
    /// Checksum-shaped span (8 hex digits).
    Hash,
    /// Spelled-out language marker.
    Language,
    /// Video resolution (`720p`, `1920x1080`).
    Resolution,
    /// Video codec (`x264`, `XviD`).
    Codec,
    /// Audio codec (`AC3`, `DTS-HD`).
    Audio,
    /// Distribution source (`HDTV`, `BluRay`, `WEB-DL`).
    Source,
    /// Special-episode marker (`OVA`, `Special`).
    Special,
    /// Four-digit year.
    Year,
    /// Re-release marker (`PROPER`, `REPACK`, `v2`).
    Proper,
    /// Corrected-content marker (`REAL`, case sensitive).
    Real,
    /// Trailing file extension.
    FileExtension,
}

/// A span of the title under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The text of the span.
    pub text: &'a str,
    /// Byte offset of the span within the full title.
    pub offset: usize,
    /// Byte length of the full title the span was cut from.
    pub total_len: usize,
    /// Whether the span came from a square-bracket group.
    pub bracketed: bool,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, offset: usize, total_len: usize, bracketed: bool) -> Self {
        Self {
            text,
            offset,
            total_len,
            bracketed,
        }
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Whether this span fully contains `other` (equal spans count).
    pub fn contains(&self, other: &Token<'_>) -> bool {
        self.offset <= other.offset && other.end() <= self.end()
    }

    /// Whether this span overlaps `other` at all.
    pub fn overlaps(&self, other: &Token<'_>) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }

    /// Whether the span carries at least one letter or digit.
    pub fn has_alphanumeric(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }

    /// Cut a sub-span by byte range relative to this token.
    pub fn slice(&self, start: usize, end: usize) -> Token<'a> {
        Token {
            text: &self.text[start..end],
            offset: self.offset + start,
            total_len: self.total_len,
            bracketed: self.bracketed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, offset: usize) -> Token<'_> {
        Token::new(text, offset, 100, false)
    }

    #[test]
    fn test_containment() {
        let outer = tok("S01E01-06", 10);
        let inner = tok("S01E01", 10);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_overlap() {
        let a = tok("S01E01", 10);
        let b = tok("01-06", 14);
        let c = tok("720p", 30);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_slice_adjusts_offset() {
        let t = tok("x264-LOL", 20);
        let group = t.slice(5, 8);
        assert_eq!(group.text, "LOL");
        assert_eq!(group.offset, 25);
        assert_eq!(group.end(), 28);
    }

    #[test]
    fn test_has_alphanumeric() {
        assert!(tok("a-b", 0).has_alphanumeric());
        assert!(!tok("-._ ", 0).has_alphanumeric());
    }
}
