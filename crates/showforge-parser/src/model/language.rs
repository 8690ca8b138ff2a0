//! Spoken-language classification.

/// Audio language of a release.
///
/// `English` doubles as the default: scene releases rarely tag English
/// audio, so an untagged title is assumed English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
    Italian,
    Danish,
    Dutch,
    Japanese,
    Cantonese,
    Mandarin,
    Korean,
    Russian,
    Polish,
    Vietnamese,
    Swedish,
    Norwegian,
    Finnish,
    Turkish,
    Portuguese,
    Flemish,
    Greek,
    Hungarian,
    Hebrew,
    Czech,
    /// Several audio tracks in one release (`MULTi`, `DUAL`).
    Multi,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::Japanese => "Japanese",
            Language::Cantonese => "Cantonese",
            Language::Mandarin => "Mandarin",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::Polish => "Polish",
            Language::Vietnamese => "Vietnamese",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Turkish => "Turkish",
            Language::Portuguese => "Portuguese",
            Language::Flemish => "Flemish",
            Language::Greek => "Greek",
            Language::Hungarian => "Hungarian",
            Language::Hebrew => "Hebrew",
            Language::Czech => "Czech",
            Language::Multi => "Multi",
        };
        write!(f, "{name}")
    }
}
