//! Data model for the parsing engine.

pub mod episode_info;
pub mod info;
pub mod language;
pub mod quality;
pub mod token;

pub use episode_info::{Numbering, ParsedEpisodeInfo};
pub use info::ParsedInfo;
pub use language::Language;
pub use quality::{Quality, Revision};
pub use token::{Category, Token};
