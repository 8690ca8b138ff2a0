//! Classification of non-numbering attributes: quality tier, revision
//! markers, and spoken language.

pub mod language;
pub mod quality;
