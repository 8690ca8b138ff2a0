//! Typed ID wrappers for type safety across showforge.
//!
//! This module provides newtype wrappers around the numeric identifiers used
//! by metadata providers, preventing a `SeriesId` from being used where an
//! `EpisodeId` is expected.

use serde::{Deserialize, Serialize};

/// Unique identifier for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(i64);

impl SeriesId {
    /// Return the raw numeric value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for SeriesId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SeriesId> for i64 {
    fn from(id: SeriesId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(i64);

impl EpisodeId {
    /// Return the raw numeric value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for EpisodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EpisodeId> for i64 {
    fn from(id: EpisodeId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
