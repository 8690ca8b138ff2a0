//! Showforge-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across showforge:
//!
//! - **Typed IDs**: Type-safe numeric wrappers for series and episodes
//! - **Core Types**: The read-only `Series` and `Episode` reference
//!   entities handed to the parsing engine by metadata collaborators
//!
//! # Examples
//!
//! ```
//! use showforge_common::{Series, SeriesId, SeriesType};
//!
//! let series = Series::new(SeriesId::from(42), "Breaking Bad", SeriesType::Standard);
//! assert_eq!(series.clean_title, "breaking bad");
//! ```

pub mod ids;
pub mod types;

pub use ids::*;
pub use types::*;
