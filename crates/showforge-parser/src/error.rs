//! Error type for the parsing engine.
//!
//! "Could not parse" is never an error: every stage reports that outcome as
//! `None`/empty. Errors are reserved for internal invariant violations,
//! which indicate a defect in a pattern table rather than bad input, and
//! must propagate to the caller instead of being swallowed.

/// Internal invariant violation raised by the parsing engine.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A pattern matched but an expected capture group was absent.
    #[error("pattern `{pattern}` matched without expected capture group `{group}`")]
    MissingCapture {
        pattern: &'static str,
        group: &'static str,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ParseError>;
