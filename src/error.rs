//! Error handling types for line-collection
//!
//! Mapping queries fail with a single error kind, [`PositionNotFound`].
//! Loading text or settings from disk uses the broader [`Error`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a position or offset could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The line index is not in the line table
    LineOutOfRange,
    /// The character index resolves outside the line content
    CharacterOutOfRange,
    /// The byte offset is not contained in any line
    OffsetOutOfRange,
    /// The offset or character splits a unit of the position encoding
    NotUnitBoundary,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NotFoundReason::LineOutOfRange => "line out of range",
            NotFoundReason::CharacterOutOfRange => "character out of range",
            NotFoundReason::OffsetOutOfRange => "offset out of range",
            NotFoundReason::NotUnitBoundary => "not on a unit boundary",
        };
        f.write_str(reason)
    }
}

/// A position or byte offset does not address a location in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Position not found: {reason}")]
pub struct PositionNotFound {
    reason: NotFoundReason,
}

impl PositionNotFound {
    pub fn new(reason: NotFoundReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> NotFoundReason {
        self.reason
    }

    pub fn line_out_of_range() -> Self {
        Self::new(NotFoundReason::LineOutOfRange)
    }

    pub fn character_out_of_range() -> Self {
        Self::new(NotFoundReason::CharacterOutOfRange)
    }

    pub fn offset_out_of_range() -> Self {
        Self::new(NotFoundReason::OffsetOutOfRange)
    }

    pub fn not_unit_boundary() -> Self {
        Self::new(NotFoundReason::NotUnitBoundary)
    }
}

/// Crate-level error covering file and settings loading
#[derive(Debug, Error)]
pub enum Error {
    /// A mapping query failed
    #[error(transparent)]
    PositionNotFound(#[from] PositionNotFound),

    /// Reading a document or settings file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file could not be parsed
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Result type for fallible loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Helper functions for common error patterns
impl Error {
    /// Create an IO error tied to the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
