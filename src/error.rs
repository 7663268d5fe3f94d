//! Error types shared by all extraction operations.

use thiserror::Error;

/// Error type for log-extraction operations.
///
/// A property missing from an output file is scientifically meaningful (the
/// corresponding feature was not requested in the calculation), so absence is
/// always reported as [`ExtractError::PropertyNotFound`] and never mapped to
/// an empty or zero-valued result.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O error while reading an output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The section marker never appeared, or the section held no valid rows
    #[error("output does not contain {0}")]
    PropertyNotFound(&'static str),
    /// A table row did not match the expected record shape
    #[error("malformed {section} record: {line}")]
    MalformedRecord {
        /// Name of the section whose row failed to parse
        section: &'static str,
        /// The offending line, as read from the output
        line: String,
    },
}

impl ExtractError {
    /// Builds a [`ExtractError::MalformedRecord`] for a rejected table row.
    pub(crate) fn malformed(section: &'static str, line: &str) -> Self {
        ExtractError::MalformedRecord {
            section,
            line: line.trim().to_string(),
        }
    }
}

/// Type alias for extraction results
pub type Result<T> = std::result::Result<T, ExtractError>;
