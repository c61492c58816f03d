/*!
 * Error types for the fastread library.
 *
 * Lookups and navigation on a structured text fail closed (they return `None`
 * or the unchanged index) and never produce these errors. The types below cover
 * the checked paths: structure validation, configuration and the CLI.
 */

use thiserror::Error;

/// Errors found when checking a structured text against its indexing invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A fragment index does not follow its predecessor
    #[error("Fragment index gap: expected {expected}, found {found}")]
    IndexGap {
        /// Index that should have come next
        expected: usize,
        /// Index actually stored
        found: usize,
    },

    /// A chapter without any paragraph survived normalisation
    #[error("Chapter {chapter} (\"{name}\") has no paragraphs")]
    EmptyChapter {
        /// Chapter position
        chapter: usize,
        /// Chapter name
        name: String,
    },

    /// A paragraph without any fragment survived normalisation
    #[error("Paragraph {paragraph} of chapter {chapter} has no fragments")]
    EmptyParagraph {
        /// Chapter position
        chapter: usize,
        /// Paragraph position within the chapter
        paragraph: usize,
    },

    /// Checked access outside of `[0, total)`
    #[error("Fragment index {index} is out of range (total fragments: {total})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of fragments in the text
        total: usize,
    },
}

/// Errors in the application configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Reading speed outside of the supported range
    #[error("Reading speed {0} WPM is out of range ({min}-{max} WPM)", min = crate::app_config::MIN_READING_SPEED_WPM, max = crate::app_config::MAX_READING_SPEED_WPM)]
    ReadingSpeedOutOfRange(u32),

    /// Sentence pause factor outside of the supported range
    #[error("Sentence pause factor {0} is out of range (1.0-5.0)")]
    PauseFactorOutOfRange(f32),

    /// Unknown pivot calculation method name
    #[error("Unknown pivot calculation method: {0}")]
    UnknownPivotMethod(String),

    /// Unknown log level name
    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the text structure
    #[error("Text error: {0}")]
    Text(#[from] TextError),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
