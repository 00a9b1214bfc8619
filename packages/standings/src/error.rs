//! Typed errors for the standings library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the runner can tell
//! an extraction failure from an upload failure.

use thiserror::Error;

/// Errors raised while driving the browser and reading the live page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Browser process could not be started
    #[error("browser launch failed: {0}")]
    Launch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Page unreachable (DNS, timeout, non-responsive site)
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Rendered DOM could not be read back from the page
    #[error("reading page content failed: {0}")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Browser session did not shut down cleanly
    #[error("browser close failed: {0}")]
    Close(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while serializing or uploading an archive record.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Standings could not be rendered as JSON
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Required storage setting absent from the environment
    #[error("missing storage setting: {0}")]
    MissingSetting(&'static str),

    /// Transport, authentication or service failure during the put
    #[error("upload of {key} failed: {source}")]
    Upload {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors raised when building a stage calendar from raw entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Stage numbers start at 1
    #[error("stage number for {date} must be positive")]
    ZeroStage { date: String },

    /// Each date maps to exactly one stage
    #[error("date {date} appears more than once")]
    DuplicateDate { date: String },

    /// Key is not a `YYYY-MM-DD` date
    #[error("invalid calendar date: {date}")]
    InvalidDate { date: String },
}

/// Result type alias for archive operations.
pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;
