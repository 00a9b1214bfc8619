//! Live Stage Standings Library
//!
//! Scrapes the provisional, in-progress ranking of a race stage from its
//! live results page and archives each snapshot as JSON in object storage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use standings::{Archiver, ChromeBrowser, RaceSource, StageCalendar, StageExtractor};
//!
//! let calendar = StageCalendar::tour_de_france_2025();
//! if let Some(stage) = calendar.stage_for("2025-07-09") {
//!     let extractor = StageExtractor::new(Arc::new(ChromeBrowser::new()), RaceSource::default());
//!     let result = extractor.extract(stage).await?;
//!     archiver.archive(stage, &result, Utc::now()).await?;
//! }
//! ```
//!
//! # Modules
//!
//! - [`calendar`] - Static date → stage lookup
//! - [`extract`] - DOM extraction rules, independent of the browser
//! - [`pipeline`] - Page Extractor and Archiver
//! - [`traits`] - Browser and object store abstractions
//! - [`browsers`] - Headless Chrome and mock browsers
//! - [`stores`] - S3 and in-memory object stores
//! - [`types`] - Position groups, archive records, race source
//! - [`testing`] - DOM fixtures and mocks

pub mod browsers;
pub mod calendar;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ArchiveError, ArchiveResult, CalendarError, ScrapeError};
pub use traits::{
    browser::{Browser, BrowserSession},
    store::ObjectStore,
};
pub use types::{
    archive::{archive_timestamp, object_key, ArchiveRecord, StoredObject, JSON_CONTENT_TYPE},
    race::RaceSource,
    standings::{PositionGroup, ScrapeResult, UNKNOWN_POSITION, ZERO_GAP},
};

pub use calendar::StageCalendar;
pub use extract::{extract_from_document, extract_standings};
pub use pipeline::{Archiver, StageExtractor};

// Re-export implementations
pub use browsers::{ChromeBrowser, MockBrowser};
pub use stores::{MemoryStore, S3Config, S3Store};
