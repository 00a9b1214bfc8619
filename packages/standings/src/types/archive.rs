//! Archive records and their object keys.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ArchiveResult;
use crate::types::standings::ScrapeResult;

/// Content type stored alongside every archived snapshot.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Render a completion time as a sortable, filesystem-safe ISO-8601 string.
///
/// `2025-07-09T10:15:30.123Z` becomes `2025-07-09T10-15-30-123Z`.
pub fn archive_timestamp(completed_at: DateTime<Utc>) -> String {
    completed_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Object key for one snapshot: `stage-{n}/{timestamp}.json`.
pub fn object_key(stage: u32, completed_at: DateTime<Utc>) -> String {
    format!("stage-{}/{}.json", stage, archive_timestamp(completed_at))
}

/// A serialized snapshot ready to be written to object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveRecord {
    pub stage: u32,
    pub key: String,
    pub body: String,
    pub content_type: &'static str,
    pub completed_at: DateTime<Utc>,
}

impl ArchiveRecord {
    /// Serialize `result` and derive its key from the stage and completion time.
    pub fn build(stage: u32, result: &ScrapeResult, completed_at: DateTime<Utc>) -> ArchiveResult<Self> {
        Ok(Self {
            stage,
            key: object_key(stage, completed_at),
            body: result.to_pretty_json()?,
            content_type: JSON_CONTENT_TYPE,
            completed_at,
        })
    }

    /// Body length in bytes.
    pub fn size(&self) -> usize {
        self.body.len()
    }
}

/// Where a record landed after a successful put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    /// Public URL of the object, when the store can name one
    pub url: Option<String>,
}
