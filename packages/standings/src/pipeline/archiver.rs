//! Archiver: serialize a snapshot and write it to object storage.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::error::ArchiveResult;
use crate::traits::store::ObjectStore;
use crate::types::archive::{ArchiveRecord, StoredObject};
use crate::types::standings::ScrapeResult;

pub struct Archiver {
    store: Arc<dyn ObjectStore>,
}

impl Archiver {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Write `result` under `stage-{stage}/{timestamp}.json`, where the
    /// timestamp is `completed_at`. Not retried.
    pub async fn archive(
        &self,
        stage: u32,
        result: &ScrapeResult,
        completed_at: DateTime<Utc>,
    ) -> ArchiveResult<StoredObject> {
        let record = ArchiveRecord::build(stage, result, completed_at)?;
        let stored = self.store.put(&record).await?;

        info!(
            stage,
            store = self.store.name(),
            bucket = %stored.bucket,
            key = %stored.key,
            url = stored.url.as_deref().unwrap_or("-"),
            "Snapshot archived"
        );
        Ok(stored)
    }
}
