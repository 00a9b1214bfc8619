//! In-memory object store for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{ArchiveError, ArchiveResult};
use crate::traits::store::ObjectStore;
use crate::types::archive::{ArchiveRecord, StoredObject};

/// Keeps every put in memory, optionally failing them instead.
#[derive(Default)]
pub struct MemoryStore {
    objects: Arc<RwLock<Vec<ArchiveRecord>>>,
    attempts: Arc<RwLock<usize>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MemoryStore {
    pub const BUCKET: &'static str = "memory";

    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every put with `message` (builder pattern).
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Successfully stored records, in order.
    pub fn objects(&self) -> Vec<ArchiveRecord> {
        self.objects.read().unwrap().clone()
    }

    /// Stored record under `key`, if any.
    pub fn get(&self, key: &str) -> Option<ArchiveRecord> {
        self.objects
            .read()
            .unwrap()
            .iter()
            .find(|r| r.key == key)
            .cloned()
    }

    /// Number of puts attempted, including failed ones.
    pub fn put_attempts(&self) -> usize {
        *self.attempts.read().unwrap()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            objects: Arc::clone(&self.objects),
            attempts: Arc::clone(&self.attempts),
            failure: Arc::clone(&self.failure),
        }
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, record: &ArchiveRecord) -> ArchiveResult<StoredObject> {
        *self.attempts.write().unwrap() += 1;

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(ArchiveError::Upload {
                key: record.key.clone(),
                source: message.into(),
            });
        }

        self.objects.write().unwrap().push(record.clone());
        Ok(StoredObject {
            bucket: Self::BUCKET.to_string(),
            key: record.key.clone(),
            url: None,
        })
    }

    fn name(&self) -> &str {
        "memory"
    }
}
