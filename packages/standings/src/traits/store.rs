//! Object storage trait for archived snapshots.

use async_trait::async_trait;

use crate::error::ArchiveResult;
use crate::types::archive::{ArchiveRecord, StoredObject};

/// Write-only object storage.
///
/// One call, one new object. Keys are unique per invocation so no
/// read-before-write or overwrite check is made.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, record: &ArchiveRecord) -> ArchiveResult<StoredObject>;

    /// Store name for logging.
    fn name(&self) -> &str;
}
