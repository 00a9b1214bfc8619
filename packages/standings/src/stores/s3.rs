//! AWS S3 object store.

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::error::{ArchiveError, ArchiveResult};
use crate::traits::store::ObjectStore;
use crate::types::archive::{ArchiveRecord, StoredObject};

/// Settings for [`S3Store`].
///
/// Every field is optional so a process can start without storage
/// credentials; the absent setting is reported when the upload runs.
#[derive(Debug, Default)]
pub struct S3Config {
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<SecretString>,
}

impl S3Config {
    fn region(&self) -> ArchiveResult<&str> {
        self.region
            .as_deref()
            .ok_or(ArchiveError::MissingSetting("AWS_REGION"))
    }

    fn bucket(&self) -> ArchiveResult<&str> {
        self.bucket
            .as_deref()
            .ok_or(ArchiveError::MissingSetting("S3_BUCKET_NAME"))
    }

    fn credentials(&self) -> ArchiveResult<Credentials> {
        let access_key_id = self
            .access_key_id
            .as_deref()
            .ok_or(ArchiveError::MissingSetting("AWS_ACCESS_KEY_ID"))?;
        let secret = self
            .secret_access_key
            .as_ref()
            .ok_or(ArchiveError::MissingSetting("AWS_SECRET_ACCESS_KEY"))?;

        Ok(Credentials::new(
            access_key_id,
            secret.expose_secret(),
            None,
            None,
            "environment",
        ))
    }
}

/// Writes archive records to an S3 bucket with static credentials.
pub struct S3Store {
    config: S3Config,
}

impl S3Store {
    pub fn new(config: S3Config) -> Self {
        Self { config }
    }

    /// Public URL of `key` in the configured bucket.
    pub fn object_url(&self, key: &str) -> Option<String> {
        let bucket = self.config.bucket.as_deref()?;
        let region = self.config.region.as_deref()?;
        Some(format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key))
    }

    fn client(&self) -> ArchiveResult<Client> {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.config.region()?.to_string()))
            .credentials_provider(self.config.credentials()?)
            .build();
        Ok(Client::from_conf(config))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, record: &ArchiveRecord) -> ArchiveResult<StoredObject> {
        let bucket = self.config.bucket()?;
        let client = self.client()?;

        debug!(bucket = %bucket, key = %record.key, bytes = record.size(), "Uploading to S3");
        client
            .put_object()
            .bucket(bucket)
            .key(&record.key)
            .body(ByteStream::from(record.body.clone().into_bytes()))
            .content_type(record.content_type)
            .send()
            .await
            .map_err(|e| {
                warn!(key = %record.key, error = %DisplayErrorContext(&e), "S3 put failed");
                ArchiveError::Upload {
                    key: record.key.clone(),
                    source: Box::new(e),
                }
            })?;

        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: record.key.clone(),
            url: self.object_url(&record.key),
        })
    }

    fn name(&self) -> &str {
        "s3"
    }
}
