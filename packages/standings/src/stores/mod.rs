//! Object store implementations.
//!
//! Available backends:
//! - `S3Store` - AWS S3 via `aws-sdk-s3`
//! - `MemoryStore` - In-memory storage for tests

pub mod memory;
pub mod s3;

pub use memory::MemoryStore;
pub use s3::{S3Config, S3Store};

// Re-export from traits for convenience
pub use crate::traits::store::ObjectStore;
