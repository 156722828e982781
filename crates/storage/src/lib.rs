//! Object storage for uploaded dog photos.
//!
//! Handlers depend on the [`ObjectStore`] trait so the storage backend is
//! injected through application state. [`S3Store`] is the production
//! implementation; tests substitute their own.

mod config;
mod error;
mod s3;

use async_trait::async_trait;

pub use config::StorageConfig;
pub use error::StorageError;
pub use s3::S3Store;

/// A bucket-backed blob store that can hand out public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `body` under `key`, overwriting any existing object.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// The public URL an object stored under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}
