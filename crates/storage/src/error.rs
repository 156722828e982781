/// Failures from the object storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The object could not be written. Nothing was stored under `key`.
    #[error("Upload of '{key}' failed: {message}")]
    UploadFailed { key: String, message: String },
}
