/// Default bucket photos are uploaded to.
const DEFAULT_BUCKET: &str = "dogcollector-tml";

/// Default public endpoint objects are served from.
const DEFAULT_BASE_URL: &str = "https://s3-us-west-1.amazonaws.com/";

/// Default AWS region.
const DEFAULT_REGION: &str = "us-west-1";

/// Object storage settings, passed explicitly to the store.
///
/// Credentials are not part of this struct; they come from the AWS default
/// provider chain (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profile, or
/// instance role).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Bucket name.
    pub bucket: String,
    /// Public URL prefix; object URLs are `{base_url}{bucket}/{key}`.
    pub base_url: String,
    /// AWS region of the bucket.
    pub region: String,
    /// Custom S3-compatible endpoint (e.g. MinIO). Uses path-style addressing.
    pub endpoint: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var        | Default                                 |
    /// |----------------|-----------------------------------------|
    /// | `S3_BUCKET`    | `dogcollector-tml`                      |
    /// | `S3_BASE_URL`  | `https://s3-us-west-1.amazonaws.com/`   |
    /// | `AWS_REGION`   | `us-west-1`                             |
    /// | `S3_ENDPOINT`  | unset                                   |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bucket: std::env::var("S3_BUCKET").unwrap_or(defaults.bucket),
            base_url: std::env::var("S3_BASE_URL").unwrap_or(defaults.base_url),
            region: std::env::var("AWS_REGION").unwrap_or(defaults.region),
            endpoint: std::env::var("S3_ENDPOINT")
                .ok()
                .filter(|e| !e.trim().is_empty()),
        }
    }

    /// Build the public URL for `key`: `{base_url}{bucket}/{key}`.
    ///
    /// A missing trailing slash on `base_url` is tolerated.
    pub fn object_url(&self, key: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{}/{key}", self.bucket)
    }
}
