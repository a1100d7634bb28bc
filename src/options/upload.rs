//! Upload option records and resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bool_field, u32_field, u64_field, S3Overrides};

/// Fully-resolved options controlling a cache upload.
///
/// Handed to the transfer engine as-is; field names and types are part of
/// that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Number of parallel cache uploads.
    ///
    /// Default: 4.
    pub upload_concurrency: u32,
    /// Maximum chunk size in bytes for cache upload.
    ///
    /// Default: 32 MiB.
    pub upload_chunk_size: u64,
    /// Whether uploads should go through the S3-compatible client path.
    /// Stays unset unless the caller supplied it; the upload path carries
    /// no default for this flag.
    pub use_s3_sdk: Option<bool>,
    /// S3-compatible storage overrides; absent unless supplied.
    pub s3: S3Overrides,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            upload_concurrency: 4,
            upload_chunk_size: 32 * 1024 * 1024,
            use_s3_sdk: None,
            s3: S3Overrides::default(),
        }
    }
}

/// Caller-supplied partial upload options. Every field is independently
/// optional; unset fields resolve to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOverrides {
    pub upload_concurrency: Option<u32>,
    pub upload_chunk_size: Option<u64>,
    pub use_s3_sdk: Option<bool>,
    #[serde(default)]
    pub s3: S3Overrides,
}

impl UploadOverrides {
    /// Builds overrides from untyped JSON, field by field: a value is kept
    /// only when its JSON type matches the field; mistyped fields,
    /// unrecognized keys and non-object values all read as absent.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            upload_concurrency: u32_field(value, "upload_concurrency"),
            upload_chunk_size: u64_field(value, "upload_chunk_size"),
            use_s3_sdk: bool_field(value, "use_s3_sdk"),
            s3: S3Overrides::from_json_value(value.get("s3").unwrap_or(&Value::Null)),
        }
    }
}

impl From<&UploadOptions> for UploadOverrides {
    fn from(options: &UploadOptions) -> Self {
        Self {
            upload_concurrency: Some(options.upload_concurrency),
            upload_chunk_size: Some(options.upload_chunk_size),
            use_s3_sdk: options.use_s3_sdk,
            s3: options.s3.clone(),
        }
    }
}

/// Returns a copy of the upload defaults with any supplied overrides
/// applied. Never fails, and never mutates the input.
pub fn resolve_upload_options(overrides: Option<&UploadOverrides>) -> UploadOptions {
    let mut result = UploadOptions::default();

    if let Some(overrides) = overrides {
        if let Some(use_s3_sdk) = overrides.use_s3_sdk {
            result.use_s3_sdk = Some(use_s3_sdk);
        }
        if let Some(concurrency) = overrides.upload_concurrency {
            result.upload_concurrency = concurrency;
        }
        if let Some(chunk_size) = overrides.upload_chunk_size {
            result.upload_chunk_size = chunk_size;
        }
        result.s3 = overrides.s3.clone();
    }

    tracing::debug!("use s3 sdk: {:?}", result.use_s3_sdk);
    tracing::debug!("upload concurrency: {}", result.upload_concurrency);
    tracing::debug!("upload chunk size: {}", result.upload_chunk_size);

    result
}
