//! Download option records and resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bool_field, u32_field, u64_field, S3Overrides};

/// Fully-resolved options controlling a cache download.
///
/// Handed to the transfer engine as-is; field names and types are part of
/// that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Whether to use the Azure Blob client path for caches stored on
    /// Azure Blob Storage.
    ///
    /// Default: true.
    pub use_azure_sdk: bool,
    /// Whether downloads should go through the S3-compatible client path.
    ///
    /// Default: false.
    pub use_s3_sdk: bool,
    /// Number of parallel downloads (only applies on the Azure path).
    ///
    /// Default: 8.
    pub download_concurrency: u32,
    /// Maximum time for each download request, in milliseconds (only
    /// applies on the Azure path).
    ///
    /// Default: 30000.
    pub timeout_in_ms: u64,
    /// S3-compatible storage overrides; absent unless supplied.
    pub s3: S3Overrides,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            use_azure_sdk: true,
            use_s3_sdk: false,
            download_concurrency: 8,
            timeout_in_ms: 30_000,
            s3: S3Overrides::default(),
        }
    }
}

/// Caller-supplied partial download options. Every field is independently
/// optional; unset fields resolve to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOverrides {
    pub use_azure_sdk: Option<bool>,
    pub use_s3_sdk: Option<bool>,
    pub download_concurrency: Option<u32>,
    pub timeout_in_ms: Option<u64>,
    #[serde(default)]
    pub s3: S3Overrides,
}

impl DownloadOverrides {
    /// Builds overrides from untyped JSON, field by field: a value is kept
    /// only when its JSON type matches the field; mistyped fields,
    /// unrecognized keys and non-object values all read as absent.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            use_azure_sdk: bool_field(value, "use_azure_sdk"),
            use_s3_sdk: bool_field(value, "use_s3_sdk"),
            download_concurrency: u32_field(value, "download_concurrency"),
            timeout_in_ms: u64_field(value, "timeout_in_ms"),
            s3: S3Overrides::from_json_value(value.get("s3").unwrap_or(&Value::Null)),
        }
    }
}

impl From<&DownloadOptions> for DownloadOverrides {
    fn from(options: &DownloadOptions) -> Self {
        Self {
            use_azure_sdk: Some(options.use_azure_sdk),
            use_s3_sdk: Some(options.use_s3_sdk),
            download_concurrency: Some(options.download_concurrency),
            timeout_in_ms: Some(options.timeout_in_ms),
            s3: options.s3.clone(),
        }
    }
}

/// Returns a copy of the download defaults with any supplied overrides
/// applied. Never fails, and never mutates the input.
pub fn resolve_download_options(overrides: Option<&DownloadOverrides>) -> DownloadOptions {
    let mut result = DownloadOptions::default();

    if let Some(overrides) = overrides {
        if let Some(use_azure_sdk) = overrides.use_azure_sdk {
            result.use_azure_sdk = use_azure_sdk;
        }
        if let Some(use_s3_sdk) = overrides.use_s3_sdk {
            result.use_s3_sdk = use_s3_sdk;
        }
        if let Some(concurrency) = overrides.download_concurrency {
            result.download_concurrency = concurrency;
        }
        if let Some(timeout) = overrides.timeout_in_ms {
            result.timeout_in_ms = timeout;
        }
        result.s3 = overrides.s3.clone();
    }

    tracing::debug!("use azure sdk: {}", result.use_azure_sdk);
    tracing::debug!("use s3 sdk: {}", result.use_s3_sdk);
    tracing::debug!("download concurrency: {}", result.download_concurrency);
    tracing::debug!("request timeout (ms): {}", result.timeout_in_ms);

    result
}
