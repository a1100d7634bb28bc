//! Transfer option records and default resolution.
//!
//! Callers hand the resolver a possibly-partial set of overrides — typed,
//! or untyped JSON run through the lenient `from_json_value` constructors —
//! and get back a fresh, fully-populated record for the transfer engine.
//! Resolution is total: no input shape fails it.

mod download;
mod s3;
mod upload;

pub use download::{resolve_download_options, DownloadOptions, DownloadOverrides};
pub use s3::S3Overrides;
pub use upload::{resolve_upload_options, UploadOptions, UploadOverrides};

use serde_json::Value;

/// Reads `key` as a boolean; any other type reads as absent.
pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

/// Reads `key` as a non-negative integer that fits a `u32`.
pub(crate) fn u32_field(value: &Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// Reads `key` as a non-negative integer.
pub(crate) fn u64_field(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(Value::as_u64)
}

/// Reads `key` as a string.
pub(crate) fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}
