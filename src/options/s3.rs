//! Shared S3-compatible storage overrides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::string_field;

/// Endpoint, credential and bucket overrides for an S3-compatible backend.
///
/// None of these carry a default: a field is present only when the caller
/// supplied it, and the transfer engine decides what an absent field means.
/// Credentials are passed through as opaque strings, never validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Overrides {
    /// Custom endpoint URL, for non-AWS S3-compatible services.
    pub endpoint: Option<String>,
    /// Access key id.
    pub access_key: Option<String>,
    /// Secret access key.
    pub secret_key: Option<String>,
    /// Bucket region.
    pub region: Option<String>,
    /// Target bucket name.
    pub bucket: Option<String>,
}

impl S3Overrides {
    /// Builds overrides from an untyped JSON value, keeping only string
    /// fields. Missing keys, mistyped fields and non-object values all
    /// read as absent.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            endpoint: string_field(value, "endpoint"),
            access_key: string_field(value, "access_key"),
            secret_key: string_field(value, "secret_key"),
            region: string_field(value, "region"),
            bucket: string_field(value, "bucket"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_valid_strings_only() {
        let v = json!({
            "endpoint": "http://minio.local:9000",
            "access_key": "AKIA123",
            "secret_key": "shhh",
            "region": "us-east-1",
            "bucket": 42,
        });
        let s3 = S3Overrides::from_json_value(&v);
        assert_eq!(s3.endpoint.as_deref(), Some("http://minio.local:9000"));
        assert_eq!(s3.access_key.as_deref(), Some("AKIA123"));
        assert_eq!(s3.secret_key.as_deref(), Some("shhh"));
        assert_eq!(s3.region.as_deref(), Some("us-east-1"));
        // Wrong type drops the field rather than erroring.
        assert_eq!(s3.bucket, None);
    }

    #[test]
    fn from_json_of_non_object_is_empty() {
        assert_eq!(S3Overrides::from_json_value(&Value::Null), S3Overrides::default());
        assert_eq!(S3Overrides::from_json_value(&json!("bucket")), S3Overrides::default());
    }
}
