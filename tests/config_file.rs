//! Config file loading driven end-to-end through a temp directory.

use std::fs;
use std::path::Path;

use rcache::config::{load_from_path, TransferConfig};
use rcache::options::{
    resolve_download_options, resolve_upload_options, DownloadOptions, UploadOptions,
};

#[test]
fn baseline_file_roundtrips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let toml = toml::to_string_pretty(&TransferConfig::baseline()).expect("serialize baseline");
    fs::write(&path, toml).expect("write config");

    let cfg = load_from_path(&path).expect("load config");
    assert_eq!(cfg, TransferConfig::baseline());
    assert_eq!(
        resolve_upload_options(Some(&cfg.upload)),
        UploadOptions::default()
    );
    assert_eq!(
        resolve_download_options(Some(&cfg.download)),
        DownloadOptions::default()
    );
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[upload]\nupload_concurrency = 2\n").expect("write config");

    let cfg = load_from_path(&path).expect("load config");
    let upload = resolve_upload_options(Some(&cfg.upload));
    assert_eq!(upload.upload_concurrency, 2);
    assert_eq!(upload.upload_chunk_size, 32 * 1024 * 1024);

    // The untouched download section resolves to pure defaults.
    assert_eq!(
        resolve_download_options(Some(&cfg.download)),
        DownloadOptions::default()
    );
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_from_path(Path::new("/nonexistent/rcache/config.toml")).is_err());
}
