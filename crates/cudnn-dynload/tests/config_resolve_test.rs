//! Integration test: DynloadConfig::resolve against the process environment
//!
//! Kept in its own binary, and in a single test, because it mutates
//! CUDNN_DYNLOAD_CONFIG / CUDNN_DIR / CUDNN_LIBRARY.
//!
//! Run with: cargo test --test config_resolve_test -- --nocapture

use std::io::Write;
use std::path::PathBuf;

use cudnn_dynload::config::{default_config_path, DynloadConfig, CONFIG_ENV, DIR_ENV, LIBRARY_ENV};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_resolve_from_environment() {
    cudnn_dynload_common::logging::try_init_logging();
    std::env::remove_var(DIR_ENV);
    std::env::remove_var(LIBRARY_ENV);

    // CUDNN_DYNLOAD_CONFIG wins over the default locations.
    let file = write_config("[cudnn]\ndir = \"/from/file\"\nlibrary = \"x.so\"\n");
    std::env::set_var(CONFIG_ENV, file.path());
    assert_eq!(default_config_path(), Some(file.path().to_path_buf()));

    let config = DynloadConfig::resolve();
    assert_eq!(config.cudnn.dir, Some(PathBuf::from("/from/file")));
    assert_eq!(config.cudnn.library.as_deref(), Some("x.so"));

    // Environment overrides apply on top of the file.
    std::env::set_var(DIR_ENV, "/from/env");
    let config = DynloadConfig::resolve();
    assert_eq!(config.cudnn.dir, Some(PathBuf::from("/from/env")));
    assert_eq!(config.cudnn.library.as_deref(), Some("x.so"));
    std::env::remove_var(DIR_ENV);

    // A malformed file is ignored with a warning.
    let broken = write_config("[cudnn\ndir = ");
    std::env::set_var(CONFIG_ENV, broken.path());
    assert_eq!(DynloadConfig::resolve(), DynloadConfig::default());

    // So is a file that does not exist.
    let dir = tempfile::tempdir().expect("temp dir");
    std::env::set_var(CONFIG_ENV, dir.path().join("absent.toml"));
    assert_eq!(DynloadConfig::resolve(), DynloadConfig::default());

    // Overrides still apply when the file is unusable.
    std::env::set_var(LIBRARY_ENV, "/custom/libcudnn.so");
    let config = DynloadConfig::resolve();
    assert!(config.cudnn.dir.is_none());
    assert_eq!(config.cudnn.library.as_deref(), Some("/custom/libcudnn.so"));

    std::env::remove_var(LIBRARY_ENV);
    std::env::remove_var(CONFIG_ENV);
}
