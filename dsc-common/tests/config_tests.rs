//! Integration tests for configuration resolution and graceful degradation
//!
//! Covers:
//! - Missing config files SHALL NOT cause termination (defaults are used)
//! - Priority order: CLI argument > DSC_CONFIG > user config dir > defaults
//! - Files that exist but do not parse are reported as errors
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate DSC_CONFIG are marked with #[serial].

use dsc_common::config::{Config, ConfigResolver, ConfigSource, CONFIG_ENV_VAR};
use dsc_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_cli_path_is_loaded() {
    env::remove_var(CONFIG_ENV_VAR);
    let file = write_config("values = [5.0, 5.0, 2.0]\n");

    let resolver = ConfigResolver::new(Some(file.path().to_path_buf()));
    let (config, source) = resolver.resolve().unwrap();

    assert_eq!(config.values, vec![5.0, 5.0, 2.0]);
    assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
}

#[test]
#[serial]
fn test_env_var_is_used_without_cli_path() {
    let file = write_config("[display]\naverage_decimals = 3\n");
    env::set_var(CONFIG_ENV_VAR, file.path());

    let resolver = ConfigResolver::new(None);
    assert_eq!(resolver.config_path(), Some(file.path().to_path_buf()));
    let (config, _) = resolver.resolve().unwrap();
    assert_eq!(config.display.average_decimals, 3);

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_cli_path_beats_env_var() {
    let env_file = write_config("values = [1.0]\n");
    let cli_file = write_config("values = [2.0]\n");
    env::set_var(CONFIG_ENV_VAR, env_file.path());

    let resolver = ConfigResolver::new(Some(cli_file.path().to_path_buf()));
    let (config, _) = resolver.resolve().unwrap();
    assert_eq!(config.values, vec![2.0]);

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_file_degrades_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.toml");

    let resolver = ConfigResolver::new(Some(missing.clone()));
    let (config, source) = resolver.resolve().unwrap();

    assert_eq!(config, Config::default());
    // Reported back rather than logged, so the warning survives until
    // logging is initialised
    assert_eq!(source, ConfigSource::Missing(missing));
}

#[test]
#[serial]
fn test_missing_env_file_degrades_to_defaults() {
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/dsc/config.toml");

    let (config, source) = ConfigResolver::new(None).resolve().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(
        source,
        ConfigSource::Missing(PathBuf::from("/nonexistent/dsc/config.toml"))
    );

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_unparseable_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let file = write_config("values = \"not a list\"\n");

    let result = ConfigResolver::new(Some(file.path().to_path_buf())).resolve();
    match result {
        Err(Error::Config(message)) => {
            assert!(message.contains(&file.path().display().to_string()));
        }
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_load_reports_io_error_for_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(&PathBuf::from(dir.path()));
    assert!(matches!(result, Err(Error::Io(_))));
}
