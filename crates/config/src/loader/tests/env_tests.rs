//! Environment variable handling and precedence.

use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("ZAYAVKI_BASE_URL", Some("https://backend.internal:9443")),
            ("ZAYAVKI_SKIP_VERIFY", Some("yes")),
            ("ZAYAVKI_TIMEOUT", Some("12")),
            ("ZAYAVKI_EXPORT_DIR", Some("/var/tmp")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "https://backend.internal:9443");
            assert!(config.connection.skip_verify);
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
            assert_eq!(config.export_dir, PathBuf::from("/var/tmp"));
        },
    );
}

#[test]
#[serial]
fn test_overrides_beat_env() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("ZAYAVKI_BASE_URL", Some("https://from-env.example.com")),
            ("ZAYAVKI_TIMEOUT", Some("12")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_base_url("https://from-cli.example.com".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.connection.base_url, "https://from-cli.example.com");
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("ZAYAVKI_BASE_URL", Some("")),
            ("ZAYAVKI_TIMEOUT", Some("   ")),
        ],
        || {
            assert_eq!(env_var_or_none("ZAYAVKI_BASE_URL"), None);
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "http://localhost:8080");
        },
    );
}

#[test]
#[serial]
fn test_env_value_is_trimmed() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_var("ZAYAVKI_EXPORT_DIR", Some("  out  "), || {
        assert_eq!(env_var_or_none("ZAYAVKI_EXPORT_DIR").as_deref(), Some("out"));
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_var("ZAYAVKI_TIMEOUT", Some("soon"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, "ZAYAVKI_TIMEOUT"),
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_env() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_var("ZAYAVKI_SKIP_VERIFY", Some("maybe"), || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}
