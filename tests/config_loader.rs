use fact_counter::config::{Config, ConfigError, FactsConfig, TimerConfig};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.facts.base_url, "http://numbersapi.com");
    assert_eq!(config.facts.timeout_seconds, 10);
    assert_eq!(config.facts.connect_timeout_seconds, 5);
    assert_eq!(config.timer.interval_ms, 1000);
    assert_eq!(config.timer.interval(), Duration::from_secs(1));
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("fact-counter/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"[facts]
base_url = "https://facts.example.com"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.facts.base_url, "https://facts.example.com");
    assert_eq!(config.facts.timeout_seconds, 10);
    assert_eq!(config.timer, TimerConfig::default());
}

#[test]
fn test_full_file_round_trips_values() {
    let (_dir, path) = write_config(
        r#"[facts]
base_url = "http://127.0.0.1:9000"
timeout_seconds = 3
connect_timeout_seconds = 1

[timer]
interval_ms = 250
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.facts,
        FactsConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            timeout_seconds: 3,
            connect_timeout_seconds: 1,
        }
    );
    assert_eq!(config.timer.interval(), Duration::from_millis(250));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[facts\nbase_url = 1");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = write_config("[timer]\ninterval_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("Timer interval"));
}

#[test]
fn test_url_without_scheme_fails_validation() {
    let mut config = Config::default();
    config.facts.base_url = "numbersapi.com".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.facts.timeout_seconds = 0;
    assert!(config.validate().is_err());
}
