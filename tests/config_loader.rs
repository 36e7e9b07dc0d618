mod common;

use common::temp_file;
use officeroute::config::{Config, ConfigError, CredentialStatus};
use officeroute::location::Permission;
use std::path::Path;
use std::time::Duration;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.directions.base_url, "https://api.openrouteservice.org");
    assert_eq!(config.directions.profile, "driving-car");
    assert!(config.directions.api_key.is_none());
    assert_eq!(config.directions.api_key_env, "ORS_API_KEY");
    assert_eq!(config.directions.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.directions.timeout(), Duration::from_secs(30));

    assert_eq!(config.location.poll_interval(), Duration::from_secs(10));
    assert!(config.location.fixed_position.is_none());
    assert_eq!(config.location.permission(), Permission::Granted);

    assert!(config.catalog.path.is_none());
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("officeroute/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/officeroute/config.toml")).unwrap();
    assert_eq!(config.directions.profile, "driving-car");
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[directions]
base_url = "http://localhost:8080/ors"
profile = "driving-hgv"
api_key = "file-key"
connect_timeout_seconds = 2
timeout_seconds = 10

[location]
poll_interval_ms = 2500
fixed_position = [-77.03, -12.05]
permission = "denied"

[catalog]
path = "/srv/offices.geojson"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.directions.base_url, "http://localhost:8080/ors");
    assert_eq!(config.directions.profile, "driving-hgv");
    assert_eq!(config.directions.timeout(), Duration::from_secs(10));
    assert_eq!(config.location.poll_interval(), Duration::from_millis(2500));
    assert_eq!(config.location.fixed_position, Some([-77.03, -12.05]));
    assert_eq!(config.location.permission(), Permission::Denied);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(Path::new("/srv/offices.geojson"))
    );
    match config.directions.resolve_credential() {
        CredentialStatus::Configured(key) => assert_eq!(key.expose(), "file-key"),
        other => panic!("expected Configured, got {:?}", other),
    }
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_file("config.toml", "[location]\npoll_interval_ms = 500\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.location.poll_interval(), Duration::from_millis(500));
    assert_eq!(config.directions.api_key_env, "ORS_API_KEY");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[directions\nprofile = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {:?}", err);
}

#[test]
fn test_non_http_base_url_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[directions]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }), "got {:?}", err);
}

#[test]
fn test_zero_poll_interval_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[location]\npoll_interval_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}

#[test]
fn test_out_of_range_fixed_position_fails_validation() {
    // Latitude first by mistake.
    let (_dir, path) = temp_file("config.toml", "[location]\nfixed_position = [-12.05, -177.03]\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }), "got {:?}", err);
}

#[test]
fn test_missing_api_key_names_env_var() {
    let (_dir, path) = temp_file(
        "config.toml",
        "[directions]\napi_key_env = \"OFFICEROUTE_TEST_UNSET_ORS_KEY\"\n",
    );
    let config = Config::load_from(&path).unwrap();
    let err = config.directions.api_key().unwrap_err();
    assert!(err.to_string().contains("OFFICEROUTE_TEST_UNSET_ORS_KEY"));
}
