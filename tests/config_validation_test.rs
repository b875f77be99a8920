use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use picalc::config::{AppConfig, LogFormat};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn missing_file() -> &'static Path {
    Path::new("/nonexistent/picalc-test.toml")
}

#[test]
fn defaults_listen_on_8080() {
    let config = AppConfig::load_from(missing_file(), HashMap::new()).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.api.offload_threshold, 1_000_000);
}

#[test]
fn port_variable_overrides_default() {
    let config = AppConfig::load_from(missing_file(), env(&[("PORT", "9090")])).unwrap();
    assert_eq!(config.server.port, 9090);
}

#[test]
fn empty_port_falls_back_to_default() {
    let config = AppConfig::load_from(missing_file(), env(&[("PORT", "")])).unwrap();
    assert_eq!(config.server.port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let result = AppConfig::load_from(missing_file(), env(&[("PORT", "eighty")]));
    assert!(result.is_err(), "Expected non-numeric PORT to fail");
}

#[test]
fn prefixed_variables_reach_nested_sections() {
    let config = AppConfig::load_from(
        missing_file(),
        env(&[
            ("PICALC_SERVER__HOST", "127.0.0.1"),
            ("PICALC_API__OFFLOAD_THRESHOLD", "42"),
            ("PICALC_LOGGING__FORMAT", "json"),
        ]),
    )
    .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.api.offload_threshold, 42);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn config_file_is_layered_under_environment() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[server]\nhost = \"127.0.0.1\"\nport = 7000\n\n[logging]\nlevel = \"debug\""
    )
    .unwrap();

    let config = AppConfig::load_from(file.path(), HashMap::new()).unwrap();
    assert_eq!(config.server.port, 7000);
    assert_eq!(config.logging.level, "debug");

    let config = AppConfig::load_from(file.path(), env(&[("PORT", "7001")])).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7001);
}

#[test]
fn empty_host_fails_validation() {
    let result = AppConfig::load_from(missing_file(), env(&[("PICALC_SERVER__HOST", " ")]));
    assert!(result.is_err(), "Expected blank host to fail validation");
}
