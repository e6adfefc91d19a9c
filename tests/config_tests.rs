// Config loading and validation tests

use kea_exporter::config::AppConfig;
use std::path::Path;

const VALID_CONFIG: &str = r#"
[server]
port = 9988
host = "0.0.0.0"

[kea]
socket_path = "/run/kea/kea4-ctrl-socket"
"#;

const FULL_CONFIG: &str = r#"
[server]
port = 9547
host = "127.0.0.1"

[kea]
socket_path = "/tmp/kea4.sock"
stats_file = "/tmp/stats.json"
config_file = "/tmp/config.json"
request_timeout_ms = 500

[exporter]
namespace = "dhcp"

[logging]
color = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 9988);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.kea.socket_path, Path::new("/run/kea/kea4-ctrl-socket"));
}

#[test]
fn test_config_defaults_when_omitted() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("valid");
    assert_eq!(config.kea.stats_file, None);
    assert_eq!(config.kea.config_file, None);
    assert_eq!(config.kea.request_timeout_ms, 3000);
    assert_eq!(config.exporter.namespace, "kea");
    assert!(!config.logging.color);
}

#[test]
fn test_config_loads_every_section() {
    let config = AppConfig::load_from_str(FULL_CONFIG).expect("valid");
    assert_eq!(config.server.port, 9547);
    assert_eq!(config.kea.stats_file.as_deref(), Some(Path::new("/tmp/stats.json")));
    assert_eq!(config.kea.config_file.as_deref(), Some(Path::new("/tmp/config.json")));
    assert_eq!(config.kea.request_timeout_ms, 500);
    assert_eq!(config.exporter.namespace, "dhcp");
    assert!(config.logging.color);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 9988", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_empty_socket_path() {
    let bad = VALID_CONFIG.replace(
        "socket_path = \"/run/kea/kea4-ctrl-socket\"",
        "socket_path = \"\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("kea.socket_path"));
}

#[test]
fn test_config_validation_rejects_empty_stats_file() {
    let bad = FULL_CONFIG.replace("stats_file = \"/tmp/stats.json\"", "stats_file = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("kea.stats_file"));
}

#[test]
fn test_config_validation_rejects_empty_config_file() {
    let bad = FULL_CONFIG.replace("config_file = \"/tmp/config.json\"", "config_file = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("kea.config_file"));
}

#[test]
fn test_config_validation_rejects_request_timeout_zero() {
    let bad = FULL_CONFIG.replace("request_timeout_ms = 500", "request_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("kea.request_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_bad_namespace() {
    for namespace in ["", "9kea", "kea-x", "kea exporter"] {
        let bad = FULL_CONFIG.replace("namespace = \"dhcp\"", &format!("namespace = \"{namespace}\""));
        let err = AppConfig::load_from_str(&bad).unwrap_err();
        assert!(err.to_string().contains("exporter.namespace"), "{namespace:?}: {err}");
    }
}

#[test]
fn test_config_validation_rejects_missing_kea_section() {
    let bad = VALID_CONFIG.replace("[kea]", "[other]");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, FULL_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 9547);
    assert_eq!(config.exporter.namespace, "dhcp");
}
