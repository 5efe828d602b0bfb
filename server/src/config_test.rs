use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    assert!(config.log_ansi);
}

#[test]
fn overrides_are_applied() {
    let config =
        ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("LOG_ANSI", "off")])).unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    assert!(!config.log_ansi);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", " "), ("PORT", "")])).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn malformed_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\" is not a port number");
}

#[test]
fn malformed_host_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:3000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}

#[test]
fn malformed_log_ansi_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("LOG_ANSI", "sometimes")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBool { var: "LOG_ANSI", .. }));
}
