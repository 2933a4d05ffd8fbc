use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE", " Off "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).expect("defaults");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.cookie, CookieSettings::default());
    assert!(!config.cookie.secure);
    assert_eq!(config.cookie.max_age, Duration::seconds(31_536_000));
}

#[test]
fn reads_all_variables() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("COOKIE_SECURE", "yes"),
        ("THEME_COOKIE_MAX_AGE_SECS", "600"),
    ]))
    .expect("valid config");
    assert_eq!(config.port, 8080);
    assert!(config.cookie.secure);
    assert_eq!(config.cookie.max_age, Duration::minutes(10));
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).expect_err("bad port");
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).expect_err("out of range");
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn rejects_bad_cookie_secure() {
    let err = ServerConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "maybe")])).expect_err("bad bool");
    assert_eq!(err, ConfigError::InvalidBool { var: "COOKIE_SECURE", value: "maybe".to_owned() });
    assert_eq!(err.to_string(), "invalid boolean for COOKIE_SECURE: \"maybe\"");
}

#[test]
fn rejects_non_positive_max_age() {
    for raw in ["0", "-5", "soon"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("THEME_COOKIE_MAX_AGE_SECS", raw)]))
            .expect_err("bad max age");
        assert_eq!(err, ConfigError::InvalidCookieMaxAge(raw.to_owned()));
    }
}
