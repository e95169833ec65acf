// tests/config_tests.rs
//
// Конфигурация рантайма: значения по умолчанию, окружение, JSON.

use std::collections::HashMap;
use std::path::PathBuf;

use tournament_floor::config::{
    ConfigError, FloorConfig, DEFAULT_INBOX_CAPACITY, DEFAULT_TICK_INTERVAL_MS,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_env() {
    let config = FloorConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, FloorConfig::default());
    assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    assert_eq!(config.inbox_capacity, DEFAULT_INBOX_CAPACITY);
    assert!(config.state_path.is_none());
    assert!(config.seed.is_none());
}

#[test]
fn env_values_override_defaults() {
    let config = FloorConfig::from_lookup(lookup(&[
        ("FLOOR_TICK_MS", "250"),
        ("FLOOR_STATE_PATH", "/tmp/floor.json"),
        ("FLOOR_SEED", " 42 "),
        ("FLOOR_INBOX_CAPACITY", "8"),
    ]))
    .unwrap();

    assert_eq!(config.tick_interval_ms, 250);
    assert_eq!(config.state_path, Some(PathBuf::from("/tmp/floor.json")));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.inbox_capacity, 8);
}

#[test]
fn blank_state_path_means_memory_only() {
    let config = FloorConfig::from_lookup(lookup(&[("FLOOR_STATE_PATH", "  ")])).unwrap();
    assert!(config.state_path.is_none());
}

#[test]
fn unparsable_env_value_is_reported() {
    let err = FloorConfig::from_lookup(lookup(&[("FLOOR_TICK_MS", "fast")])).unwrap_err();
    match err {
        ConfigError::InvalidValue { var, value, .. } => {
            assert_eq!(var, "FLOOR_TICK_MS");
            assert_eq!(value, "fast");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn zero_tick_is_invalid() {
    let err = FloorConfig::from_lookup(lookup(&[("FLOOR_TICK_MS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let config = FloorConfig {
        inbox_capacity: 0,
        ..FloorConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn json_config_with_partial_fields() {
    let config = FloorConfig::from_json_str(r#"{"tickIntervalMs": 500, "seed": 9}"#).unwrap();
    assert_eq!(config.tick_interval_ms, 500);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.inbox_capacity, DEFAULT_INBOX_CAPACITY);

    assert!(matches!(
        FloorConfig::from_json_str("{tick"),
        Err(ConfigError::Malformed(_))
    ));
    assert!(matches!(
        FloorConfig::from_json_str(r#"{"inboxCapacity": 0}"#),
        Err(ConfigError::Invalid(_))
    ));
}
