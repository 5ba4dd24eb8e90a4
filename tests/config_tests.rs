use rbankroll::config::check::{EXPECTED_KEYS, fill_missing, missing_keys};
use rbankroll::config::{Backend, Config};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_rbankroll.conf"));
    fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn test_missing_keys_detected_and_filled() {
    let path = temp_conf("config_fill", "database: /tmp/x.sqlite\nbackend: supabase\n");

    let missing = missing_keys(&path).unwrap();
    assert_eq!(missing.len(), EXPECTED_KEYS.len() - 2);
    assert!(missing.contains(&"recent_sessions"));

    let added = fill_missing(&path).unwrap();
    assert_eq!(added, missing);
    assert!(missing_keys(&path).unwrap().is_empty());

    // Existing values are kept.
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.backend, Backend::Supabase);
    assert_eq!(cfg.recent_sessions, 5);
}

#[test]
fn test_defaults_apply_to_partial_file() {
    let path = temp_conf("config_partial", "database: /tmp/y.sqlite\n");
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.backend, Backend::Sqlite);
    assert!(cfg.supabase_url.is_empty());
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let path = temp_conf("config_invalid", "backend: [not, a, backend]\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let mut path = env::temp_dir();
    path.push("config_roundtrip_rbankroll.conf");
    let cfg = Config {
        recent_sessions: 9,
        ..Config::default()
    };
    cfg.save(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap().recent_sessions, 9);
}
