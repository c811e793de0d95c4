//! Unit tests for ChainConfig loading.

use std::collections::HashMap;
use std::io::Write;

use chain_core::{ChainError, Request};

use crate::{chain_from_config, parse_blocked_ips, ChainConfig};

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults_when_unset() {
    let config = ChainConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, ChainConfig::default());
}

#[test]
fn test_config_reads_all_vars() {
    let config = ChainConfig::from_lookup(lookup_from(&[
        ("BLOCKED_IPS", "1.1.1.1, 2.2.2.2"),
        ("CACHE_FILE", "/tmp/cache.json"),
        ("LOG_FILE", "chain.log"),
    ]));
    assert_eq!(
        config.blocked_ips,
        Some(vec!["1.1.1.1".to_string(), "2.2.2.2".to_string()])
    );
    assert_eq!(config.cache_file.as_deref(), Some(std::path::Path::new("/tmp/cache.json")));
    assert_eq!(config.log_file.as_deref(), Some("chain.log"));
}

#[test]
fn test_config_blank_values_count_as_unset() {
    let config = ChainConfig::from_lookup(lookup_from(&[("BLOCKED_IPS", "  "), ("LOG_FILE", "")]));
    assert!(config.blocked_ips.is_none());
    assert!(config.log_file.is_none());
}

#[test]
fn test_parse_blocked_ips_drops_blanks() {
    assert_eq!(
        parse_blocked_ips(" 10.0.0.1,,192.168.0.10 , "),
        vec!["10.0.0.1".to_string(), "192.168.0.10".to_string()]
    );
    assert!(parse_blocked_ips(",").is_empty());
}

#[test]
fn test_load_cache_entries_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"555": "Cached 555", "556": "Cached 556"}}"#).unwrap();

    let config = ChainConfig {
        cache_file: Some(file.path().to_path_buf()),
        ..ChainConfig::default()
    };
    let entries = config.load_cache_entries().unwrap().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries["555"], "Cached 555");
}

#[test]
fn test_load_cache_entries_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ChainConfig {
        cache_file: Some(dir.path().join("missing.json")),
        ..ChainConfig::default()
    };
    assert!(matches!(config.load_cache_entries(), Err(ChainError::Config(_))));
}

#[test]
fn test_load_cache_entries_rejects_non_string_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"1": 5}}"#).unwrap();
    let config = ChainConfig {
        cache_file: Some(file.path().to_path_buf()),
        ..ChainConfig::default()
    };
    assert!(matches!(config.load_cache_entries(), Err(ChainError::Json(_))));
}

/// **Test: Configured blocklist and cache replace the defaults in the built chain.**
#[tokio::test]
async fn test_chain_from_config_uses_configured_handlers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"777": "Cached 777"}}"#).unwrap();
    let config = ChainConfig {
        blocked_ips: Some(vec!["8.8.8.8".to_string()]),
        cache_file: Some(file.path().to_path_buf()),
        log_file: None,
    };
    let chain = chain_from_config(&config).unwrap();

    let blocked = chain.handle(&Request::new("1", "x", "8.8.8.8")).await.unwrap();
    assert_eq!(blocked.to_string(), "Rejected: Blocked IP 8.8.8.8");

    let default_blocked_now_allowed = chain
        .handle(&Request::new("2", "x", "192.168.0.10"))
        .await
        .unwrap();
    assert_eq!(default_blocked_now_allowed.to_string(), "Processed: 2 with data 'x'");

    let cached = chain.handle(&Request::new("777", "x", "1.1.1.1")).await.unwrap();
    assert_eq!(cached.to_string(), "Cached 777");

    let default_cache_gone = chain.handle(&Request::new("123", "x", "1.1.1.1")).await.unwrap();
    assert_eq!(default_cache_gone.to_string(), "Processed: 123 with data 'x'");
}
