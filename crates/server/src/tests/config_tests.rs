use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_file(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("site_settings_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let loaded = load_settings_from(Path::new("does-not-exist.toml"), vars(&[]));
    assert_eq!(loaded.settings.port, 3000);
    assert_eq!(loaded.settings.environment, Environment::Development);
    assert_eq!(loaded.settings.public_dir, PathBuf::from("public"));
    assert_eq!(loaded.settings.body_limit_bytes, 10 * 1024 * 1024);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn port_and_node_env_override_file() {
    let path = temp_file("port = 8080\nenvironment = \"development\"\npublic_dir = \"static\"\n");
    let loaded = load_settings_from(&path, vars(&[("PORT", "4000"), ("NODE_ENV", "production")]));
    assert_eq!(loaded.settings.port, 4000);
    assert_eq!(loaded.settings.environment, Environment::Production);
    assert_eq!(loaded.settings.public_dir, PathBuf::from("static"));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn app_prefixed_vars_win_over_conventional_ones() {
    let loaded = load_settings_from(
        Path::new("does-not-exist.toml"),
        vars(&[("PORT", "4000"), ("APP__PORT", "5000"), ("APP__BIND_HOST", "127.0.0.1")]),
    );
    assert_eq!(loaded.settings.port, 5000);
    assert_eq!(
        loaded.settings.bind_addr().expect("addr"),
        "127.0.0.1:5000".parse::<SocketAddr>().expect("socket addr")
    );
}

#[test]
fn invalid_values_are_reported_and_ignored() {
    let loaded = load_settings_from(
        Path::new("does-not-exist.toml"),
        vars(&[("PORT", "eighty"), ("NODE_ENV", "staging")]),
    );
    assert_eq!(loaded.settings.port, 3000);
    assert_eq!(loaded.settings.environment, Environment::Development);
    assert_eq!(loaded.warnings.len(), 2);
}

#[test]
fn unknown_environment_keeps_file_value() {
    let path = temp_file("environment = \"production\"\n");
    let loaded = load_settings_from(&path, vars(&[("NODE_ENV", "staging")]));
    assert_eq!(loaded.settings.environment, Environment::Production);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("keeping production"));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_file_is_reported() {
    let path = temp_file("port = \"not a number\"");
    let loaded = load_settings_from(&path, vars(&[]));
    assert_eq!(loaded.settings.port, 3000);
    assert_eq!(loaded.warnings.len(), 1);
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn environment_parsing_is_case_insensitive() {
    assert_eq!(Environment::parse("Production"), Some(Environment::Production));
    assert_eq!(Environment::parse(" DEV "), Some(Environment::Development));
    assert_eq!(Environment::parse("test"), None);
}
