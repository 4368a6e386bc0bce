use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use super::*;

fn temp_settings_path(tag: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("admin_console_{tag}_{suffix}.toml"))
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(&temp_settings_path("missing"), |_| None);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.number_mode(), NumberMode::Lenient);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_path("file");
    fs::write(
        &path,
        "base_url = \"http://shop.local:8080/\"\nstrict_numbers = true\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path, |_| None);
    assert_eq!(settings.base_url, "http://shop.local:8080/");
    assert_eq!(settings.number_mode(), NumberMode::Strict);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_settings_path("env");
    fs::write(&path, "base_url = \"http://from-file\"\n").expect("write settings");

    let vars: HashMap<&str, &str> = HashMap::from([
        ("ADMIN_BASE_URL", "http://from-admin-env"),
        ("APP__BASE_URL", "http://from-app-env"),
        ("APP__STRICT_NUMBERS", "yes"),
    ]);
    let settings = load_settings_from(&path, |key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.base_url, "http://from-app-env");
    assert!(settings.strict_numbers);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_file_is_ignored() {
    let path = temp_settings_path("malformed");
    fs::write(&path, "base_url = [").expect("write settings");

    let settings = load_settings_from(&path, |_| None);
    assert_eq!(settings, Settings::default());

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn base_url_must_be_absolute() {
    let settings = Settings {
        base_url: "not a url".into(),
        strict_numbers: false,
    };
    assert!(matches!(
        settings.base_url(),
        Err(SettingsError::InvalidBaseUrl { .. })
    ));
    assert!(Settings::default().base_url().is_ok());
}
