use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::parse::NumberMode;

pub const SETTINGS_FILE: &str = "admin.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub strict_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            strict_numbers: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    base_url: Option<String>,
    strict_numbers: Option<bool>,
}

impl Settings {
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        Url::parse(self.base_url.trim()).map_err(|source| SettingsError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn number_mode(&self) -> NumberMode {
        NumberMode::from_strict_flag(self.strict_numbers)
    }
}

/// Defaults, then `admin.toml` in the working directory, then the environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<SettingsFile>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.base_url {
                    settings.base_url = v;
                }
                if let Some(v) = file_cfg.strict_numbers {
                    settings.strict_numbers = v;
                }
            }
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "ignoring unreadable settings file"
            ),
        }
    }

    if let Some(v) = env("ADMIN_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("APP__STRICT_NUMBERS") {
        match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => settings.strict_numbers = true,
            "0" | "false" | "no" => settings.strict_numbers = false,
            other => warn!(value = other, "ignoring APP__STRICT_NUMBERS"),
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
