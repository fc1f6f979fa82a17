use std::{collections::HashMap, fs};

use anyhow::{bail, Context};
use shared::domain::{PlaylistOwnerId, DEFAULT_PLAYLIST_OWNER};
use url::Url;

pub const SETTINGS_FILE: &str = "view_binder.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:4567";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub playlist_owner_id: PlaylistOwnerId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            playlist_owner_id: DEFAULT_PLAYLIST_OWNER,
        }
    }
}

/// Defaults, then `view_binder.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

pub fn settings_from_sources(
    raw_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) {
            if let Some(v) = file_cfg.get("base_url").and_then(toml::Value::as_str) {
                settings.base_url = v.to_string();
            }
            if let Some(v) = file_cfg.get("playlist_owner_id").and_then(owner_id_from_toml) {
                settings.playlist_owner_id = v;
            }
        }
    }

    if let Some(v) = env("VIEW_BINDER_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("APP__PLAYLIST_OWNER_ID") {
        if let Ok(parsed) = v.trim().parse::<i64>() {
            settings.playlist_owner_id = PlaylistOwnerId(parsed);
        }
    }

    settings.base_url = normalize_base_url(&settings.base_url);
    settings
}

fn owner_id_from_toml(value: &toml::Value) -> Option<PlaylistOwnerId> {
    match value {
        toml::Value::Integer(id) => Some(PlaylistOwnerId(*id)),
        toml::Value::String(raw) => raw.trim().parse().ok().map(PlaylistOwnerId),
        _ => None,
    }
}

/// Trims whitespace and trailing slashes; an empty value falls back to the default.
pub fn normalize_base_url(raw_base_url: &str) -> String {
    let trimmed = raw_base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Settings::default().base_url;
    }
    trimmed.to_string()
}

/// Normalizes and checks that the base URL is an absolute http(s) URL.
pub fn prepare_base_url(raw_base_url: &str) -> anyhow::Result<String> {
    let base_url = normalize_base_url(raw_base_url);
    let parsed =
        Url::parse(&base_url).with_context(|| format!("invalid base url '{base_url}'"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "base url '{base_url}' must use http or https, got '{}'",
            parsed.scheme()
        );
    }
    if parsed.cannot_be_a_base() {
        bail!("base url '{base_url}' cannot carry an api path");
    }

    Ok(base_url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
