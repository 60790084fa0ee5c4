//! Application settings (data file location, config file location).
//!
//! The settings file is `~/.config/pokedex/settings.toml`. Only the
//! `[data] csv_path` key is read; other keys are preserved on write.

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the saved data path.
pub(crate) const DATA_ENV_VAR: &str = "POKEDEX_DATA";

/// Data file used when nothing else is configured.
pub(crate) const DEFAULT_DATA_PATH: &str = "models/pokemon.csv";

/// Canonical path to the settings file: `~/.config/pokedex/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pokedex").join("settings.toml")
}

/// Where a resolved data path came from, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataPathSource {
    Flag,
    Environment,
    Settings,
    Default,
}

impl DataPathSource {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            DataPathSource::Flag => "--data flag",
            DataPathSource::Environment => DATA_ENV_VAR,
            DataPathSource::Settings => "settings.toml",
            DataPathSource::Default => "default",
        }
    }
}

/// Resolve the data file path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `POKEDEX_DATA` environment variable
/// 3. Saved `data.csv_path` in `settings.toml`
/// 4. `models/pokemon.csv` relative to the current directory
pub(crate) fn resolve_data_path(cli_override: Option<PathBuf>) -> (PathBuf, DataPathSource) {
    if let Some(p) = cli_override {
        return (p, DataPathSource::Flag);
    }
    if let Some(p) = std::env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
        return (PathBuf::from(p), DataPathSource::Environment);
    }
    if let Some(p) = load_data_path(&settings_path()) {
        return (p, DataPathSource::Settings);
    }
    (PathBuf::from(DEFAULT_DATA_PATH), DataPathSource::Default)
}

/// Read `data.csv_path` from the given settings file, if set.
pub(crate) fn load_data_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("data")?.get("csv_path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the data path in the given settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub(crate) fn save_data_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [data] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let data = table
        .entry("data")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let data_table = data
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[data] is not a table"))?;

    match path {
        Some(p) => {
            data_table.insert(
                "csv_path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            data_table.remove("csv_path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
