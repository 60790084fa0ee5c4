use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{
    DataPathSource, load_settings_string, resolve_data_path, save_data_path, settings_path,
};
use crate::{CliError, Status};

/// Show the resolved data path, where it came from, and the settings file.
pub(crate) fn run_config_show(data_override: Option<PathBuf>) -> Result<Status, CliError> {
    let (data_path, source) = resolve_data_path(data_override);
    let settings = settings_path();

    println!(
        "{}",
        "Pokedex Configuration".if_supports_color(Stdout, |t| t.bold())
    );
    println!("  Data file:  {} ({})", data_path.display(), source.describe());
    if source == DataPathSource::Default || !data_path.exists() {
        println!(
            "  {}",
            "Data file does not exist yet; run 'pokedex init' to create it."
                .if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    println!("  Settings:   {}", settings.display());

    if let Some(contents) = load_settings_string(&settings) {
        println!();
        for line in contents.lines() {
            println!("    {line}");
        }
    }
    Ok(Status::Done)
}

pub(crate) fn run_config_path() -> Result<Status, CliError> {
    println!("{}", settings_path().display());
    Ok(Status::Done)
}

/// Persist the data file location in the settings file.
pub(crate) fn run_config_set_data(path: &Path) -> Result<Status, CliError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    save_data_path(&settings_path(), Some(&absolute))
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!("op=config-set-data path={}", absolute.display());
    println!("Data file set to {}", absolute.display());
    Ok(Status::Done)
}

pub(crate) fn run_config_clear_data() -> Result<Status, CliError> {
    save_data_path(&settings_path(), None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!("op=config-clear-data");
    println!("Data file setting cleared");
    Ok(Status::Done)
}
