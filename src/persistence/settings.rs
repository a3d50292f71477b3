use crate::persistence::atomic_write;
use crate::timer::TimerConfig;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Failure modes when reading the settings file. Callers that do not care
/// about the distinction use `load_settings`, which falls back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load settings from a specific path. An absent file yields the defaults;
/// unreadable or malformed files are reported as errors.
///
/// Persisted values are re-validated field by field: an out-of-range value
/// in the file is discarded in favor of that field's default.
pub fn load_settings_from<P: AsRef<Path>>(path: P) -> Result<TimerConfig, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(TimerConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let stored: TimerConfig = serde_json::from_str(&content)?;

    let mut config = TimerConfig::default();
    config.apply_update(stored);
    Ok(config)
}

/// Load settings from the default location, falling back to the documented
/// defaults (25/5/15/4) on any failure.
pub fn load_settings() -> TimerConfig {
    let path = match crate::persistence::settings_file() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: could not resolve settings path: {}", e);
            return TimerConfig::default();
        }
    };

    match load_settings_from(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load settings, using defaults: {}", e);
            TimerConfig::default()
        }
    }
}

/// Save settings to a specific path (atomic write)
pub fn save_settings_to<P: AsRef<Path>>(path: P, config: &TimerConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Save settings to the default location
pub fn save_settings(config: &TimerConfig) -> Result<()> {
    let path = crate::persistence::settings_file()?;
    save_settings_to(path, config)
}

/// Delete the settings file, restoring defaults on the next run
pub fn delete_settings() -> Result<bool> {
    let path = crate::persistence::settings_file()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        return Ok(true);
    }
    Ok(false)
}
