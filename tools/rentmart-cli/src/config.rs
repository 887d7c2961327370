//! Settings file loading.

use anyhow::{Context, Result};
use rentmart_commerce::settings::PlatformSettings;
use tracing::debug;

/// Load platform settings from a TOML file, falling back to defaults
/// when no path is given. Settings are validated after parsing.
pub fn load_settings(path: Option<&str>) -> Result<PlatformSettings> {
    let settings = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path))?;
            let settings: PlatformSettings = toml::from_str(&content)
                .with_context(|| format!("Failed to parse settings file: {}", path))?;
            debug!(path, "settings loaded");
            settings
        }
        None => PlatformSettings::default(),
    };
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

/// Render settings as TOML.
pub fn to_toml(settings: &PlatformSettings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to render settings as TOML")
}

/// Write settings to a TOML file.
pub fn save_settings(settings: &PlatformSettings, path: &str) -> Result<()> {
    std::fs::write(path, to_toml(settings)?)
        .with_context(|| format!("Failed to write settings file: {}", path))
}
