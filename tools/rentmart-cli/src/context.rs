//! Shared command context.

use anyhow::Result;
use rentmart_commerce::settings::PlatformSettings;

use crate::config;
use crate::output::Output;

/// Everything a command needs: the effective settings and the output
/// handler.
pub struct Context {
    pub settings: PlatformSettings,
    pub settings_path: Option<String>,
    pub output: Output,
}

impl Context {
    /// Load settings from the given file, or defaults when none is given.
    pub fn load(settings_path: Option<&str>, output: Output) -> Result<Self> {
        let settings = config::load_settings(settings_path)?;
        Ok(Self {
            settings,
            settings_path: settings_path.map(String::from),
            output,
        })
    }
}
