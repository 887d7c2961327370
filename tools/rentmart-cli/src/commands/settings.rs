//! Settings management commands.

use anyhow::{bail, Result};
use rentmart_commerce::settings::PlatformSettings;

use super::{SettingsArgs, SettingsCommand};
use crate::config;
use crate::context::Context;

/// Run the settings command.
pub async fn run(args: SettingsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SettingsCommand::Show => show(ctx),
        SettingsCommand::Init { path, force } => init(&path, force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.settings);
        return Ok(());
    }
    ctx.output.header("Effective settings");
    match &ctx.settings_path {
        Some(path) => ctx.output.kv("source", path),
        None => ctx.output.kv("source", "built-in defaults"),
    }
    println!();
    print!("{}", config::to_toml(&ctx.settings)?);
    Ok(())
}

fn init(path: &str, force: bool, ctx: &Context) -> Result<()> {
    if std::path::Path::new(path).exists() && !force {
        bail!("{} already exists; pass --force to overwrite", path);
    }
    config::save_settings(&PlatformSettings::default(), path)?;
    ctx.output
        .success(&format!("Wrote default settings to {}", path));
    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output
        .list_item(&format!("rentmart --settings {} quote", path));
    ctx.output
        .list_item(&format!("rentmart --settings {} demo", path));
    Ok(())
}
