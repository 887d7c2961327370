//! RentMart CLI - operator tool for the rental marketplace.
//!
//! Commands:
//! - `rentmart quote` - Price a rental duration against a plan ladder
//! - `rentmart demo` - Run the marketplace flow end to end in memory
//! - `rentmart settings` - Manage platform settings

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DemoArgs, QuoteArgs, SettingsArgs};

/// RentMart CLI - price rentals and drive the marketplace flow
#[derive(Parser)]
#[command(name = "rentmart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a rental duration against a plan ladder
    Quote(QuoteArgs),

    /// Seed the demo catalog, then checkout, confirm, and collect rent
    Demo(DemoArgs),

    /// Manage platform settings
    Settings(SettingsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.settings.as_deref(), output)?;

    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Demo(args) => commands::demo::run(args, &ctx).await,
        Commands::Settings(args) => commands::settings::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
