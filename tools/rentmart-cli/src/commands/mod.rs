//! CLI command implementations.

pub mod demo;
pub mod quote;
pub mod settings;

use clap::{Args, Subcommand};

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Requested rental duration in months.
    #[arg(short, long, default_value = "6")]
    pub months: u32,

    /// Shortest plan duration in months.
    #[arg(long, default_value = "3")]
    pub base_duration: u32,

    /// Shortest plan monthly rent in rupees.
    #[arg(long, default_value = "599")]
    pub base_rent: i64,

    /// Security deposit on the shortest plan in rupees.
    #[arg(long, default_value = "2000")]
    pub deposit: i64,

    /// Delivery fee in rupees.
    #[arg(long)]
    pub delivery_fee: Option<i64>,

    /// Installation fee in rupees.
    #[arg(long)]
    pub installation_fee: Option<i64>,

    /// Longest plan duration in months.
    #[arg(long, default_value = "12")]
    pub long_duration: u32,

    /// Longest plan monthly rent in rupees.
    #[arg(long, default_value = "399")]
    pub long_rent: i64,

    /// Security deposit on the longest plan in rupees.
    #[arg(long, default_value = "1000")]
    pub long_deposit: i64,

    /// Advance payment discount percent offered on the product.
    #[arg(long, default_value = "0")]
    pub advance_percent: f64,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Rental duration for the demo rental line, in months.
    #[arg(short, long, default_value = "6")]
    pub months: u32,

    /// Add the protection plan to the rental line.
    #[arg(long)]
    pub protection: bool,

    /// Also buy the demo purchase product outright.
    #[arg(long)]
    pub include_purchase: bool,

    /// Billing month to collect (YYYY-MM); defaults to the current month.
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for the settings command.
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the effective settings.
    Show,
    /// Write a default settings file.
    Init {
        /// Destination path.
        #[arg(default_value = "rentmart.toml")]
        path: String,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
