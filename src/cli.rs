//! Command-line options.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::config::{DEFAULT_BATTERY, DEFAULT_LOCATION, DEFAULT_SCALE, DEFAULT_STORE_FILE, MAX_SCALE};

#[derive(Debug, Parser, Clone)]
#[command(name = "modulus-sim", about = "Modulus watchface desktop simulator")]
pub struct Cli {
    /// JSON file backing the persisted settings
    #[arg(long, value_hint = ValueHint::FilePath, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Keep settings in memory only; nothing is written to disk
    #[arg(long, action = ArgAction::SetTrue)]
    pub ephemeral: bool,

    /// Window pixel scale
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SCALE)))]
    pub scale: u32,

    /// Force 24-hour (`true`) or 12-hour (`false`) time instead of the host default
    #[arg(long, action = ArgAction::Set)]
    pub twenty_four_hour: Option<bool>,

    /// Battery charge at start-up, in percent
    #[arg(long, default_value_t = DEFAULT_BATTERY, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub battery: u8,

    /// Have the simulated companion report Fahrenheit
    #[arg(long, action = ArgAction::SetTrue)]
    pub fahrenheit: bool,

    /// Location name reported by the simulated companion
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
}
