//! Command line and environment configuration

use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CITY, DEFAULT_TIMEOUT_SECS};
use crate::i18n::Language;

#[derive(Debug, Parser)]
#[command(name = "weather-desk", version, about = "Localized wttr.in weather reports")]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive full-screen weather desk (default)
    Desk,
    /// Serve weather reports as MCP tools over stdio
    Serve,
}

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Base URL of the wttr.in service
    #[arg(long, env = "WTTR_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Interface language
    #[arg(long, env = "WEATHER_LANG", value_enum, default_value_t = Language::Ua, global = true)]
    pub lang: Language,

    /// City loaded on startup and for empty searches
    #[arg(long, env = "WEATHER_CITY", default_value = DEFAULT_CITY, global = true)]
    pub city: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "WEATHER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: Language::default(),
            city: DEFAULT_CITY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
