pub mod lambda;
pub mod toml_config;

pub use crate::core::ConfigProvider;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_pricing_settings, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "online-order")]
#[command(about = "Price an ice cream order through the shop's pricing service")]
pub struct CliConfig {
    #[arg(long)]
    pub flavour: String,

    /// Passed through as given, including zero or negative counts
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,

    #[arg(long, default_value = "http://localhost:8080/order")]
    pub pricing_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// TOML file with a [pricing] section; replaces the endpoint and timeout flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn pricing_endpoint(&self) -> &str {
        &self.pricing_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_pricing_settings(&self.pricing_endpoint, self.timeout_secs)
    }
}
