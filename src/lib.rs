pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpPricingFactory, HttpPricingService};
pub use crate::config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use crate::core::handler::OrderHandler;
pub use crate::domain::model::{OrderMessage, OrderRequest, Price};
pub use crate::domain::ports::{ConfigProvider, PricingService, PricingServiceFactory};
pub use crate::utils::error::{OrderError, PricingError, PricingResult, Result};
