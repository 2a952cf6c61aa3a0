use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::core::ConfigProvider;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_pricing_settings, validate_required_field, Validate};
use std::env;

pub const PRICING_ENDPOINT_VAR: &str = "PRICING_ENDPOINT";
pub const PRICING_TIMEOUT_VAR: &str = "PRICING_TIMEOUT_SECONDS";

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub pricing_endpoint: String,
    pub request_timeout_secs: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(PRICING_ENDPOINT_VAR);
        let pricing_endpoint = validate_required_field(PRICING_ENDPOINT_VAR, &endpoint)?.clone();

        let request_timeout_secs = match lookup(PRICING_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| OrderError::InvalidConfigValueError {
                    field: PRICING_TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            pricing_endpoint,
            request_timeout_secs,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn pricing_endpoint(&self) -> &str {
        &self.pricing_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_pricing_settings(&self.pricing_endpoint, self.request_timeout_secs)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
