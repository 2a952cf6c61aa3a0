use crate::domain::model::Price;
use crate::utils::error::{PricingResult, Result};
use async_trait::async_trait;

/// Owns every pricing and stock decision for an order.
#[async_trait]
pub trait PricingService: Send + Sync {
    async fn order(&self, flavour: &str, quantity: i64) -> PricingResult<Price>;
}

/// Resolves a pricing service at call time, so each order gets its own instance.
pub trait PricingServiceFactory: Send + Sync {
    type Service: PricingService;

    fn create(&self) -> Result<Self::Service>;
}

impl<F, S> PricingServiceFactory for F
where
    F: Fn() -> S + Send + Sync,
    S: PricingService,
{
    type Service = S;

    fn create(&self) -> Result<S> {
        Ok(self())
    }
}

pub trait ConfigProvider: Send + Sync {
    fn pricing_endpoint(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}
