use crate::core::{OrderMessage, OrderRequest, Price, PricingService, PricingServiceFactory};
use crate::utils::error::{OrderError, Result};

/// Entry point for one order: resolves a pricing service and returns its price as-is.
pub struct OrderHandler<F: PricingServiceFactory> {
    factory: F,
}

impl<F: PricingServiceFactory> OrderHandler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Handles a payload as delivered by the host. `None` is an absent request
    /// and fails before any pricing service is resolved.
    pub async fn handle(&self, message: Option<OrderMessage>) -> Result<Price> {
        let message =
            message.ok_or_else(|| OrderError::invalid_request("order request is absent"))?;
        let request = OrderRequest::try_from(message)?;
        self.handle_request(&request).await
    }

    pub async fn handle_json(&self, payload: serde_json::Value) -> Result<Price> {
        let message = OrderMessage::from_json(payload)?;
        self.handle(message).await
    }

    pub async fn handle_request(&self, request: &OrderRequest) -> Result<Price> {
        tracing::debug!(
            "Pricing order: flavour={} quantity={}",
            request.flavour(),
            request.quantity()
        );

        let service = self.factory.create()?;
        let price = service
            .order(request.flavour(), request.quantity())
            .await?;

        tracing::debug!("Priced order for {} at {}", request.flavour(), price);
        Ok(price)
    }
}
