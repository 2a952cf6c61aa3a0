use crate::core::{ConfigProvider, Price, PricingService, PricingServiceFactory};
use crate::utils::error::{OrderError, PricingError, PricingResult, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct OrderBody<'a> {
    flavour: &'a str,
    quantity: i64,
}

/// The shop may answer with a bare number or `{"price": n}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceBody {
    Bare(Price),
    Wrapped { price: Price },
}

impl PriceBody {
    fn into_price(self) -> Price {
        match self {
            PriceBody::Bare(price) | PriceBody::Wrapped { price } => price,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pricing service backed by a remote shop endpoint.
#[derive(Debug, Clone)]
pub struct HttpPricingService {
    client: Client,
    endpoint: String,
}

impl HttpPricingService {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PricingService for HttpPricingService {
    async fn order(&self, flavour: &str, quantity: i64) -> PricingResult<Price> {
        tracing::debug!("Making pricing request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&OrderBody { flavour, quantity })
            .send()
            .await
            .map_err(|e| PricingError::unavailable(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Pricing response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| PricingError::unavailable(e.to_string()))?;

        if !status.is_success() {
            let message = rejection_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "request rejected".to_string());

            // 5xx is an outage on the shop side, not a verdict on the order
            if status.is_server_error() {
                return Err(PricingError::unavailable(format!(
                    "status {}: {}",
                    status.as_u16(),
                    message
                )));
            }
            return Err(PricingError::rejected(status.as_u16(), message));
        }

        serde_json::from_str::<PriceBody>(&body)
            .map(PriceBody::into_price)
            .map_err(|e| PricingError::MalformedResponse {
                message: format!("{} (body: {})", e, excerpt(&body)),
            })
    }
}

fn rejection_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return Some(message);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(excerpt(trimmed))
    }
}

const BODY_EXCERPT_CHARS: usize = 200;

/// Caps a response body before it lands in an error message.
fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Hands out an [`HttpPricingService`] per order. The underlying connection
/// pool is shared; the service values themselves are not.
#[derive(Debug, Clone)]
pub struct HttpPricingFactory {
    client: Client,
    endpoint: String,
}

impl HttpPricingFactory {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(|e| OrderError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.pricing_endpoint().to_string(),
        })
    }
}

impl PricingServiceFactory for HttpPricingFactory {
    type Service = HttpPricingService;

    fn create(&self) -> Result<HttpPricingService> {
        Ok(HttpPricingService::new(
            self.client.clone(),
            self.endpoint.clone(),
        ))
    }
}
