use crate::utils::error::{OrderError, Result};
use serde::{Deserialize, Serialize};

/// Order payload as the hosting runtime delivers it. Nothing is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub flavour: Option<String>,
    pub quantity: Option<i64>,
}

impl OrderMessage {
    pub fn new(flavour: impl Into<String>, quantity: i64) -> Self {
        Self {
            flavour: Some(flavour.into()),
            quantity: Some(quantity),
        }
    }

    /// Decodes a raw JSON payload. `null` yields `Ok(None)`; any other
    /// shape that is not an order object is an invalid request.
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| OrderError::invalid_request(format!("malformed order payload: {}", e))),
            _ => Err(OrderError::invalid_request(
                "order payload must be a JSON object",
            )),
        }
    }
}

/// A validated order: flavour is non-blank and quantity is present.
///
/// Quantity is deliberately left unchecked; zero or negative counts are
/// forwarded and the pricing service decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    flavour: String,
    quantity: i64,
}

impl OrderRequest {
    pub fn new(flavour: impl Into<String>, quantity: i64) -> Result<Self> {
        let flavour = flavour.into();
        if flavour.trim().is_empty() {
            return Err(OrderError::invalid_request("flavour must not be empty"));
        }
        Ok(Self { flavour, quantity })
    }

    pub fn flavour(&self) -> &str {
        &self.flavour
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl TryFrom<OrderMessage> for OrderRequest {
    type Error = OrderError;

    fn try_from(message: OrderMessage) -> Result<Self> {
        let flavour = message
            .flavour
            .ok_or_else(|| OrderError::invalid_request("missing field 'flavour'"))?;
        let quantity = message
            .quantity
            .ok_or_else(|| OrderError::invalid_request("missing field 'quantity'"))?;
        Self::new(flavour, quantity)
    }
}

/// Price computed by the pricing service, in fractional currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub f64);

impl Price {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
