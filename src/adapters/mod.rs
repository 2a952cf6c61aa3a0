// Adapters layer: concrete pricing collaborators for the handler.

pub mod http_pricing;

pub use http_pricing::{HttpPricingFactory, HttpPricingService};
