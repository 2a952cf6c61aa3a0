// Domain layer: order models and the pricing port. No transport or runtime dependencies.

pub mod model;
pub mod ports;
