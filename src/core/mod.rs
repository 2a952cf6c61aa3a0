pub mod handler;

pub use crate::domain::model::{OrderMessage, OrderRequest, Price};
pub use crate::domain::ports::{ConfigProvider, PricingService, PricingServiceFactory};
pub use crate::utils::error::Result;
