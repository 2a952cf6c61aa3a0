use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use online_order::utils::{logger, validation::Validate};
use online_order::{HttpPricingFactory, LambdaConfig, OrderHandler, Price};
use serde_json::Value;

async fn function_handler(
    handler: &OrderHandler<HttpPricingFactory>,
    event: LambdaEvent<Value>,
) -> Result<Price, Error> {
    let request_id = event.context.request_id.clone();
    tracing::info!("Handling order invocation {}", request_id);

    match handler.handle_json(event.payload).await {
        Ok(price) => {
            tracing::info!("Order {} priced at {}", request_id, price);
            Ok(price)
        }
        Err(e) => {
            tracing::error!("Order {} failed: {}", request_id, e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let handler = OrderHandler::new(HttpPricingFactory::from_config(&config)?);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
