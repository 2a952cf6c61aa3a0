use async_trait::async_trait;
use online_order::{
    OrderError, OrderHandler, OrderMessage, OrderRequest, Price, PricingError, PricingResult,
    PricingService,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Pricing stub with a fixed outcome that records what it was asked.
#[derive(Clone)]
struct StubPricing {
    outcome: PricingResult<Price>,
    calls: Arc<Mutex<Vec<(String, i64)>>>,
}

impl StubPricing {
    fn returning(price: f64) -> Self {
        Self {
            outcome: Ok(Price(price)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(error: PricingError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<(String, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PricingService for StubPricing {
    async fn order(&self, flavour: &str, quantity: i64) -> PricingResult<Price> {
        self.calls
            .lock()
            .unwrap()
            .push((flavour.to_string(), quantity));
        self.outcome.clone()
    }
}

fn handler_for(
    stub: &StubPricing,
) -> (
    OrderHandler<impl Fn() -> StubPricing + Send + Sync>,
    Arc<AtomicUsize>,
) {
    let created = Arc::new(AtomicUsize::new(0));
    let counter = created.clone();
    let stub = stub.clone();
    let handler = OrderHandler::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        stub.clone()
    });
    (handler, created)
}

#[tokio::test]
async fn test_vanilla_price_passes_through() {
    let stub = StubPricing::returning(5.00);
    let (handler, _) = handler_for(&stub);

    let price = handler
        .handle(Some(OrderMessage::new("vanilla", 2)))
        .await
        .unwrap();

    assert_eq!(price, Price(5.00));
    assert_eq!(stub.calls(), vec![("vanilla".to_string(), 2)]);
}

#[tokio::test]
async fn test_unknown_flavour_failure_propagates_unchanged() {
    let failure = PricingError::rejected(404, "unknown flavour");
    let stub = StubPricing::failing(failure.clone());
    let (handler, _) = handler_for(&stub);

    let err = handler
        .handle(Some(OrderMessage::new("unknown", 1)))
        .await
        .unwrap_err();

    assert_eq!(err.pricing_failure(), Some(&failure));
    assert_eq!(err.to_string(), failure.to_string());
}

#[tokio::test]
async fn test_zero_quantity_is_forwarded_without_local_check() {
    let failure = PricingError::rejected(422, "invalid quantity");
    let stub = StubPricing::failing(failure.clone());
    let (handler, _) = handler_for(&stub);

    let err = handler
        .handle(Some(OrderMessage::new("chocolate", 0)))
        .await
        .unwrap_err();

    assert_eq!(err.pricing_failure(), Some(&failure));
    assert_eq!(stub.calls(), vec![("chocolate".to_string(), 0)]);
}

#[tokio::test]
async fn test_negative_quantity_reaches_service() {
    let stub = StubPricing::returning(-2.5);
    let (handler, _) = handler_for(&stub);

    let price = handler
        .handle(Some(OrderMessage::new("strawberry", -1)))
        .await
        .unwrap();

    assert_eq!(price, Price(-2.5));
    assert_eq!(stub.calls(), vec![("strawberry".to_string(), -1)]);
}

#[tokio::test]
async fn test_absent_request_never_reaches_service() {
    let stub = StubPricing::returning(5.00);
    let (handler, created) = handler_for(&stub);

    let err = handler.handle(None).await.unwrap_err();

    assert!(matches!(err, OrderError::InvalidRequest { .. }));
    assert_eq!(created.load(Ordering::SeqCst), 0);
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_null_json_payload_is_invalid() {
    let stub = StubPricing::returning(5.00);
    let (handler, created) = handler_for(&stub);

    let err = handler.handle_json(json!(null)).await.unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(created.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_payloads_are_invalid() {
    let stub = StubPricing::returning(5.00);
    let (handler, _) = handler_for(&stub);

    let payloads = [
        json!({}),
        json!({"flavour": "vanilla"}),
        json!({"quantity": 2}),
        json!({"flavour": "", "quantity": 2}),
        json!({"flavour": "vanilla", "quantity": 2.5}),
        json!([1, 2]),
        json!(["vanilla", 2]),
    ];

    for payload in payloads {
        let err = handler.handle_json(payload.clone()).await.unwrap_err();
        assert!(err.is_invalid_request(), "payload {} was accepted", payload);
    }
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_positional_array_payload_is_not_an_order() {
    let stub = StubPricing::returning(5.00);
    let (handler, created) = handler_for(&stub);

    let err = handler
        .handle_json(json!(["vanilla", 2]))
        .await
        .unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(created.load(Ordering::SeqCst), 0);
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_json_payload_is_priced() {
    let stub = StubPricing::returning(3.75);
    let (handler, _) = handler_for(&stub);

    let price = handler
        .handle_json(json!({"flavour": "pistachio", "quantity": 3}))
        .await
        .unwrap();

    assert_eq!(price.value(), 3.75);
}

#[tokio::test]
async fn test_repeated_calls_are_identical_and_use_fresh_services() {
    let stub = StubPricing::returning(5.00);
    let (handler, created) = handler_for(&stub);
    let request = OrderRequest::new("vanilla", 2).unwrap();

    let first = handler.handle_request(&request).await.unwrap();
    let second = handler.handle_request(&request).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(created.load(Ordering::SeqCst), 2);
    assert_eq!(stub.calls().len(), 2);
}

#[tokio::test]
async fn test_concurrent_orders_are_independent() {
    let stub = StubPricing::returning(1.25);
    let (handler, created) = handler_for(&stub);

    let (vanilla, chocolate, mint) = tokio::join!(
        handler.handle(Some(OrderMessage::new("vanilla", 1))),
        handler.handle(Some(OrderMessage::new("chocolate", 2))),
        handler.handle(Some(OrderMessage::new("mint", 3))),
    );

    assert_eq!(vanilla.unwrap(), Price(1.25));
    assert_eq!(chocolate.unwrap(), Price(1.25));
    assert_eq!(mint.unwrap(), Price(1.25));
    assert_eq!(created.load(Ordering::SeqCst), 3);

    let mut calls = stub.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            ("chocolate".to_string(), 2),
            ("mint".to_string(), 3),
            ("vanilla".to_string(), 1),
        ]
    );
}
