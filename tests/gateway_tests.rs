//! Gateway hand-off against a mock HTTP gateway

use http::{HeaderMap, HeaderValue};
use mockito::Matcher;
use paysheet::{GatewayClient, GatewayConfig, PaySheetError, PaymentData, PaymentProcessor};

fn approved_payload(token: &str) -> PaymentData {
    serde_json::from_value(serde_json::json!({
        "paymentMethodData": {
            "tokenizationData": { "type": "PAYMENT_GATEWAY", "token": token }
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn process_posts_charge_with_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/charges")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "token": "examplePaymentMethodToken",
            "currencyCode": "JPY"
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = GatewayClient::new(GatewayConfig::new(server.url()), "JPY").unwrap();
    client
        .process(&approved_payload("examplePaymentMethodToken"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn process_sends_extra_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/charges")
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("secret"));
    let client =
        GatewayClient::with_headers(GatewayConfig::new(server.url()), "JPY", headers).unwrap();

    client.process(&approved_payload("tok")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn process_maps_error_status_to_gateway_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/charges")
        .with_status(502)
        .create_async()
        .await;

    let client = GatewayClient::new(GatewayConfig::new(server.url()), "JPY").unwrap();
    let result = client.process(&approved_payload("tok")).await;

    assert!(matches!(result, Err(PaySheetError::Gateway { .. })));
}

#[tokio::test]
async fn process_rejects_tokenless_payload_without_calling_gateway() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/charges")
        .expect(0)
        .create_async()
        .await;

    let payload: PaymentData = serde_json::from_value(serde_json::json!({
        "paymentMethodData": { "tokenizationData": {} }
    }))
    .unwrap();

    let client = GatewayClient::new(GatewayConfig::new(server.url()), "JPY").unwrap();
    let result = client.process(&payload).await;

    assert!(matches!(result, Err(PaySheetError::MissingToken)));
    mock.assert_async().await;
}
