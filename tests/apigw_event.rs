//! Drives raw API Gateway proxy events through the handler, the same JSON the
//! deployed function receives from the runtime.

use lambda_http::{request::from_str, Body, Response};
use lead_capture::config::Config;
use lead_capture::handler::capture_lead;
use serde_json::{json, Value};
use uuid::Uuid;

fn response_json(response: &Response<Body>) -> Value {
    match response.body() {
        Body::Text(text) => serde_json::from_str(text).expect("body is not json"),
        _ => panic!("invalid body"),
    }
}

#[tokio::test]
async fn proxy_event_produces_a_receipt() {
    let request = from_str(include_str!("fixtures/apigw_proxy_lead.json"))
        .expect("failed to parse proxy event");
    let config = Config {
        environment: "prod".to_string(),
        ..Config::default()
    };

    let response = capture_lead(request, &config).await.expect("handler failed");
    assert_eq!(response.status(), 200);

    let receipt = response_json(&response);
    assert_eq!(receipt["success"], json!(true));
    assert_eq!(receipt["message"], json!("Thank you for your submission"));
    assert_eq!(receipt["_meta"]["environment"], json!("prod"));
    assert_eq!(receipt["_meta"]["placeholder"], json!(true));
    Uuid::parse_str(receipt["leadId"].as_str().expect("missing leadId"))
        .expect("leadId is not a uuid");

    let timestamp = receipt["_meta"]["timestamp"]
        .as_str()
        .expect("missing timestamp");
    assert!(timestamp.ends_with('Z'), "timestamp is not UTC: {timestamp}");
}

#[tokio::test]
async fn base64_encoded_body_is_decoded_before_parsing() {
    let request = from_str(include_str!("fixtures/apigw_proxy_lead_base64.json"))
        .expect("failed to parse proxy event");
    let config = Config::default();

    let response = capture_lead(request, &config).await.expect("handler failed");
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(&response)["success"], json!(true));
}
