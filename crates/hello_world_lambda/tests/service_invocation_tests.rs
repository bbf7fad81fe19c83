use std::future::poll_fn;

use hello_world_lambda::handlers::hello::handle_request;
use hello_world_lambda::ApiGatewayResponse;
use lambda_runtime::{service_fn, Context, LambdaEvent, Service};
use serde_json::{json, Value};

async fn invoke(payload: Value) -> ApiGatewayResponse {
    let mut service = service_fn(handle_request);
    poll_fn(|cx| service.poll_ready(cx))
        .await
        .expect("service should be ready");
    service
        .call(LambdaEvent::new(payload, Context::default()))
        .await
        .expect("invocation should succeed")
}

#[tokio::test]
async fn empty_event_produces_proxy_response() {
    let response = invoke(json!({})).await;

    let value = serde_json::to_value(response).expect("response should serialize");
    assert_eq!(value, json!({"statusCode": 200, "body": "\"Hello World!\""}));
}

#[tokio::test]
async fn repeated_invocations_are_identical() {
    let first = invoke(json!({})).await;
    let second = invoke(json!({"foo": "bar"})).await;
    let third = invoke(json!({"requestContext": {"stage": "dev"}})).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}
