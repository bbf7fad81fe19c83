use hello_world_core::contract::{hello_response, ApiGatewayResponse};
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;

/// Returns the greeting regardless of the event contents.
pub fn handle_hello_event(_event: &Value) -> ApiGatewayResponse {
    hello_response()
}

pub async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let response = handle_hello_event(&event.payload);
    tracing::info!(
        request_id = %event.context.request_id,
        status_code = response.status_code,
        "hello world invocation complete"
    );
    Ok(response)
}

/// Drives the handler in completion-callback style.
///
/// `completion` receives the error slot and the result slot; it is called
/// exactly once, and the error slot is always `None`.
pub fn invoke_with_completion<F>(event: &Value, _context: &Context, completion: F)
where
    F: FnOnce(Option<Error>, Option<ApiGatewayResponse>),
{
    completion(None, Some(handle_hello_event(event)));
}
