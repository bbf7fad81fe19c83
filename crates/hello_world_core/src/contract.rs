use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello World!";
pub const OK_STATUS_CODE: u16 = 200;

/// Proxy-integration response: a numeric status code and a string body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn decoded_body<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Builds a fresh greeting response; the body is the greeting as a JSON string.
pub fn hello_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: OK_STATUS_CODE,
        body: encode_body(GREETING),
    }
}

fn encode_body(value: &str) -> String {
    // Encoding a &str never fails, keep an empty literal as the fallback.
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn hello_response_is_ok_with_json_encoded_greeting() {
        let response = hello_response();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"Hello World!\"");
    }

    #[test]
    fn body_decodes_to_greeting_string() {
        let decoded: String = hello_response()
            .decoded_body()
            .expect("body should be valid json");
        assert_eq!(decoded, GREETING);
    }

    #[test]
    fn serializes_with_status_code_and_body_only() {
        let value = serde_json::to_value(hello_response()).expect("response should serialize");

        assert_eq!(
            value,
            json!({"statusCode": 200, "body": "\"Hello World!\""})
        );
        let keys: Vec<&str> = value
            .as_object()
            .expect("response should be an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["body", "statusCode"]);
    }

    #[test]
    fn deserializes_from_proxy_shape() {
        let response: ApiGatewayResponse =
            serde_json::from_value(json!({"statusCode": 200, "body": "\"Hello World!\""}))
                .expect("proxy response should deserialize");
        assert_eq!(response, hello_response());
    }

    #[test]
    fn decoded_body_rejects_non_json_body() {
        let response = ApiGatewayResponse {
            status_code: OK_STATUS_CODE,
            body: "Hello World!".to_string(),
        };

        response
            .decoded_body::<Value>()
            .expect_err("unquoted text is not json");
    }
}
