/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

pub const INVALID_ACTION: &str = "INVALID_ACTION";
pub const WORLD_FETCH_FAILED: &str = "WORLD_FETCH_FAILED";
pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_ACTION").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. session id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": { "code": code, "message": message, "context": context },
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": { "code": code, "message": message, "context": context },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_error_escapes_message() {
        let text = ws_error_message(INVALID_ACTION, "bad \"quote\"", None);
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], INVALID_ACTION);
        assert_eq!(value["data"]["message"], "bad \"quote\"");
        assert!(value["data"]["context"].is_null());
    }
}
