//! Response classification for JSON endpoints
//!
//! Turns a status code and raw body into either the decoded payload or a
//! typed [`SongkickError`]. Pure: no I/O, and every status/body
//! combination maps to a value.

use serde_json::{Value, json};

use crate::error::{Result, SongkickError};

const UNKNOWN_ERROR: &str = "Unknown error";
const RESOURCE_NOT_FOUND: &str = "Resource not found.";

/// Classifies a JSON endpoint response
///
/// A body that is not valid JSON is replaced by
/// `{"error": {"message": "Unknown error", "code": "<status>"}}`.
///
/// # Errors
/// - `Auth` for 401
/// - `Api` for every other status outside `200..204`; an upstream 500 is
///   reported as 501
pub fn classify_response(integration: &str, status: u16, body: &str) -> Result<Value> {
    let payload: Value = serde_json::from_str(body).unwrap_or_else(|_| {
        json!({ "error": { "message": UNKNOWN_ERROR, "code": status.to_string() } })
    });

    if (200..204).contains(&status) {
        return Ok(payload);
    }

    let message = payload
        .pointer("/error/message")
        .map(value_to_string)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    let code = payload
        .pointer("/error/code")
        .map(value_to_string)
        .unwrap_or_else(|| status.to_string());

    let api = |message: String, status: u16| SongkickError::Api {
        integration: integration.to_string(),
        message,
        status,
        code: code.clone(),
    };

    let error = match status {
        401 => SongkickError::Auth {
            integration: integration.to_string(),
            message: format!("{}: {}", integration, message),
            status,
            code: code.clone(),
        },
        400 if message == RESOURCE_NOT_FOUND => api(RESOURCE_NOT_FOUND.to_string(), 400),
        400 => api(format!("Bad request: {}", message), 400),
        500 => api(
            format!("Downstream server error (translated to HTTP 501): {}", message),
            501,
        ),
        other => api(format!("{} (HTTP {})", message, other), other),
    };

    Err(error)
}

/// Strings are taken verbatim, anything else via its JSON rendering
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
